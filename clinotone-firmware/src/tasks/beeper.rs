//! Beep scheduler and tone emission task
//!
//! Owns the single repeating beep timer and the PWM buzzer. Cadence
//! commands arrive latest-wins from the controller; any change tears the
//! armed timer down and re-arms it at the new period, so there is never
//! more than one pending tick and no double-firing across a transition.
//! Each tick pulses a fixed-duration tone that self-terminates.

use defmt::*;
use embassy_futures::select::{select3, Either3};
use embassy_rp::pwm::{Config as PwmConfig, Pwm};
use embassy_time::{Duration, Instant, Timer};
use fixed::traits::ToFixed;

use clinotone_core::cadence::BeepCommand;
use clinotone_core::traits::ToneSink;
use clinotone_drivers::buzzer::{half_duty, tone_params};

use crate::channels::BEEP_CMD;

/// PWM buzzer on a slice's B channel
///
/// A 50% duty square at the tone frequency; zero duty is silence, so
/// stopping never leaves the pin driven high.
pub struct PwmBuzzer {
    pwm: Pwm<'static>,
    active: bool,
}

impl PwmBuzzer {
    /// RP2040 system clock feeding the PWM slices
    pub const PWM_CLOCK_HZ: u32 = 125_000_000;

    /// Wrap a configured PWM slice, starting silent
    pub fn new(pwm: Pwm<'static>) -> Self {
        let mut buzzer = Self { pwm, active: false };
        buzzer.stop();
        buzzer
    }
}

impl ToneSink for PwmBuzzer {
    fn start(&mut self, freq_hz: u16) {
        // Pitches the divider cannot reach stay silent
        let Some(tone) = tone_params(Self::PWM_CLOCK_HZ, freq_hz) else {
            return;
        };

        let mut config = PwmConfig::default();
        config.divider = tone.divider.to_fixed();
        config.top = tone.top;
        config.compare_b = half_duty(tone.top);
        self.pwm.set_config(&config);
        self.active = true;
    }

    fn stop(&mut self) {
        let mut config = PwmConfig::default();
        config.compare_b = 0;
        self.pwm.set_config(&config);
        self.active = false;
    }

    fn is_active(&self) -> bool {
        self.active
    }
}

/// Sleep until a deadline, or forever when there is none
async fn wait_until(deadline: Option<Instant>) {
    match deadline {
        Some(at) => Timer::at(at).await,
        None => core::future::pending().await,
    }
}

/// Beep scheduler task
#[embassy_executor::task]
pub async fn beeper_task(mut buzzer: PwmBuzzer) {
    info!("Beeper task started");

    let mut cmd = BeepCommand::SILENCE;
    // Deadline of the armed repeating timer; None while silent
    let mut next_beep: Option<Instant> = None;
    // Self-termination deadline of the sounding tone
    let mut tone_off: Option<Instant> = None;

    loop {
        match select3(BEEP_CMD.wait(), wait_until(next_beep), wait_until(tone_off)).await {
            Either3::First(new_cmd) => {
                if new_cmd == cmd {
                    continue;
                }

                // Full reschedule on any change, 0 -> rate included
                cmd = new_cmd;
                match cmd.period_ms {
                    Some(period) => {
                        trace!("Cadence: {} ms period at {} Hz", period, cmd.freq_hz);
                        next_beep = Some(Instant::now() + Duration::from_millis(u64::from(period)));
                    }
                    None => {
                        trace!("Cadence: silence");
                        next_beep = None;
                        tone_off = None;
                        buzzer.stop();
                    }
                }
            }

            Either3::Second(()) => {
                // Beep tick: pulse the tone and arm the next tick from the
                // scheduled instant, not from now, so the cadence does not
                // drift. A tick landing inside the previous tone retunes
                // and extends the gate (single hardware voice).
                buzzer.start(cmd.freq_hz);
                tone_off = Some(Instant::now() + Duration::from_millis(u64::from(cmd.tone_ms)));

                if let (Some(fired), Some(period)) = (next_beep, cmd.period_ms) {
                    next_beep = Some(fired + Duration::from_millis(u64::from(period)));
                }
            }

            Either3::Third(()) => {
                // Tone ran its fixed duration
                buzzer.stop();
                tone_off = None;
            }
        }
    }
}
