//! Cadence planning
//!
//! Turns tilt readings into beep commands: which tone to pulse and how
//! often. The scheduler side tears down and re-arms its timer whenever the
//! planned command changes; the planner itself is pure.

use super::ladder::RateLadder;
use crate::config::BeepConfig;
use crate::tilt::{TiltDirection, TiltReading};

/// One beep cadence command
///
/// `period_ms = None` is silence: the scheduler cancels any armed timer.
/// Silence is the normal steady state for a level device, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BeepCommand {
    /// Interval between beeps, or None for silence
    pub period_ms: Option<u32>,
    /// Tone frequency to pulse on each tick (Hz)
    pub freq_hz: u16,
    /// Tone duration per beep (ms)
    pub tone_ms: u16,
}

impl BeepCommand {
    /// The silent command
    pub const SILENCE: Self = Self {
        period_ms: None,
        freq_hz: 0,
        tone_ms: 0,
    };

    /// Whether this command stops all beeping
    pub fn is_silent(&self) -> bool {
        self.period_ms.is_none()
    }
}

/// Plans the beep cadence from tilt readings
#[derive(Debug, Clone)]
pub struct CadencePlanner {
    cfg: BeepConfig,
    ladder: RateLadder,
}

impl CadencePlanner {
    /// Create a planner from the beep config and rate ladder
    ///
    /// A zero divisor is clamped to 1; it divides the rate.
    pub fn new(cfg: BeepConfig, ladder: RateLadder) -> Self {
        let cfg = BeepConfig {
            divisor: cfg.divisor.max(1),
            ..cfg
        };
        Self { cfg, ladder }
    }

    /// Raw ladder rate for a reading
    ///
    /// A level reading forces rate 0 regardless of the computed angle.
    pub fn rate(&self, reading: TiltReading) -> u8 {
        match reading.direction {
            TiltDirection::Level => 0,
            TiltDirection::Left | TiltDirection::Right => {
                self.ladder.rate_for(reading.angle_centideg)
            }
        }
    }

    /// Emitted rate in centibeeps per second (for the two-decimal readout)
    pub fn rate_centibeeps(&self, reading: TiltReading) -> u32 {
        u32::from(self.rate(reading)) * 100 / u32::from(self.cfg.divisor)
    }

    /// Beep period for a raw ladder rate
    ///
    /// The divisor smooths the raw rate down to `rate / divisor` beeps per
    /// second, so the period is `1000 ms * divisor / rate`.
    pub fn period_ms(&self, rate: u8) -> Option<u32> {
        (rate > 0).then(|| u32::from(self.cfg.divisor) * 1000 / u32::from(rate))
    }

    /// Plan the beep command for a reading
    pub fn plan(&self, reading: TiltReading) -> BeepCommand {
        let rate = self.rate(reading);
        match self.period_ms(rate) {
            None => BeepCommand::SILENCE,
            Some(period_ms) => BeepCommand {
                period_ms: Some(period_ms),
                freq_hz: match reading.direction {
                    TiltDirection::Left => self.cfg.left_freq_hz,
                    TiltDirection::Right => self.cfg.right_freq_hz,
                    // Unreachable: a level reading has rate 0
                    TiltDirection::Level => 0,
                },
                tone_ms: self.cfg.tone_ms,
            },
        }
    }
}

impl Default for CadencePlanner {
    fn default() -> Self {
        Self::new(BeepConfig::default(), RateLadder::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tilt::map_sample;

    #[test]
    fn test_level_is_silent() {
        let planner = CadencePlanner::default();
        let cmd = planner.plan(TiltReading::LEVEL);
        assert_eq!(cmd, BeepCommand::SILENCE);
        assert!(cmd.is_silent());
    }

    #[test]
    fn test_left_forty_five() {
        // x = g: 45° left, ladder rate 10, one beep per second at 440 Hz
        let planner = CadencePlanner::default();
        let reading = map_sample(9.81);

        assert_eq!(planner.rate(reading), 10);
        assert_eq!(planner.rate_centibeeps(reading), 100);

        let cmd = planner.plan(reading);
        assert_eq!(cmd.period_ms, Some(1000));
        assert_eq!(cmd.freq_hz, 440);
        assert_eq!(cmd.tone_ms, 100);
    }

    #[test]
    fn test_right_forty_five() {
        let planner = CadencePlanner::default();
        let reading = map_sample(-9.81);

        assert_eq!(planner.rate(reading), 10);
        let cmd = planner.plan(reading);
        assert_eq!(cmd.period_ms, Some(1000));
        assert_eq!(cmd.freq_hz, 880);
    }

    #[test]
    fn test_top_rate_period() {
        let planner = CadencePlanner::default();
        let reading = TiltReading {
            direction: TiltDirection::Left,
            angle_centideg: 9000,
        };

        assert_eq!(planner.rate(reading), 19);
        assert_eq!(planner.rate_centibeeps(reading), 190);
        assert_eq!(planner.plan(reading).period_ms, Some(526));
    }

    #[test]
    fn test_period_from_unsmoothed_rates() {
        // With the divisor at 1 the raw rate is beeps per second directly
        let cfg = BeepConfig {
            divisor: 1,
            ..BeepConfig::default()
        };
        let planner = CadencePlanner::new(cfg, RateLadder::default());

        assert_eq!(planner.period_ms(2), Some(500));
        assert_eq!(planner.period_ms(5), Some(200));
        assert_eq!(planner.period_ms(0), None);
    }

    #[test]
    fn test_period_shrinks_with_rate() {
        let planner = CadencePlanner::default();
        let mut last = u32::MAX;
        for rate in 1..=19u8 {
            let period = planner.period_ms(rate).unwrap();
            assert!(period <= last, "period grew at rate {rate}");
            last = period;
        }
    }

    #[test]
    fn test_zero_divisor_is_clamped() {
        let cfg = BeepConfig {
            divisor: 0,
            ..BeepConfig::default()
        };
        let planner = CadencePlanner::new(cfg, RateLadder::default());
        assert_eq!(planner.period_ms(10), Some(100));
    }

    #[test]
    fn test_level_silent_even_with_angle() {
        // Direction wins over the computed angle
        let planner = CadencePlanner::default();
        let reading = TiltReading {
            direction: TiltDirection::Level,
            angle_centideg: 4500,
        };
        assert_eq!(planner.rate(reading), 0);
        assert!(planner.plan(reading).is_silent());
    }
}
