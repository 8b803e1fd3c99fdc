//! Main controller coordinating state machine, cadence and monitoring
//!
//! The controller is the central brain that:
//! - Processes input events from the start button
//! - Updates the session state machine
//! - Plans the beep cadence from the latest tilt reading
//! - Watches the sample stream for staleness
//! - Provides the readout values for the display

use clinotone_core::cadence::{BeepCommand, CadencePlanner, RateLadder};
use clinotone_core::config::DeviceConfig;
use clinotone_core::state::{ErrorKind, Event, State};
use clinotone_core::tilt::{TiltMonitor, TiltReading, TiltStatus};

use crate::channels::InputEvent;

/// Controller state for coordinating subsystems
pub struct Controller {
    /// Current session state
    state: State,
    /// Cadence planner
    planner: CadencePlanner,
    /// Sample staleness monitor
    monitor: TiltMonitor,
    /// Latest mapped tilt reading
    latest: Option<TiltReading>,
    /// Last tick timestamp (ms)
    last_tick_ms: u32,
}

impl Controller {
    /// Create a new controller from the device configuration
    pub fn new(config: &DeviceConfig) -> Self {
        let ladder = RateLadder::new(config.tilt.ladder_step_deg, config.tilt.ladder_len);
        Self {
            state: State::Boot,
            planner: CadencePlanner::new(config.beep, ladder),
            monitor: TiltMonitor::new(config.tilt.stale_timeout_ms),
            latest: None,
            last_tick_ms: 0,
        }
    }

    /// Complete the boot sequence
    pub fn boot_complete(&mut self) {
        self.transition(Event::BootComplete);
    }

    /// Get current state
    pub fn state(&self) -> State {
        self.state
    }

    /// Process an input event from the button
    ///
    /// A press only means something before the session starts; once
    /// running there is nothing left to press for.
    pub fn process_input(&mut self, input: InputEvent) -> Option<Event> {
        match (self.state, input) {
            (State::Idle, InputEvent::Press) => {
                self.transition(Event::StartPressed);
                Some(Event::StartPressed)
            }
            _ => None,
        }
    }

    /// Record a fault reported by another task
    pub fn report_fault(&mut self, kind: ErrorKind) {
        self.transition(Event::ErrorDetected(kind));
    }

    /// Update the latest tilt reading
    ///
    /// `None` marks a failed sensor read; the cadence falls silent once
    /// the staleness window runs out (or immediately on a failed read).
    pub fn update_tilt(&mut self, reading: Option<TiltReading>) {
        match reading {
            Some(reading) => {
                self.monitor.sample_received();
                self.latest = Some(reading);
            }
            None => self.monitor.sample_failed(),
        }
    }

    /// Periodic tick - advance the staleness clock
    pub fn tick(&mut self, now_ms: u32) {
        let delta = now_ms.wrapping_sub(self.last_tick_ms);
        self.last_tick_ms = now_ms;
        self.monitor.update_time(delta);
    }

    /// Current beep command for the scheduler
    ///
    /// Silent unless the session is running and fresh samples are coming
    /// in; teardown and fault paths all funnel through this.
    pub fn beep_command(&self) -> BeepCommand {
        if !self.state.tone_allowed() || !self.monitor.is_live() {
            return BeepCommand::SILENCE;
        }
        match self.latest {
            Some(reading) => self.planner.plan(reading),
            None => BeepCommand::SILENCE,
        }
    }

    /// Latest reading for the readout, if the stream is live
    pub fn live_reading(&self) -> Option<TiltReading> {
        match self.monitor.check() {
            TiltStatus::Ok => self.latest,
            TiltStatus::NoSignal => None,
        }
    }

    /// Emitted beep rate in centibeeps per second for the readout
    pub fn rate_centibeeps(&self) -> u32 {
        match self.live_reading() {
            Some(reading) => self.planner.rate_centibeeps(reading),
            None => 0,
        }
    }

    fn transition(&mut self, event: Event) {
        self.state = self.state.transition(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clinotone_core::tilt::map_sample;

    fn running_controller() -> Controller {
        let mut controller = Controller::new(&DeviceConfig::default());
        controller.boot_complete();
        controller.process_input(InputEvent::Press);
        controller
    }

    #[test]
    fn test_press_starts_session() {
        let mut controller = Controller::new(&DeviceConfig::default());
        assert_eq!(controller.state(), State::Boot);

        controller.boot_complete();
        assert_eq!(controller.state(), State::Idle);

        let event = controller.process_input(InputEvent::Press);
        assert_eq!(event, Some(Event::StartPressed));
        assert_eq!(controller.state(), State::Running);
    }

    #[test]
    fn test_press_before_boot_is_ignored() {
        let mut controller = Controller::new(&DeviceConfig::default());
        assert_eq!(controller.process_input(InputEvent::Press), None);
        assert_eq!(controller.state(), State::Boot);
    }

    #[test]
    fn test_silent_before_start() {
        let mut controller = Controller::new(&DeviceConfig::default());
        controller.boot_complete();
        controller.update_tilt(Some(map_sample(9.81)));
        assert!(controller.beep_command().is_silent());
    }

    #[test]
    fn test_beeps_while_running() {
        let mut controller = running_controller();
        controller.update_tilt(Some(map_sample(9.81)));

        let cmd = controller.beep_command();
        assert_eq!(cmd.period_ms, Some(1000));
        assert_eq!(cmd.freq_hz, 440);
        assert_eq!(controller.rate_centibeeps(), 100);
    }

    #[test]
    fn test_level_is_silent_while_running() {
        let mut controller = running_controller();
        controller.update_tilt(Some(TiltReading::LEVEL));
        assert!(controller.beep_command().is_silent());
        // But the readout is still live
        assert_eq!(controller.live_reading(), Some(TiltReading::LEVEL));
    }

    #[test]
    fn test_stale_stream_goes_silent() {
        let mut controller = running_controller();
        controller.update_tilt(Some(map_sample(9.81)));
        assert!(!controller.beep_command().is_silent());

        controller.tick(100);
        controller.tick(2000);
        assert!(controller.beep_command().is_silent());
        assert_eq!(controller.live_reading(), None);
    }

    #[test]
    fn test_failed_read_goes_silent_immediately() {
        let mut controller = running_controller();
        controller.update_tilt(Some(map_sample(9.81)));
        controller.update_tilt(None);
        assert!(controller.beep_command().is_silent());
    }

    #[test]
    fn test_stream_recovers() {
        let mut controller = running_controller();
        controller.update_tilt(None);
        assert!(controller.beep_command().is_silent());

        controller.update_tilt(Some(map_sample(-9.81)));
        let cmd = controller.beep_command();
        assert_eq!(cmd.freq_hz, 880);
    }

    #[test]
    fn test_fault_silences_for_good() {
        let mut controller = running_controller();
        controller.update_tilt(Some(map_sample(9.81)));
        controller.report_fault(ErrorKind::SensorMissing);

        assert!(controller.state().is_error());
        assert!(controller.beep_command().is_silent());

        // No way back: further samples and presses change nothing
        controller.update_tilt(Some(map_sample(9.81)));
        controller.process_input(InputEvent::Press);
        assert!(controller.beep_command().is_silent());
    }
}
