//! State machine definition
//!
//! The session is a one-way street: the device boots to an idle prompt and
//! only starts sensing and sounding after an explicit user press. Once
//! running there is no stop or pause; faults park the session in a
//! terminal error state.

use super::events::Event;

/// Session states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum State {
    /// Power-on initialization, hardware probe, config loading
    Boot,
    /// Ready; waiting for the user to press start
    Idle,
    /// Sensing tilt and sounding the cadence
    Running,
    /// Fault detected; cadence silenced
    Error(ErrorKind),
}

/// Types of errors that can occur
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ErrorKind {
    /// Accelerometer missing or wrong chip at boot probe
    SensorMissing,
    /// Configuration error
    ConfigError,
}

impl State {
    /// Check if this state allows sensor sampling
    pub fn sampling_allowed(&self) -> bool {
        matches!(self, State::Running)
    }

    /// Check if this state allows tone output
    pub fn tone_allowed(&self) -> bool {
        matches!(self, State::Running)
    }

    /// Check if this is an error state
    pub fn is_error(&self) -> bool {
        matches!(self, State::Error(_))
    }

    /// Process an event and return the next state
    ///
    /// This is the core state transition logic.
    pub fn transition(self, event: Event) -> Self {
        use Event::*;
        use State::*;

        match (self, event) {
            // Boot transitions
            (Boot, BootComplete) => Idle,
            (Boot, ErrorDetected(kind)) => Error(kind),

            // Idle transitions
            (Idle, StartPressed) => Running,
            (Idle, ErrorDetected(kind)) => Error(kind),

            // Running transitions: no stop affordance, only faults
            (Running, ErrorDetected(kind)) => Error(kind),

            // Error is terminal for the session
            // Default: stay in current state
            _ => self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boot_to_idle() {
        let state = State::Boot;
        let next = state.transition(Event::BootComplete);
        assert_eq!(next, State::Idle);
    }

    #[test]
    fn test_start_is_explicit() {
        // Nothing but a user press leaves idle
        let idle = State::Idle;
        assert_eq!(idle.transition(Event::BootComplete), State::Idle);
        assert_eq!(idle.transition(Event::StartPressed), State::Running);
    }

    #[test]
    fn test_running_is_one_way() {
        let running = State::Running;
        assert_eq!(running.transition(Event::StartPressed), State::Running);
        assert_eq!(running.transition(Event::BootComplete), State::Running);
    }

    #[test]
    fn test_error_from_any_state() {
        let states = [State::Boot, State::Idle, State::Running];

        for state in states {
            let next = state.transition(Event::ErrorDetected(ErrorKind::SensorMissing));
            assert!(matches!(next, State::Error(ErrorKind::SensorMissing)));
        }
    }

    #[test]
    fn test_error_is_terminal() {
        let error = State::Error(ErrorKind::SensorMissing);
        assert_eq!(error.transition(Event::StartPressed), error);
        assert_eq!(error.transition(Event::BootComplete), error);
        assert!(error.is_error());
    }

    #[test]
    fn test_sampling_allowed() {
        assert!(State::Running.sampling_allowed());
        assert!(!State::Boot.sampling_allowed());
        assert!(!State::Idle.sampling_allowed());
        assert!(!State::Error(ErrorKind::SensorMissing).sampling_allowed());
    }

    #[test]
    fn test_tone_allowed() {
        assert!(State::Running.tone_allowed());
        assert!(!State::Idle.tone_allowed());
        assert!(!State::Error(ErrorKind::ConfigError).tone_allowed());
    }
}
