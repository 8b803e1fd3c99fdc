//! Tone output trait

/// Trait for tone outputs
///
/// Implementations drive a buzzer or speaker at fixed volume. Pitch is the
/// only control; the beep envelope (when to start, when to cut) is owned
/// by the scheduler side.
pub trait ToneSink {
    /// Start sounding a tone at the given frequency
    fn start(&mut self, freq_hz: u16);

    /// Stop sounding
    fn stop(&mut self);

    /// Whether a tone is currently sounding
    fn is_active(&self) -> bool;
}
