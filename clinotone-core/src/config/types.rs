//! Configuration type definitions

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Standard gravity in m/s², the fixed reference arm for the tilt angle
pub const STANDARD_GRAVITY: f32 = 9.81;

/// Default ladder threshold spacing in degrees
pub const DEFAULT_LADDER_STEP_DEG: u8 = 5;

/// Default number of ladder thresholds (0° through 90° in 5° steps)
pub const DEFAULT_LADDER_LEN: u8 = 19;

/// Default smoothing divisor applied to the raw ladder rate
pub const DEFAULT_DIVISOR: u16 = 10;

/// Tilt sensing configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TiltConfig {
    /// Sensor sampling rate in Hz
    pub sample_hz: u16,
    /// Ladder threshold spacing in degrees
    pub ladder_step_deg: u8,
    /// Number of ladder thresholds
    pub ladder_len: u8,
    /// Time without a good sample before the readout reports no signal (ms)
    pub stale_timeout_ms: u32,
}

impl Default for TiltConfig {
    fn default() -> Self {
        Self {
            sample_hz: 25,
            ladder_step_deg: DEFAULT_LADDER_STEP_DEG,
            ladder_len: DEFAULT_LADDER_LEN,
            stale_timeout_ms: 1000,
        }
    }
}

/// Beep cadence and tone configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BeepConfig {
    /// Smoothing divisor: emitted rate is `ladder rate / divisor` beeps/s
    pub divisor: u16,
    /// Tone frequency for a left tilt (Hz)
    pub left_freq_hz: u16,
    /// Tone frequency for a right tilt (Hz)
    pub right_freq_hz: u16,
    /// Tone duration per beep (ms)
    pub tone_ms: u16,
}

impl Default for BeepConfig {
    fn default() -> Self {
        Self {
            divisor: DEFAULT_DIVISOR,
            left_freq_hz: 440,
            right_freq_hz: 880,
            tone_ms: 100,
        }
    }
}

/// Display configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DisplayConfig {
    /// Readout refresh interval in milliseconds
    pub refresh_ms: u32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { refresh_ms: 200 }
    }
}

/// Complete device configuration
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DeviceConfig {
    pub tilt: TiltConfig,
    pub beep: BeepConfig,
    pub display: DisplayConfig,
}
