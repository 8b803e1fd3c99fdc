//! Configuration types
//!
//! Tuning constants for the tilt-to-beep pipeline. Values come from the
//! embedded `clinotone.toml`, parsed at boot by the firmware.

pub mod types;

pub use types::*;
