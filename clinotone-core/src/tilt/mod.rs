//! Tilt sensing logic
//!
//! Maps raw lateral acceleration samples to tilt readings and watches
//! the sample stream for staleness.

pub mod mapper;
pub mod monitor;

pub use mapper::{map_sample, TiltDirection, TiltReading};
pub use monitor::{TiltMonitor, TiltStatus};
