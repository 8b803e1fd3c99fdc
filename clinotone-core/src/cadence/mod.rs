//! Beep cadence
//!
//! Discretizes the tilt angle into a beep rate and plans the resulting
//! tone commands for the scheduler.

pub mod ladder;
pub mod planner;

pub use ladder::RateLadder;
pub use planner::{BeepCommand, CadencePlanner};
