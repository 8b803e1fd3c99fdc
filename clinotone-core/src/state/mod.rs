//! Session state machine
//!
//! Sensor sampling and tone output are a function of the current state
//! and an event.

pub mod events;
pub mod machine;

pub use events::Event;
pub use machine::{ErrorKind, State};
