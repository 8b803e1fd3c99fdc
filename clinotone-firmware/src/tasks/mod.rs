//! Embassy async tasks
//!
//! Each task runs independently and communicates via channels/signals.

pub mod accel;
pub mod beeper;
pub mod button;
pub mod controller;
pub mod display;
pub mod tick;

pub use accel::accel_task;
pub use beeper::{beeper_task, PwmBuzzer};
pub use button::button_task;
pub use controller::controller_task;
pub use display::display_task;
pub use tick::tick_task;
