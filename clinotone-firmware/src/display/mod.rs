//! Status display
//!
//! Local 128x64 OLED readout: driver, font and screen rendering.

pub mod font;
pub mod renderer;
pub mod sh1106;

pub use renderer::{Renderer, Screen};
pub use sh1106::Sh1106;
