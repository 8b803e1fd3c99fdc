//! Buzzer timing

pub mod pwm;

pub use pwm::{half_duty, tone_params, PwmTone};
