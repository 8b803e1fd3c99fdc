//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in clinotone-core for the device's hardware components:
//!
//! - Accelerometer (LIS3DH over I2C)
//! - Buzzer timing (PWM divider/wrap math for tone synthesis)

#![no_std]
#![deny(unsafe_code)]

pub mod accel;
pub mod buzzer;
