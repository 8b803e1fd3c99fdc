//! Accelerometer drivers

pub mod lis3dh;

pub use lis3dh::Lis3dh;
