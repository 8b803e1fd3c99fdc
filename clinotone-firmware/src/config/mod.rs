//! Configuration loading and parsing
//!
//! The device configuration is embedded at compile time as TOML and
//! parsed at boot by a custom no_std parser.

pub mod toml;

pub use toml::parse_config;
