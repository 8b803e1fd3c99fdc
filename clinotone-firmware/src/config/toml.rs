//! Simple TOML parser for the device configuration
//!
//! This is a minimal TOML parser that handles only the subset needed for
//! Clinotone configuration. It does NOT support the full TOML spec.
//!
//! Supported features:
//! - Key = value pairs (integers only)
//! - [section] headers
//! - Comments (# ...)
//!
//! NOT supported:
//! - Strings, booleans, arrays, inline tables
//! - Multi-line anything

use clinotone_core::config::DeviceConfig;

/// Parse error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParseError {
    /// Invalid or unknown section header
    InvalidSection,
    /// Invalid value type
    InvalidValue,
    /// Key outside any section
    KeyOutsideSection,
}

/// Current parsing context
#[derive(Debug, Clone, Copy)]
enum Section {
    Root,
    Tilt,
    Beep,
    Display,
}

/// Parse TOML configuration into DeviceConfig
///
/// Unknown keys inside known sections are ignored so old firmware keeps
/// booting against a newer config file. Unknown sections are an error.
/// Missing keys keep their defaults.
pub fn parse_config(input: &str) -> Result<DeviceConfig, ParseError> {
    let mut config = DeviceConfig::default();
    let mut section = Section::Root;

    for line in input.lines() {
        let line = line.trim();

        // Skip empty lines and comments
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        // Check for section header
        if line.starts_with('[') && line.ends_with(']') {
            section = parse_section_header(&line[1..line.len() - 1])?;
            continue;
        }

        // Key = value pair
        let (key, value) = match line.split_once('=') {
            Some((k, v)) => (k.trim(), parse_integer(v)?),
            None => return Err(ParseError::InvalidValue),
        };

        match section {
            Section::Root => return Err(ParseError::KeyOutsideSection),
            Section::Tilt => apply_tilt_key(&mut config, key, value),
            Section::Beep => apply_beep_key(&mut config, key, value),
            Section::Display => apply_display_key(&mut config, key, value),
        }
    }

    Ok(config)
}

/// Parse a section header
fn parse_section_header(name: &str) -> Result<Section, ParseError> {
    match name.trim() {
        "tilt" => Ok(Section::Tilt),
        "beep" => Ok(Section::Beep),
        "display" => Ok(Section::Display),
        _ => Err(ParseError::InvalidSection),
    }
}

/// Parse an integer value, stripping trailing comments
fn parse_integer(value: &str) -> Result<u32, ParseError> {
    let value = match value.split_once('#') {
        Some((v, _)) => v,
        None => value,
    };
    value
        .trim()
        .parse::<u32>()
        .map_err(|_| ParseError::InvalidValue)
}

fn apply_tilt_key(config: &mut DeviceConfig, key: &str, value: u32) {
    match key {
        "sample_hz" => config.tilt.sample_hz = clamp_u16(value).max(1),
        "ladder_step_deg" => config.tilt.ladder_step_deg = clamp_u8(value).max(1),
        "ladder_len" => config.tilt.ladder_len = clamp_u8(value).max(1),
        "stale_timeout_ms" => config.tilt.stale_timeout_ms = value.max(1),
        _ => {}
    }
}

fn apply_beep_key(config: &mut DeviceConfig, key: &str, value: u32) {
    match key {
        "divisor" => config.beep.divisor = clamp_u16(value).max(1),
        "left_freq_hz" => config.beep.left_freq_hz = clamp_u16(value),
        "right_freq_hz" => config.beep.right_freq_hz = clamp_u16(value),
        "tone_ms" => config.beep.tone_ms = clamp_u16(value).max(1),
        _ => {}
    }
}

fn apply_display_key(config: &mut DeviceConfig, key: &str, value: u32) {
    match key {
        "refresh_ms" => config.display.refresh_ms = value.max(50),
        _ => {}
    }
}

fn clamp_u16(value: u32) -> u16 {
    value.min(u32::from(u16::MAX)) as u16
}

fn clamp_u8(value: u32) -> u8 {
    value.min(u32::from(u8::MAX)) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_CONFIG: &str = r#"
# Device tuning
[tilt]
sample_hz = 50
ladder_step_deg = 10
ladder_len = 10
stale_timeout_ms = 500

[beep]
divisor = 1   # raw ladder rate straight through
left_freq_hz = 330
right_freq_hz = 660
tone_ms = 50

[display]
refresh_ms = 100
"#;

    #[test]
    fn test_parse_full_config() {
        let config = parse_config(FULL_CONFIG).unwrap();
        assert_eq!(config.tilt.sample_hz, 50);
        assert_eq!(config.tilt.ladder_step_deg, 10);
        assert_eq!(config.tilt.ladder_len, 10);
        assert_eq!(config.tilt.stale_timeout_ms, 500);
        assert_eq!(config.beep.divisor, 1);
        assert_eq!(config.beep.left_freq_hz, 330);
        assert_eq!(config.beep.right_freq_hz, 660);
        assert_eq!(config.beep.tone_ms, 50);
        assert_eq!(config.display.refresh_ms, 100);
    }

    #[test]
    fn test_missing_keys_keep_defaults() {
        let config = parse_config("[beep]\ndivisor = 2\n").unwrap();
        assert_eq!(config.beep.divisor, 2);
        assert_eq!(config.beep.left_freq_hz, 440);
        assert_eq!(config.beep.right_freq_hz, 880);
        assert_eq!(config.tilt.ladder_len, 19);
    }

    #[test]
    fn test_empty_input_is_all_defaults() {
        let config = parse_config("").unwrap();
        assert_eq!(config, DeviceConfig::default());
    }

    #[test]
    fn test_unknown_section_is_rejected() {
        assert_eq!(
            parse_config("[motor]\nrpm = 100\n"),
            Err(ParseError::InvalidSection)
        );
    }

    #[test]
    fn test_unknown_key_is_ignored() {
        let config = parse_config("[tilt]\nfancy_new_knob = 7\n").unwrap();
        assert_eq!(config, DeviceConfig::default());
    }

    #[test]
    fn test_key_outside_section_is_rejected() {
        assert_eq!(
            parse_config("divisor = 10\n"),
            Err(ParseError::KeyOutsideSection)
        );
    }

    #[test]
    fn test_bad_value_is_rejected() {
        assert_eq!(
            parse_config("[beep]\ndivisor = ten\n"),
            Err(ParseError::InvalidValue)
        );
    }

    #[test]
    fn test_zero_divisor_is_clamped() {
        let config = parse_config("[beep]\ndivisor = 0\n").unwrap();
        assert_eq!(config.beep.divisor, 1);
    }

    #[test]
    fn test_oversized_value_is_clamped() {
        let config = parse_config("[beep]\nleft_freq_hz = 99999999\n").unwrap();
        assert_eq!(config.beep.left_freq_hz, u16::MAX);
    }
}
