//! Build script for clinotone-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates clinotone.toml at compile time

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

fn main() {
    setup_linker();
    validate_config();
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());

    // Re-run if memory.x changes
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Validate clinotone.toml configuration at compile time
fn validate_config() {
    // Re-run if clinotone.toml changes
    println!("cargo:rerun-if-changed=clinotone.toml");

    let config_path = Path::new("clinotone.toml");

    if !config_path.exists() {
        panic!(
            "clinotone.toml not found - the firmware embeds its tuning \
             constants from this file; create it in the clinotone-firmware \
             directory"
        );
    }

    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => panic!("Failed to read clinotone.toml: {}", e),
    };

    let config: toml::Value = match toml::from_str(&config_content) {
        Ok(value) => value,
        Err(e) => panic!("Invalid TOML syntax in clinotone.toml: {}", e),
    };

    validate_required_sections(&config);
    validate_tilt(&config);
    validate_beep(&config);

    println!("cargo:warning=clinotone.toml validated successfully");
}

/// Validate that required sections exist
fn validate_required_sections(config: &toml::Value) {
    for section in ["tilt", "beep", "display"] {
        if config.get(section).is_none() {
            panic!("clinotone.toml: missing required [{}] section", section);
        }
    }
}

/// Validate tilt configuration ranges
fn validate_tilt(config: &toml::Value) {
    let tilt = match config.get("tilt").and_then(|t| t.as_table()) {
        Some(t) => t,
        None => panic!("clinotone.toml: [tilt] must be a table"),
    };

    let mut errors = Vec::new();

    if let Some(toml::Value::Integer(hz)) = tilt.get("sample_hz") {
        if *hz < 1 || *hz > 400 {
            errors.push("[tilt] sample_hz must be 1-400");
        }
    }

    let step = tilt
        .get("ladder_step_deg")
        .and_then(|v| v.as_integer())
        .unwrap_or(5);
    let len = tilt
        .get("ladder_len")
        .and_then(|v| v.as_integer())
        .unwrap_or(19);

    if step < 1 || step > 90 {
        errors.push("[tilt] ladder_step_deg must be 1-90");
    }
    if len < 1 || len > 64 {
        errors.push("[tilt] ladder_len must be 1-64");
    }
    if step * (len - 1) > 180 {
        errors.push("[tilt] ladder must not extend past 180 degrees");
    }

    if !errors.is_empty() {
        panic!("clinotone.toml: {}", errors.join("; "));
    }
}

/// Validate beep configuration ranges
fn validate_beep(config: &toml::Value) {
    let beep = match config.get("beep").and_then(|b| b.as_table()) {
        Some(b) => b,
        None => panic!("clinotone.toml: [beep] must be a table"),
    };

    let mut errors = Vec::new();

    if let Some(toml::Value::Integer(divisor)) = beep.get("divisor") {
        if *divisor < 1 || *divisor > 100 {
            errors.push("[beep] divisor must be 1-100");
        }
    }

    for key in ["left_freq_hz", "right_freq_hz"] {
        if let Some(toml::Value::Integer(freq)) = beep.get(key) {
            // The PWM divider cannot reach subsonic tones at 125 MHz
            if *freq < 20 || *freq > 20_000 {
                errors.push("[beep] tone frequencies must be 20-20000 Hz");
                break;
            }
        }
    }

    if let Some(toml::Value::Integer(ms)) = beep.get("tone_ms") {
        if *ms < 10 || *ms > 1000 {
            errors.push("[beep] tone_ms must be 10-1000");
        }
    }

    if !errors.is_empty() {
        panic!("clinotone.toml: {}", errors.join("; "));
    }
}
