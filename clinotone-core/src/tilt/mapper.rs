//! Tilt mapping
//!
//! Converts one raw lateral acceleration sample into a signed tilt
//! direction and an absolute tilt angle. The mapping is stateless: it is
//! safe to re-enter on every sensor callback, and each reading is derived
//! entirely from the latest sample.

use crate::config::STANDARD_GRAVITY;

/// Degrees per radian
const DEG_PER_RAD: f32 = 57.295_78;

/// Tilt direction along the device's lateral axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TiltDirection {
    /// Positive lateral acceleration: the device leans left
    Left,
    /// Negative lateral acceleration: the device leans right
    Right,
    /// Exactly zero lateral acceleration
    Level,
}

impl TiltDirection {
    /// Short label for the readout
    pub fn label(&self) -> &'static str {
        match self {
            TiltDirection::Left => "LEFT",
            TiltDirection::Right => "RIGHT",
            TiltDirection::Level => "LEVEL",
        }
    }
}

/// One mapped tilt sample
///
/// The angle is carried in centidegrees (0.01° resolution) so the readout
/// can show two decimals without dragging floats through the task mesh.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TiltReading {
    /// Which way the device leans
    pub direction: TiltDirection,
    /// Absolute tilt angle in centidegrees
    pub angle_centideg: u16,
}

impl TiltReading {
    /// The level reading (zero angle, no lean)
    pub const LEVEL: Self = Self {
        direction: TiltDirection::Level,
        angle_centideg: 0,
    };
}

/// Map a lateral acceleration sample to a tilt reading
///
/// `x_ms2` is the acceleration along the lateral axis in m/s², gravity
/// component included. The angle estimate `atan2(x, g)` assumes the device
/// is otherwise near-stationary; linear acceleration shows up as angle
/// noise. That is a precision limit of the sensor-derived estimate, not
/// something this layer compensates for.
pub fn map_sample(x_ms2: f32) -> TiltReading {
    let direction = if x_ms2 > 0.0 {
        TiltDirection::Left
    } else if x_ms2 < 0.0 {
        TiltDirection::Right
    } else {
        TiltDirection::Level
    };

    let raw_deg = libm::atan2f(x_ms2, STANDARD_GRAVITY) * DEG_PER_RAD;

    TiltReading {
        direction,
        angle_centideg: to_centideg(libm::fabsf(raw_deg)),
    }
}

/// Convert degrees to rounded, clamped centidegrees
fn to_centideg(deg: f32) -> u16 {
    let centi = deg * 100.0 + 0.5;
    if centi <= 0.0 {
        0
    } else if centi >= u16::MAX as f32 {
        u16::MAX
    } else {
        centi as u16
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_follows_sign() {
        assert_eq!(map_sample(0.1).direction, TiltDirection::Left);
        assert_eq!(map_sample(9.81).direction, TiltDirection::Left);
        assert_eq!(map_sample(-0.1).direction, TiltDirection::Right);
        assert_eq!(map_sample(-9.81).direction, TiltDirection::Right);
        assert_eq!(map_sample(0.0).direction, TiltDirection::Level);
        // Negative zero still reads as level
        assert_eq!(map_sample(-0.0).direction, TiltDirection::Level);
    }

    #[test]
    fn test_level_has_zero_angle() {
        assert_eq!(map_sample(0.0), TiltReading::LEVEL);
    }

    #[test]
    fn test_forty_five_degrees() {
        // x equal to gravity puts the lateral axis at 45°
        let left = map_sample(9.81);
        assert_eq!(left.direction, TiltDirection::Left);
        assert_eq!(left.angle_centideg, 4500);

        let right = map_sample(-9.81);
        assert_eq!(right.direction, TiltDirection::Right);
        assert_eq!(right.angle_centideg, 4500);
    }

    #[test]
    fn test_angle_is_symmetric_in_sign() {
        for mg in [100u32, 500, 981, 2500, 5000, 9810, 20000] {
            let x = mg as f32 / 1000.0;
            assert_eq!(
                map_sample(x).angle_centideg,
                map_sample(-x).angle_centideg,
                "asymmetric at x = {x}"
            );
        }
    }

    #[test]
    fn test_angle_monotonic_in_magnitude() {
        let mut last = 0;
        for mg in (0..30_000u32).step_by(50) {
            let angle = map_sample(mg as f32 / 1000.0).angle_centideg;
            assert!(angle >= last, "angle dropped at x = {} mg", mg);
            last = angle;
        }
    }

    #[test]
    fn test_angle_stays_below_ninety() {
        // atan2 against a fixed positive gravity arm can never reach 90°,
        // however large the lateral reading gets
        assert!(map_sample(1000.0).angle_centideg < 9000);
        assert!(map_sample(-1000.0).angle_centideg < 9000);
    }

    #[test]
    fn test_known_small_angles() {
        // tan(5°) * 9.81 ≈ 0.858 m/s²
        let r = map_sample(0.8583);
        assert!(
            (495..=505).contains(&r.angle_centideg),
            "expected ≈5.00°, got {}",
            r.angle_centideg
        );
        // tan(30°) * 9.81 ≈ 5.664 m/s²
        let r = map_sample(5.6644);
        assert!(
            (2995..=3005).contains(&r.angle_centideg),
            "expected ≈30.00°, got {}",
            r.angle_centideg
        );
    }
}
