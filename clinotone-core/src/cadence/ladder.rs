//! Beep-rate ladder
//!
//! Evenly spaced angle thresholds that discretize the tilt angle into an
//! integer beep rate.

use crate::config::{DEFAULT_LADDER_LEN, DEFAULT_LADDER_STEP_DEG};

/// Angle threshold ladder
///
/// Thresholds run `0°, step, 2*step, ...` for `len` entries. The rate for
/// an angle is `i + 1` where `i` is the largest threshold index the angle
/// reaches, so any angle maps to at least rate 1 and the rate is a
/// non-decreasing step function of the angle. Angles past the last
/// threshold saturate at the top rate.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RateLadder {
    /// Threshold spacing in degrees
    step_deg: u8,
    /// Number of thresholds
    len: u8,
}

impl RateLadder {
    /// Create a ladder with the given spacing and threshold count
    ///
    /// Zero values are clamped to 1; a degenerate ladder still maps every
    /// angle to a valid rate.
    pub fn new(step_deg: u8, len: u8) -> Self {
        Self {
            step_deg: step_deg.max(1),
            len: len.max(1),
        }
    }

    /// The saturated top rate
    pub fn top_rate(&self) -> u8 {
        self.len
    }

    /// Raw beep rate for an absolute tilt angle in centidegrees
    pub fn rate_for(&self, angle_centideg: u16) -> u8 {
        let step_centideg = u32::from(self.step_deg) * 100;
        let index = (u32::from(angle_centideg) / step_centideg).min(u32::from(self.len) - 1);
        (index + 1) as u8
    }
}

impl Default for RateLadder {
    fn default() -> Self {
        Self::new(DEFAULT_LADDER_STEP_DEG, DEFAULT_LADDER_LEN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_angle_is_rate_one() {
        let ladder = RateLadder::default();
        assert_eq!(ladder.rate_for(0), 1);
        assert_eq!(ladder.rate_for(499), 1);
    }

    #[test]
    fn test_threshold_boundaries() {
        let ladder = RateLadder::default();
        // Each 5° threshold bumps the rate by one
        assert_eq!(ladder.rate_for(500), 2);
        assert_eq!(ladder.rate_for(999), 2);
        assert_eq!(ladder.rate_for(1000), 3);
        assert_eq!(ladder.rate_for(4500), 10);
    }

    #[test]
    fn test_top_of_ladder() {
        let ladder = RateLadder::default();
        assert_eq!(ladder.rate_for(8999), 18);
        assert_eq!(ladder.rate_for(9000), 19);
        assert_eq!(ladder.top_rate(), 19);
    }

    #[test]
    fn test_saturates_past_last_threshold() {
        let ladder = RateLadder::default();
        assert_eq!(ladder.rate_for(9001), ladder.rate_for(9000));
        assert_eq!(ladder.rate_for(15000), 19);
        assert_eq!(ladder.rate_for(u16::MAX), 19);
    }

    #[test]
    fn test_rate_is_monotonic() {
        let ladder = RateLadder::default();
        let mut last = 0;
        for angle in 0..=18_000u16 {
            let rate = ladder.rate_for(angle);
            assert!(rate >= last, "rate dropped at {angle} centideg");
            last = rate;
        }
    }

    #[test]
    fn test_custom_spacing() {
        let ladder = RateLadder::new(10, 10);
        assert_eq!(ladder.rate_for(0), 1);
        assert_eq!(ladder.rate_for(1000), 2);
        assert_eq!(ladder.rate_for(9000), 10);
        assert_eq!(ladder.rate_for(9001), 10);
    }

    #[test]
    fn test_degenerate_ladder_is_clamped() {
        let ladder = RateLadder::new(0, 0);
        assert_eq!(ladder.rate_for(0), 1);
        assert_eq!(ladder.rate_for(u16::MAX), 1);
    }
}
