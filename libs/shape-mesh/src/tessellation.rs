//! # Tessellation
//!
//! Maps a radius to the number of straight sides used to approximate its
//! circle.
//!
//! ```text
//! sides = clamp(round(2π·r / arc_length), MIN_SIDE_COUNT, MAX_SIDE_COUNT)
//! ```
//!
//! The clamp is a hard bound on buffer size, not a quality setting.

use config::constants::{DEFAULT_ARC_LENGTH, MAX_SIDE_COUNT, MIN_SIDE_COUNT};
use std::f64::consts::TAU;

/// Side count for a circle of `radius` at the default arc length.
///
/// # Example
///
/// ```rust
/// use shape_mesh::tessellation::side_count;
///
/// assert_eq!(side_count(2.0), 126);
/// assert_eq!(side_count(0.0), 3);
/// assert_eq!(side_count(1000.0), 2000);
/// ```
pub fn side_count(radius: f64) -> u32 {
    side_count_with_arc(radius, DEFAULT_ARC_LENGTH)
}

/// Side count for a circle of `radius` when each side spans `arc_length`.
///
/// Non-finite intermediate results (such as `0 / 0`) fall back to the
/// minimum side count.
pub fn side_count_with_arc(radius: f64, arc_length: f64) -> u32 {
    let requested = (TAU * radius / arc_length).round();
    if requested.is_nan() {
        log::debug!(
            "side count undefined for radius {radius} and arc length {arc_length}, using {MIN_SIDE_COUNT}"
        );
        return MIN_SIDE_COUNT;
    }

    let clamped = requested.clamp(f64::from(MIN_SIDE_COUNT), f64::from(MAX_SIDE_COUNT));
    if clamped != requested {
        log::debug!("side count {requested} for radius {radius} clamped to {clamped}");
    }
    clamped as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_count_radius_two() {
        // round(2π·2 / 0.1) = round(125.66)
        assert_eq!(side_count(2.0), 126);
    }

    #[test]
    fn test_side_count_floor() {
        assert_eq!(side_count(0.0), MIN_SIDE_COUNT);
        assert_eq!(side_count(0.001), MIN_SIDE_COUNT);
        assert_eq!(side_count(-4.0), MIN_SIDE_COUNT);
    }

    #[test]
    fn test_side_count_ceiling() {
        assert_eq!(side_count(1000.0), MAX_SIDE_COUNT);
        assert_eq!(side_count(f64::INFINITY), MAX_SIDE_COUNT);
    }

    #[test]
    fn test_side_count_monotonic() {
        let mut previous = 0;
        for step in 0..400 {
            let radius = step as f64 * 0.01;
            let sides = side_count(radius);
            assert!(sides >= previous, "side count decreased at radius {radius}");
            previous = sides;
        }
    }

    #[test]
    fn test_custom_arc_length() {
        // round(2π·1 / 1) = round(6.28)
        assert_eq!(side_count_with_arc(1.0, 1.0), 6);
        assert_eq!(side_count_with_arc(1.0, 0.0), MAX_SIDE_COUNT);
    }

    #[test]
    fn test_undefined_ratio_uses_floor() {
        assert_eq!(side_count_with_arc(0.0, 0.0), MIN_SIDE_COUNT);
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(side_count(3.7), side_count(3.7));
    }
}
