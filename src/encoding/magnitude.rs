use crate::encoding::{sanitize, REFERENCE_IRRADIANCE};

/// Smallest marker size on the map.
pub const MIN_SIZE: f64 = 24.0;
/// Largest marker size on the map.
pub const MAX_SIZE: f64 = 48.0;
/// Share of [`REFERENCE_IRRADIANCE`] past which the magnitude stops growing.
pub const SATURATION_RATIO: f64 = 0.7;

/// Maps an irradiance value (W/m²) to a continuous marker magnitude.
///
/// Computes `min(value / 1000, 0.7) * (MAX_SIZE - MIN_SIZE)`, so the result is
/// monotonic non-decreasing and never exceeds `0.7 * 24 = 16.8`. Negative and NaN
/// input is treated as 0.
///
/// # Examples
///
/// ```
/// use solarnet::visual_magnitude;
///
/// assert_eq!(visual_magnitude(0.0), 0.0);
/// assert!((visual_magnitude(500.0) - 12.0).abs() < 1e-9);
/// assert!((visual_magnitude(2000.0) - 16.8).abs() < 1e-9);
/// ```
pub fn visual_magnitude(value: f64) -> f64 {
    let ratio = (sanitize(value) / REFERENCE_IRRADIANCE).min(SATURATION_RATIO);
    ratio * (MAX_SIZE - MIN_SIZE)
}
