//! Pure mappings from an irradiance value to what the map draws for it.

pub mod color;
pub mod magnitude;
pub mod markers;

/// Irradiance ceiling the visual scales are relative to, in W/m².
pub const REFERENCE_IRRADIANCE: f64 = 1000.0;

/// Negative and NaN readings count as no irradiance.
pub(crate) fn sanitize(value: f64) -> f64 {
    if value.is_nan() || value < 0.0 {
        0.0
    } else {
        value
    }
}
