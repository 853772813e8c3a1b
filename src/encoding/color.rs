use crate::encoding::{sanitize, REFERENCE_IRRADIANCE};
use crate::types::color_bucket::ColorBucket;
use serde::Serialize;

/// Upper bounds (exclusive) of `value / 1000` for each bucket, checked in order.
/// Anything at or above the last bound is [`ColorBucket::B4`].
pub const BUCKET_THRESHOLDS: [(f64, ColorBucket); 4] = [
    (0.2, ColorBucket::B0),
    (0.3, ColorBucket::B1),
    (0.4, ColorBucket::B2),
    (0.5, ColorBucket::B3),
];

/// Classifies an irradiance value (W/m²) into one of five color buckets.
///
/// Negative and NaN input is treated as 0.
///
/// # Examples
///
/// ```
/// use solarnet::{color_bucket, ColorBucket};
///
/// assert_eq!(color_bucket(150.0), ColorBucket::B0);
/// assert_eq!(color_bucket(250.0), ColorBucket::B1);
/// assert_eq!(color_bucket(999.0), ColorBucket::B4);
/// ```
pub fn color_bucket(value: f64) -> ColorBucket {
    let ratio = sanitize(value) / REFERENCE_IRRADIANCE;
    BUCKET_THRESHOLDS
        .iter()
        .find(|(bound, _)| ratio < *bound)
        .map(|&(_, bucket)| bucket)
        .unwrap_or(ColorBucket::B4)
}

/// One row of the map legend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LegendEntry {
    pub bucket: ColorBucket,
    pub color: &'static str,
    pub label: &'static str,
}

/// The legend rows, lowest bucket first.
pub fn legend() -> [LegendEntry; 5] {
    ColorBucket::ALL.map(|bucket| LegendEntry {
        bucket,
        color: bucket.color(),
        label: bucket.legend_label(),
    })
}
