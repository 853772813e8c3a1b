//! Defines the `ColorBucket` enum, the five discrete intensity classes used to color
//! site markers on the map.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of five visual intensity classes derived from an irradiance value.
///
/// Buckets run from dark (`B0`) to red (`B4`). Use [`crate::color_bucket`] to
/// classify a value.
///
/// The legend labels are 200 W/m² wide, while the classification thresholds sit at
/// 200/300/400/500 W/m². The two do not line up, and both are kept exactly as the
/// dashboard has always shown them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ColorBucket {
    /// Lowest intensity, legend `0–200`.
    B0 = 0,
    /// Legend `200–400`.
    B1 = 1,
    /// Legend `400–600`.
    B2 = 2,
    /// Legend `600–800`.
    B3 = 3,
    /// Highest intensity, legend `800–1000`.
    B4 = 4,
}

impl ColorBucket {
    /// All buckets in ascending order of intensity.
    pub const ALL: [ColorBucket; 5] = [
        ColorBucket::B0,
        ColorBucket::B1,
        ColorBucket::B2,
        ColorBucket::B3,
        ColorBucket::B4,
    ];

    /// Zero-based position on the ramp.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Hex color of the bucket on the dark-to-red ramp.
    ///
    /// # Examples
    ///
    /// ```
    /// use solarnet::ColorBucket;
    ///
    /// assert_eq!(ColorBucket::B4.color(), "#d7191c");
    /// ```
    pub fn color(self) -> &'static str {
        match self {
            ColorBucket::B0 => "#1a1a2e",
            ColorBucket::B1 => "#4a1c40",
            ColorBucket::B2 => "#7d1f3f",
            ColorBucket::B3 => "#b01e2f",
            ColorBucket::B4 => "#d7191c",
        }
    }

    /// Label shown in the map legend, in W/m².
    pub fn legend_label(self) -> &'static str {
        match self {
            ColorBucket::B0 => "0–200",
            ColorBucket::B1 => "200–400",
            ColorBucket::B2 => "400–600",
            ColorBucket::B3 => "600–800",
            ColorBucket::B4 => "800–1000",
        }
    }
}

impl fmt::Display for ColorBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "B{}", self.index())
    }
}
