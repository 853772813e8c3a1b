use serde::{Deserialize, Serialize};

/// One hour of a site's daily curve, ready for the chart widget.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartRecord {
    /// Hour index, `0..=23`.
    pub hour: u8,
    /// Irradiance in W/m², never negative.
    pub irradiance: f64,
    /// Whether this is the hour the time control points at.
    pub is_current_hour: bool,
}

/// Peak and total of one site's 24-hour series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesSummary {
    /// Index of the highest sample; the earliest one on ties.
    pub peak_hour: u8,
    /// Highest sample in W/m².
    pub peak: f64,
    /// Sum of the hourly means, in Wh/m².
    pub insolation_wh_m2: f64,
}
