use crate::irradiance::error::FetchError;
use crate::types::series::RollingWindow;
use crate::types::site::{LatLon, Site};
use chrono::{DateTime, Duration, NaiveDate, Utc};
use std::future::Future;

/// What the aggregator asks the provider for: one site's hourly values between two
/// UTC calendar dates (inclusive).
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesRequest {
    /// Name of the site, used for logging and error reporting.
    pub site: String,
    /// Coordinates sent to the provider.
    pub location: LatLon,
    /// First UTC date to fetch.
    pub start_date: NaiveDate,
    /// Last UTC date to fetch, inclusive.
    pub end_date: NaiveDate,
}

impl SeriesRequest {
    /// Request covering every UTC date `window` touches.
    pub fn for_site(site: &Site, window: &RollingWindow) -> Self {
        Self {
            site: site.name.clone(),
            location: site.location(),
            start_date: window.start_date(),
            end_date: window.end_date(),
        }
    }
}

/// One hourly irradiance value (W/m²) and the UTC start of the hour it belongs to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HourlySample {
    /// Start of the hour.
    pub time: DateTime<Utc>,
    /// Irradiance in W/m².
    pub value: f64,
}

impl HourlySample {
    /// Whether the hour this sample covers has fully elapsed at `now`.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::{TimeZone, Utc};
    /// use solarnet::HourlySample;
    ///
    /// let sample = HourlySample {
    ///     time: Utc.with_ymd_and_hms(2024, 6, 21, 13, 0, 0).unwrap(),
    ///     value: 610.0,
    /// };
    /// assert!(sample.is_complete_at(Utc.with_ymd_and_hms(2024, 6, 21, 14, 0, 0).unwrap()));
    /// assert!(!sample.is_complete_at(Utc.with_ymd_and_hms(2024, 6, 21, 13, 59, 0).unwrap()));
    /// ```
    pub fn is_complete_at(&self, now: DateTime<Utc>) -> bool {
        self.time + Duration::hours(1) <= now
    }
}

/// Source of hourly irradiance series.
///
/// Implementations return every hourly sample they have for the requested dates,
/// including hours that have not happened yet. Dropping those, trimming to the last
/// 24 and failure handling are left to [`crate::fetch_all`].
pub trait IrradianceProvider {
    fn hourly_irradiance(
        &self,
        request: &SeriesRequest,
    ) -> impl Future<Output = Result<Vec<HourlySample>, FetchError>> + Send;
}
