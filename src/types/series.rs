//! The immutable per-site irradiance snapshot produced once per session by the
//! aggregator, and the rolling window it covers.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::Serialize;
use std::collections::{BTreeSet, HashMap};

/// Number of hourly samples kept per site.
pub const HOURS_PER_WINDOW: usize = 24;

/// A day of hourly samples for one site, oldest first.
pub type HourlyValues = [f64; HOURS_PER_WINDOW];

/// The most recent 24-hour span ending at `end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RollingWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl RollingWindow {
    /// Creates the window `[now − 24h, now]`.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::{TimeZone, Utc};
    /// use solarnet::RollingWindow;
    ///
    /// let now = Utc.with_ymd_and_hms(2024, 6, 21, 10, 30, 0).unwrap();
    /// let window = RollingWindow::ending_at(now);
    /// assert_eq!(window.start_date().to_string(), "2024-06-20");
    /// assert_eq!(window.end_date().to_string(), "2024-06-21");
    /// ```
    pub fn ending_at(now: DateTime<Utc>) -> Self {
        Self {
            start: now - Duration::hours(HOURS_PER_WINDOW as i64),
            end: now,
        }
    }

    /// UTC calendar date of the window start, as sent to the provider.
    pub fn start_date(&self) -> NaiveDate {
        self.start.date_naive()
    }

    /// UTC calendar date of the window end, as sent to the provider.
    pub fn end_date(&self) -> NaiveDate {
        self.end.date_naive()
    }
}

/// How a site is represented in an [`IrradianceSeries`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SeriesStatus {
    /// Values came from the provider.
    Loaded,
    /// The fetch failed and the site holds 24 zeros.
    Fallback,
    /// The site has no entry at all.
    Missing,
}

/// Write-once snapshot of the last 24 hourly irradiance values (W/m²) per site.
///
/// Built by [`crate::fetch_all`] after every site has settled and never mutated
/// afterwards. Lookups are by site name; iteration order is unspecified.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IrradianceSeries {
    window: RollingWindow,
    values: HashMap<String, HourlyValues>,
    fallback: BTreeSet<String>,
}

impl IrradianceSeries {
    /// Assembles a snapshot from the sites that loaded and the sites that failed.
    ///
    /// Failed sites are stored as 24 zeros and reported as [`SeriesStatus::Fallback`].
    /// A name present in both is treated as failed.
    pub fn from_parts(
        window: RollingWindow,
        loaded: HashMap<String, HourlyValues>,
        failed: impl IntoIterator<Item = String>,
    ) -> Self {
        let mut values = loaded;
        let mut fallback = BTreeSet::new();
        for site in failed {
            values.insert(site.clone(), [0.0; HOURS_PER_WINDOW]);
            fallback.insert(site);
        }
        Self {
            window,
            values,
            fallback,
        }
    }

    pub fn window(&self) -> RollingWindow {
        self.window
    }

    /// The 24 values for `site`, or `None` if the site was never loaded.
    pub fn get(&self, site: &str) -> Option<&HourlyValues> {
        self.values.get(site)
    }

    /// The value for `site` at `hour`, or `None` if either is out of range.
    pub fn value_at(&self, site: &str, hour: usize) -> Option<f64> {
        self.values.get(site).and_then(|v| v.get(hour).copied())
    }

    pub fn contains(&self, site: &str) -> bool {
        self.values.contains_key(site)
    }

    pub fn status(&self, site: &str) -> SeriesStatus {
        if self.fallback.contains(site) {
            SeriesStatus::Fallback
        } else if self.values.contains_key(site) {
            SeriesStatus::Loaded
        } else {
            SeriesStatus::Missing
        }
    }

    /// Names of the sites that hold the zero fallback, sorted.
    pub fn fallback_sites(&self) -> impl Iterator<Item = &str> {
        self.fallback.iter().map(String::as_str)
    }

    pub fn sites(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
