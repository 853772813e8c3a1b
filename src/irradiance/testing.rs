//! In-process provider used by the aggregator and client tests.

use crate::irradiance::error::FetchError;
use crate::irradiance::provider::{HourlySample, IrradianceProvider, SeriesRequest};
use chrono::{DateTime, Duration as TimeDelta, NaiveDate, TimeZone, Utc};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

#[derive(Debug, Clone)]
pub(crate) enum Script {
    Values(Vec<f64>),
    /// Replies with the values after a fixed delay.
    Slow(Duration, Vec<f64>),
    Fail,
    Hang,
}

/// Replies per site name according to its script; unknown sites fail.
///
/// Values are stamped hourly from midnight of the request's start date, the way a
/// real provider answers for whole days.
#[derive(Debug, Default)]
pub(crate) struct ScriptedProvider {
    scripts: HashMap<String, Script>,
    requests: Mutex<Vec<SeriesRequest>>,
    in_flight: AtomicUsize,
    peak_in_flight: AtomicUsize,
}

impl ScriptedProvider {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with(mut self, site: &str, script: Script) -> Self {
        self.scripts.insert(site.to_string(), script);
        self
    }

    pub(crate) fn requests(&self) -> Vec<SeriesRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Most requests that were running at the same time.
    pub(crate) fn peak_in_flight(&self) -> usize {
        self.peak_in_flight.load(Ordering::SeqCst)
    }
}

/// Counts a request as running until dropped, including when a timeout cancels it.
struct InFlight<'a>(&'a AtomicUsize);

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

impl IrradianceProvider for ScriptedProvider {
    async fn hourly_irradiance(
        &self,
        request: &SeriesRequest,
    ) -> Result<Vec<HourlySample>, FetchError> {
        self.requests.lock().unwrap().push(request.clone());
        let running = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak_in_flight.fetch_max(running, Ordering::SeqCst);
        let _guard = InFlight(&self.in_flight);

        match self.scripts.get(&request.site) {
            Some(Script::Values(values)) => Ok(stamped(midnight(request.start_date), values)),
            Some(Script::Slow(delay, values)) => {
                tokio::time::sleep(*delay).await;
                Ok(stamped(midnight(request.start_date), values))
            }
            Some(Script::Hang) => {
                tokio::time::sleep(Duration::from_secs(3600)).await;
                Ok(Vec::new())
            }
            Some(Script::Fail) | None => Err(FetchError::MissingVariable {
                site: request.site.clone(),
                variable: "shortwave_radiation".to_string(),
            }),
        }
    }
}

pub(crate) fn midnight(date: NaiveDate) -> DateTime<Utc> {
    Utc.from_utc_datetime(&date.and_hms_opt(0, 0, 0).unwrap())
}

/// One sample per value, hourly from `start`.
pub(crate) fn stamped(start: DateTime<Utc>, values: &[f64]) -> Vec<HourlySample> {
    values
        .iter()
        .enumerate()
        .map(|(h, &value)| HourlySample {
            time: start + TimeDelta::hours(h as i64),
            value,
        })
        .collect()
}

/// `len` values counting up from 1.0, oldest first.
pub(crate) fn ramp(len: usize) -> Vec<f64> {
    (1..=len).map(|v| v as f64).collect()
}
