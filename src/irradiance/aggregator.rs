use crate::config::FetchConfig;
use crate::irradiance::error::FetchError;
use crate::irradiance::provider::{HourlySample, IrradianceProvider, SeriesRequest};
use crate::types::series::{HourlyValues, IrradianceSeries, RollingWindow, HOURS_PER_WINDOW};
use crate::types::site::Site;
use chrono::{DateTime, Utc};
use futures_util::stream::{self, StreamExt};
use log::{debug, info, trace, warn};
use std::collections::HashMap;

/// Fetches the rolling 24-hour irradiance series for every site and returns it as one
/// immutable snapshot.
///
/// Requests run concurrently on the calling task, at most `config.max_concurrency`
/// at a time, each bounded by `config.request_timeout()`. The call returns only after
/// every site has settled. Only hours that have fully elapsed at `now` are kept, and
/// of those the newest 24. A site whose request fails, times out or has fewer than
/// 24 such hours gets 24 zeros instead; the failure is logged and never affects the
/// other sites or the result of this function.
pub async fn fetch_all<P: IrradianceProvider>(
    provider: &P,
    sites: &[Site],
    now: DateTime<Utc>,
    config: &FetchConfig,
) -> IrradianceSeries {
    let window = RollingWindow::ending_at(now);
    let timeout = config.request_timeout();
    info!(
        "Fetching irradiance for {} sites, {} to {}",
        sites.len(),
        window.start_date(),
        window.end_date()
    );

    let outcomes: Vec<(String, Result<HourlyValues, FetchError>)> = stream::iter(sites)
        .map(|site| async move {
            let request = SeriesRequest::for_site(site, &window);
            let outcome = match tokio::time::timeout(timeout, provider.hourly_irradiance(&request))
                .await
            {
                Ok(Ok(samples)) => last_day(&site.name, samples, now),
                Ok(Err(e)) => Err(e),
                Err(_elapsed) => Err(FetchError::Timeout {
                    site: site.name.clone(),
                    timeout,
                }),
            };
            (site.name.clone(), outcome)
        })
        .buffer_unordered(config.max_concurrency.max(1))
        .collect()
        .await;

    let mut loaded = HashMap::with_capacity(outcomes.len());
    let mut failed = Vec::new();
    for (site, outcome) in outcomes {
        match outcome {
            Ok(values) => {
                debug!("Loaded irradiance for site '{}'", site);
                loaded.insert(site, values);
            }
            Err(e) => {
                warn!("Using zero series for site '{}': {}", site, e);
                debug!("Fetch failure for site '{}': {:?}", site, e);
                failed.push(site);
            }
        }
    }

    info!(
        "Irradiance snapshot ready: {} loaded, {} fell back to zeros",
        loaded.len(),
        failed.len()
    );
    IrradianceSeries::from_parts(window, loaded, failed)
}

/// Keeps the newest 24 samples whose hour has ended at `now`, oldest first.
fn last_day(
    site: &str,
    mut samples: Vec<HourlySample>,
    now: DateTime<Utc>,
) -> Result<HourlyValues, FetchError> {
    samples.sort_by_key(|s| s.time);
    let completed: Vec<f64> = samples
        .iter()
        .filter(|s| s.is_complete_at(now))
        .map(|s| s.value)
        .collect();
    if completed.len() < samples.len() {
        trace!(
            "Dropped {} unfinished hours for site '{}'",
            samples.len() - completed.len(),
            site
        );
    }

    let Some(start) = completed.len().checked_sub(HOURS_PER_WINDOW) else {
        return Err(FetchError::ShortSeries {
            site: site.to_string(),
            expected: HOURS_PER_WINDOW,
            found: completed.len(),
        });
    };
    let mut day = [0.0; HOURS_PER_WINDOW];
    day.copy_from_slice(&completed[start..]);
    Ok(day)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::irradiance::testing::{midnight, ramp, stamped, Script, ScriptedProvider};
    use crate::types::series::SeriesStatus;
    use crate::types::site::LatLon;
    use chrono::{Duration as TimeDelta, NaiveDate, TimeZone};
    use std::time::{Duration, Instant};

    fn sites(names: &[&str]) -> Vec<Site> {
        names
            .iter()
            .enumerate()
            .map(|(i, name)| Site::new(*name, LatLon(50.0 + i as f64, 5.0), &[]))
            .collect()
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 21, 14, 20, 0).unwrap()
    }

    fn day_start() -> DateTime<Utc> {
        midnight(NaiveDate::from_ymd_opt(2024, 6, 20).unwrap())
    }

    /// `ramp(len)` stamped hourly from 2024-06-20T00:00.
    fn samples(len: usize) -> Vec<HourlySample> {
        stamped(day_start(), &ramp(len))
    }

    fn hours_in(hours: i64) -> DateTime<Utc> {
        day_start() + TimeDelta::hours(hours)
    }

    #[test]
    fn test_last_day_keeps_newest_values() {
        let day = last_day("A", samples(40), hours_in(40)).unwrap();
        assert_eq!(day[0], 17.0);
        assert_eq!(day[23], 40.0);

        let exact = last_day("A", samples(24), hours_in(24)).unwrap();
        assert_eq!(exact[0], 1.0);
    }

    #[test]
    fn test_last_day_drops_unfinished_hours() {
        // Hour 29 (value 30) has ended, hour 30 is still running.
        let now = hours_in(30) + TimeDelta::minutes(59);
        let day = last_day("A", samples(48), now).unwrap();
        assert_eq!(day[23], 30.0);
        assert_eq!(day[0], 7.0);
    }

    #[test]
    fn test_last_day_sorts_by_time() {
        let mut reversed = samples(24);
        reversed.reverse();
        let day = last_day("A", reversed, hours_in(24)).unwrap();
        assert_eq!(day[0], 1.0);
        assert_eq!(day[23], 24.0);
    }

    #[test]
    fn test_last_day_rejects_short_series() {
        let err = last_day("A", samples(23), hours_in(48)).unwrap_err();
        assert!(matches!(
            err,
            FetchError::ShortSeries {
                expected: 24,
                found: 23,
                ..
            }
        ));

        // Enough samples, but most of them lie in the future.
        let err = last_day("A", samples(48), hours_in(10)).unwrap_err();
        assert!(matches!(err, FetchError::ShortSeries { found: 10, .. }));
    }

    #[tokio::test]
    async fn test_all_sites_load() {
        let provider = ScriptedProvider::new()
            .with("A", Script::Values(ramp(48)))
            .with("B", Script::Values(ramp(24)));
        let series = fetch_all(&provider, &sites(&["A", "B"]), now(), &FetchConfig::default()).await;

        assert_eq!(series.len(), 2);
        assert_eq!(series.status("A"), SeriesStatus::Loaded);
        // 14:20 on the second day: hour 13:00 (value 38) is the newest finished one.
        assert_eq!(series.value_at("A", 0), Some(15.0));
        assert_eq!(series.value_at("A", 23), Some(38.0));
        assert_eq!(series.value_at("B", 23), Some(24.0));
        assert_eq!(series.fallback_sites().count(), 0);
    }

    #[tokio::test]
    async fn test_failing_site_falls_back_without_touching_siblings() {
        let provider = ScriptedProvider::new()
            .with("A", Script::Values(ramp(30)))
            .with("B", Script::Fail)
            .with("C", Script::Values(ramp(10)))
            .with("D", Script::Values(ramp(26)));
        let series = fetch_all(
            &provider,
            &sites(&["A", "B", "C", "D"]),
            now(),
            &FetchConfig::default(),
        )
        .await;

        assert_eq!(series.len(), 4);
        assert_eq!(series.get("B"), Some(&[0.0; HOURS_PER_WINDOW]));
        assert_eq!(series.status("B"), SeriesStatus::Fallback);
        // Too short counts as malformed.
        assert_eq!(series.status("C"), SeriesStatus::Fallback);
        assert_eq!(series.value_at("A", 0), Some(7.0));
        assert_eq!(series.value_at("D", 23), Some(26.0));
        assert_eq!(series.fallback_sites().collect::<Vec<_>>(), vec!["B", "C"]);
    }

    #[tokio::test]
    async fn test_hanging_site_times_out() {
        let provider = ScriptedProvider::new()
            .with("Fast", Script::Values(ramp(24)))
            .with("Slow", Script::Hang);
        let config = FetchConfig::builder()
            .request_timeout_secs(1)
            .max_concurrency(1)
            .build();

        let started = Instant::now();
        let series = fetch_all(&provider, &sites(&["Slow", "Fast"]), now(), &config).await;

        assert!(started.elapsed() < Duration::from_secs(30));
        assert_eq!(series.status("Slow"), SeriesStatus::Fallback);
        assert_eq!(series.status("Fast"), SeriesStatus::Loaded);
    }

    #[tokio::test]
    async fn test_requests_run_concurrently() {
        let delay = Duration::from_millis(300);
        let names = ["A", "B", "C", "D"];
        let provider = names.iter().fold(ScriptedProvider::new(), |p, name| {
            p.with(name, Script::Slow(delay, ramp(24)))
        });
        let config = FetchConfig::builder().max_concurrency(4).build();

        let started = Instant::now();
        let series = fetch_all(&provider, &sites(&names), now(), &config).await;

        assert_eq!(provider.peak_in_flight(), 4);
        assert!(started.elapsed() < delay * 3, "took {:?}", started.elapsed());
        assert!(series.sites().all(|s| series.status(s) == SeriesStatus::Loaded));
    }

    #[tokio::test]
    async fn test_concurrency_is_bounded() {
        let names = ["A", "B", "C", "D", "E"];
        let provider = names.iter().fold(ScriptedProvider::new(), |p, name| {
            p.with(name, Script::Slow(Duration::from_millis(50), ramp(24)))
        });
        let config = FetchConfig::builder().max_concurrency(2).build();

        let series = fetch_all(&provider, &sites(&names), now(), &config).await;

        assert_eq!(provider.peak_in_flight(), 2);
        assert_eq!(provider.requests().len(), 5);
        assert_eq!(series.len(), 5);
    }

    #[tokio::test]
    async fn test_requests_carry_window_dates_and_coordinates() {
        let provider = ScriptedProvider::new().with("A", Script::Values(ramp(24)));
        let series = fetch_all(&provider, &sites(&["A"]), now(), &FetchConfig::default()).await;

        let requests = provider.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].location, LatLon(50.0, 5.0));
        assert_eq!(requests[0].start_date, NaiveDate::from_ymd_opt(2024, 6, 20).unwrap());
        assert_eq!(requests[0].end_date, NaiveDate::from_ymd_opt(2024, 6, 21).unwrap());
        assert_eq!(series.window(), RollingWindow::ending_at(now()));
    }

    #[tokio::test]
    async fn test_every_site_fails() {
        let provider = ScriptedProvider::new();
        let series = fetch_all(&provider, &sites(&["A", "B"]), now(), &FetchConfig::default()).await;
        assert_eq!(series.len(), 2);
        assert!(series.sites().all(|s| series.status(s) == SeriesStatus::Fallback));
    }

    #[tokio::test]
    async fn test_no_sites() {
        let provider = ScriptedProvider::new();
        let series = fetch_all(&provider, &[], now(), &FetchConfig::default()).await;
        assert!(series.is_empty());
    }

    #[tokio::test]
    async fn test_zero_concurrency_still_runs() {
        let provider = ScriptedProvider::new().with("A", Script::Values(ramp(24)));
        let config = FetchConfig::builder().max_concurrency(0).build();
        let series = fetch_all(&provider, &sites(&["A"]), now(), &config).await;
        assert_eq!(series.status("A"), SeriesStatus::Loaded);
    }
}
