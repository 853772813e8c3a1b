use crate::encoding::sanitize;
use crate::types::chart_record::{ChartRecord, SeriesSummary};
use crate::types::series::{IrradianceSeries, HOURS_PER_WINDOW};
use ordered_float::OrderedFloat;

/// Reshapes one site's series into the 24 records the chart widget draws.
///
/// Returns an empty `Vec` when `site` is `None` or has no entry in `series`.
/// Otherwise returns exactly 24 records for hours 0 to 23, with `is_current_hour` set
/// on the record whose hour equals `current_hour` (none if it is past 23).
/// Records are rebuilt on every call.
///
/// # Examples
///
/// ```
/// use chrono::Utc;
/// use solarnet::{build_series, IrradianceSeries, RollingWindow};
/// use std::collections::HashMap;
///
/// let window = RollingWindow::ending_at(Utc::now());
/// let series = IrradianceSeries::from_parts(window, HashMap::new(), vec!["X".to_string()]);
///
/// let records = build_series(&series, Some("X"), 5);
/// assert_eq!(records.len(), 24);
/// assert_eq!(records[5].hour, 5);
/// assert_eq!(records[5].irradiance, 0.0);
/// assert!(records[5].is_current_hour);
///
/// assert!(build_series(&series, None, 5).is_empty());
/// ```
pub fn build_series(
    series: &IrradianceSeries,
    site: Option<&str>,
    current_hour: u8,
) -> Vec<ChartRecord> {
    let Some(values) = site.and_then(|name| series.get(name)) else {
        return Vec::new();
    };

    (0..HOURS_PER_WINDOW)
        .map(|hour| ChartRecord {
            hour: hour as u8,
            irradiance: sanitize(values.get(hour).copied().unwrap_or(0.0)),
            is_current_hour: hour == usize::from(current_hour),
        })
        .collect()
}

/// Peak hour and total insolation of `site`'s series, or `None` if it has no series.
pub fn summarize(series: &IrradianceSeries, site: &str) -> Option<SeriesSummary> {
    let values = series.get(site)?;
    let sanitized: Vec<f64> = values.iter().copied().map(sanitize).collect();

    // max_by_key keeps the last maximum; walk in reverse to report the earliest.
    let (peak_hour, peak) = sanitized
        .iter()
        .copied()
        .enumerate()
        .rev()
        .max_by_key(|&(_, v)| OrderedFloat(v))?;

    Some(SeriesSummary {
        peak_hour: peak_hour as u8,
        peak,
        insolation_wh_m2: sanitized.iter().sum(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::series::RollingWindow;
    use chrono::{TimeZone, Utc};
    use std::collections::HashMap;

    fn snapshot() -> IrradianceSeries {
        let mut bell = [0.0; HOURS_PER_WINDOW];
        for (hour, value) in bell.iter_mut().enumerate() {
            let from_noon = (hour as f64 - 12.0).abs();
            *value = (800.0 - from_noon * 120.0).max(0.0);
        }
        let mut loaded = HashMap::new();
        loaded.insert("Bell".to_string(), bell);

        let mut noisy = [10.0; HOURS_PER_WINDOW];
        noisy[0] = -4.0;
        noisy[1] = f64::NAN;
        loaded.insert("Noisy".to_string(), noisy);

        let window = RollingWindow::ending_at(Utc.with_ymd_and_hms(2024, 6, 21, 23, 0, 0).unwrap());
        IrradianceSeries::from_parts(window, loaded, vec!["X".to_string()])
    }

    #[test]
    fn test_unknown_or_unset_site_is_empty() {
        let series = snapshot();
        assert!(build_series(&series, None, 3).is_empty());
        assert!(build_series(&series, Some("Nowhere"), 3).is_empty());
    }

    #[test]
    fn test_records_are_ordered_with_one_current_hour() {
        let series = snapshot();
        for current in 0..24u8 {
            let records = build_series(&series, Some("Bell"), current);
            assert_eq!(records.len(), 24);
            let hours: Vec<u8> = records.iter().map(|r| r.hour).collect();
            assert_eq!(hours, (0..24).collect::<Vec<u8>>());
            let flagged: Vec<u8> = records
                .iter()
                .filter(|r| r.is_current_hour)
                .map(|r| r.hour)
                .collect();
            assert_eq!(flagged, vec![current]);
        }
    }

    #[test]
    fn test_hour_past_end_flags_nothing() {
        let records = build_series(&snapshot(), Some("Bell"), 24);
        assert_eq!(records.len(), 24);
        assert!(records.iter().all(|r| !r.is_current_hour));
    }

    #[test]
    fn test_values_come_from_series() {
        let records = build_series(&snapshot(), Some("Bell"), 12);
        assert_eq!(records[12].irradiance, 800.0);
        assert_eq!(records[11].irradiance, 680.0);
        assert_eq!(records[0].irradiance, 0.0);
    }

    #[test]
    fn test_fallback_site_charts_as_zeros() {
        let records = build_series(&snapshot(), Some("X"), 5);
        assert_eq!(
            records[5],
            ChartRecord {
                hour: 5,
                irradiance: 0.0,
                is_current_hour: true
            }
        );
        assert!(records.iter().all(|r| r.irradiance == 0.0));
    }

    #[test]
    fn test_invalid_samples_chart_as_zero() {
        let records = build_series(&snapshot(), Some("Noisy"), 0);
        assert_eq!(records[0].irradiance, 0.0);
        assert_eq!(records[1].irradiance, 0.0);
        assert_eq!(records[2].irradiance, 10.0);
    }

    #[test]
    fn test_serializes_for_chart_widget() {
        let records = build_series(&snapshot(), Some("Bell"), 12);
        let json = serde_json::to_value(&records[12]).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"hour": 12, "irradiance": 800.0, "isCurrentHour": true})
        );
    }

    #[test]
    fn test_summarize() {
        let series = snapshot();
        let summary = summarize(&series, "Bell").unwrap();
        assert_eq!(summary.peak_hour, 12);
        assert_eq!(summary.peak, 800.0);
        // 800 + 2 * (680 + 560 + 440 + 320 + 200 + 80)
        assert!((summary.insolation_wh_m2 - 5360.0).abs() < 1e-9);

        let flat = summarize(&series, "X").unwrap();
        assert_eq!(flat.peak_hour, 0);
        assert_eq!(flat.insolation_wh_m2, 0.0);

        assert!(summarize(&series, "Nowhere").is_none());
    }
}
