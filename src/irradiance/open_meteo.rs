//! [`IrradianceProvider`] backed by the Open-Meteo hourly forecast API.

use crate::config::FetchConfig;
use crate::irradiance::error::FetchError;
use crate::irradiance::provider::{HourlySample, IrradianceProvider, SeriesRequest};
use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use log::{debug, trace, warn};
use reqwest::Client;
use serde::Deserialize;
use std::collections::HashMap;

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    hourly: HourlyBlock,
}

#[derive(Debug, Deserialize)]
struct HourlyBlock {
    // Start of each hour, `YYYY-MM-DDTHH:MM` in the requested timezone (UTC).
    #[serde(default)]
    time: Vec<String>,
    // Requested variables, keyed by name. Missing samples arrive as `null`.
    #[serde(flatten)]
    variables: HashMap<String, Vec<Option<f64>>>,
}

pub struct OpenMeteoProvider {
    client: Client,
    endpoint: String,
    variable: String,
}

impl OpenMeteoProvider {
    /// Creates a provider with its own HTTP client configured from `config`.
    pub fn new(config: &FetchConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.request_timeout())
            .build()
            .map_err(FetchError::ClientBuild)?;
        Ok(Self::with_client(client, config))
    }

    /// Creates a provider that reuses an existing HTTP client.
    pub fn with_client(client: Client, config: &FetchConfig) -> Self {
        Self {
            client,
            endpoint: config.endpoint.clone(),
            variable: config.variable.clone(),
        }
    }

    fn url_for(&self, request: &SeriesRequest) -> String {
        format!(
            "{}?latitude={:.4}&longitude={:.4}&start_date={}&end_date={}&hourly={}&timezone=UTC",
            self.endpoint,
            request.location.lat(),
            request.location.lon(),
            request.start_date.format("%Y-%m-%d"),
            request.end_date.format("%Y-%m-%d"),
            self.variable,
        )
    }
}

impl IrradianceProvider for OpenMeteoProvider {
    async fn hourly_irradiance(
        &self,
        request: &SeriesRequest,
    ) -> Result<Vec<HourlySample>, FetchError> {
        let url = self.url_for(request);
        debug!("Requesting irradiance for site '{}' from {}", request.site, url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| FetchError::NetworkRequest(url.clone(), e))?;

        let response = match response.error_for_status() {
            Ok(resp) => resp,
            Err(e) => {
                warn!("HTTP error for {}: {:?}", url, e);
                return Err(if let Some(status) = e.status() {
                    FetchError::HttpStatus {
                        url,
                        status,
                        source: e,
                    }
                } else {
                    FetchError::NetworkRequest(url, e)
                });
            }
        };

        let payload: ForecastResponse = response
            .json()
            .await
            .map_err(|e| FetchError::Decode(url.clone(), e))?;

        extract_samples(&request.site, &self.variable, payload.hourly)
    }
}

/// Pairs each value of `variable` with the hour it belongs to. Missing samples read
/// as zero; entries whose time cannot be parsed are skipped.
fn extract_samples(
    site: &str,
    variable: &str,
    mut hourly: HourlyBlock,
) -> Result<Vec<HourlySample>, FetchError> {
    let values = hourly
        .variables
        .remove(variable)
        .ok_or_else(|| FetchError::MissingVariable {
            site: site.to_string(),
            variable: variable.to_string(),
        })?;

    if hourly.time.len() != values.len() {
        return Err(FetchError::LengthMismatch {
            site: site.to_string(),
            times: hourly.time.len(),
            values: values.len(),
        });
    }

    Ok(hourly
        .time
        .iter()
        .zip(values)
        .filter_map(|(raw, value)| {
            let Some(time) = parse_hour(raw) else {
                trace!("Skipping sample with unreadable time '{}' for site '{}'", raw, site);
                return None;
            };
            Some(HourlySample {
                time,
                value: value.unwrap_or(0.0),
            })
        })
        .collect())
}

fn parse_hour(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw.trim()) {
        return Some(parsed.with_timezone(&Utc));
    }
    let naive = NaiveDateTime::parse_from_str(raw.trim(), "%Y-%m-%dT%H:%M").ok()?;
    Some(Utc.from_utc_datetime(&naive))
}
