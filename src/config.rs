//! Settings for the per-session irradiance fetch.

use bon::Builder;
use serde::Deserialize;
use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str = "https://api.open-meteo.com/v1/forecast";
pub const DEFAULT_VARIABLE: &str = "shortwave_radiation";
const DEFAULT_USER_AGENT: &str = concat!("solarnet/", env!("CARGO_PKG_VERSION"));

/// How the aggregator talks to the upstream provider.
///
/// Every field has a default, so both the builder and a (partial) JSON document work:
///
/// ```
/// use solarnet::FetchConfig;
///
/// let config = FetchConfig::builder().max_concurrency(2).build();
/// assert_eq!(config.max_concurrency, 2);
/// assert_eq!(config.request_timeout_secs, 15);
///
/// let from_json: FetchConfig = serde_json::from_str(r#"{"request_timeout_secs": 5}"#).unwrap();
/// assert_eq!(from_json.variable, "shortwave_radiation");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Builder)]
#[serde(default)]
pub struct FetchConfig {
    /// Hourly forecast endpoint queried once per site.
    #[builder(into, default = DEFAULT_ENDPOINT.to_string())]
    pub endpoint: String,
    /// Name of the hourly variable holding irradiance in W/m².
    #[builder(into, default = DEFAULT_VARIABLE.to_string())]
    pub variable: String,
    /// Upper bound on a single site's request.
    #[builder(default = 15)]
    pub request_timeout_secs: u64,
    /// How many site requests may be in flight at once.
    #[builder(default = 8)]
    pub max_concurrency: usize,
    /// `User-Agent` header sent with every request (e.g. "solarnet/0.1.0").
    #[builder(into, default = DEFAULT_USER_AGENT.to_string())]
    pub user_agent: String,
}

impl FetchConfig {
    /// [`FetchConfig::request_timeout_secs`] as a [`Duration`].
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}
