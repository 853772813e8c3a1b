use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Failed to build HTTP client")]
    ClientBuild(#[source] reqwest::Error),

    #[error("Network request failed for {0}")]
    NetworkRequest(String, #[source] reqwest::Error),

    #[error("HTTP request failed for {url} with status {status}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to decode irradiance payload from {0}")]
    Decode(String, #[source] reqwest::Error),

    #[error("Payload for site '{site}' has no '{variable}' series")]
    MissingVariable { site: String, variable: String },

    #[error("Payload for site '{site}' has {times} timestamps but {values} values")]
    LengthMismatch {
        site: String,
        times: usize,
        values: usize,
    },

    #[error("Got {found} hourly values for site '{site}', need at least {expected}")]
    ShortSeries {
        site: String,
        expected: usize,
        found: usize,
    },

    #[error("Request for site '{site}' timed out after {timeout:?}")]
    Timeout { site: String, timeout: Duration },
}
