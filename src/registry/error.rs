use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Site '{0}' is defined more than once")]
    DuplicateSite(String),

    #[error("Site at position {0} has an empty name")]
    EmptyName(usize),

    #[error("Site '{name}' has invalid coordinates ({lat}, {lon})")]
    InvalidCoordinates { name: String, lat: f64, lon: f64 },

    #[error("Failed to read site registry file '{0}'")]
    Read(PathBuf, #[source] std::io::Error),

    #[error("Failed to parse site registry JSON")]
    JsonParse(#[from] serde_json::Error),
}
