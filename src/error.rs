use crate::irradiance::error::FetchError;
use crate::registry::error::RegistryError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SolarMapError {
    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("Hour {0} is outside the 0-23 range")]
    HourOutOfRange(u8),
}
