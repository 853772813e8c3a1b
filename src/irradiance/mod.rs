pub mod aggregator;
pub mod error;
pub mod open_meteo;
pub mod provider;

#[cfg(test)]
pub(crate) mod testing;
