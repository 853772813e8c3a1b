//! This module provides the main entry point of the crate. `SolarMap` ties the site
//! registry, the network graph and the irradiance provider together, and turns a
//! fetched snapshot plus the current selection into what the map and chart draw.

use crate::chart::series_builder::{build_series, summarize};
use crate::config::FetchConfig;
use crate::encoding::markers::{marker_styles, MarkerStyle};
use crate::error::SolarMapError;
use crate::graph::build_graph::build_graph;
use crate::graph::edge_set::EdgeSet;
use crate::irradiance::aggregator::fetch_all;
use crate::irradiance::open_meteo::OpenMeteoProvider;
use crate::irradiance::provider::IrradianceProvider;
use crate::registry::site_registry::SiteRegistry;
use crate::types::chart_record::{ChartRecord, SeriesSummary};
use crate::types::selection::SelectionState;
use crate::types::series::IrradianceSeries;
use crate::types::site::{LatLon, Site};
use bon::bon;
use chrono::{DateTime, Utc};
use log::info;

/// The main client struct of the dashboard core.
///
/// Holds the site registry and the edge set built from it once at construction,
/// along with the provider used to load irradiance. Loading returns an immutable
/// [`IrradianceSeries`] that the caller keeps and passes back into [`SolarMap::markers`],
/// [`SolarMap::chart`] and [`SolarMap::summary`] on every render; none of those touch
/// the network.
///
/// # Examples
///
/// ```no_run
/// # use solarnet::{SelectionState, SolarMap, SolarMapError};
/// # #[tokio::main]
/// # async fn main() -> Result<(), SolarMapError> {
/// let map = SolarMap::new()?;
/// let series = map.load().call().await;
///
/// let mut selection = SelectionState::new();
/// selection.set_current_hour(12)?;
/// selection.select("Utrecht");
///
/// let markers = map.markers(&series, &selection);
/// let chart = map.chart(&series, &selection);
/// assert_eq!(markers.len(), map.registry().len());
/// assert_eq!(chart.len(), 24);
/// # Ok(())
/// # }
/// ```
pub struct SolarMap<P = OpenMeteoProvider> {
    registry: SiteRegistry,
    graph: EdgeSet,
    provider: P,
    config: FetchConfig,
}

impl SolarMap<OpenMeteoProvider> {
    /// Creates a client for the built-in site network, backed by Open-Meteo.
    ///
    /// # Errors
    ///
    /// Returns [`SolarMapError::Fetch`] if the HTTP client cannot be built.
    pub fn new() -> Result<Self, SolarMapError> {
        Self::with_registry(SiteRegistry::default())
    }

    /// Creates a client for `registry`, backed by Open-Meteo with default settings.
    pub fn with_registry(registry: SiteRegistry) -> Result<Self, SolarMapError> {
        Self::with_config(registry, FetchConfig::default())
    }

    /// Creates a client for `registry`, backed by Open-Meteo configured by `config`.
    pub fn with_config(registry: SiteRegistry, config: FetchConfig) -> Result<Self, SolarMapError> {
        let provider = OpenMeteoProvider::new(&config)?;
        Ok(Self::with_provider(registry, provider, config))
    }
}

#[bon]
impl<P: IrradianceProvider> SolarMap<P> {
    /// Creates a client that loads irradiance from a custom provider.
    pub fn with_provider(registry: SiteRegistry, provider: P, config: FetchConfig) -> Self {
        let graph = build_graph(registry.sites());
        info!(
            "Site network ready: {} sites, {} edges",
            registry.len(),
            graph.len()
        );
        Self {
            registry,
            graph,
            provider,
            config,
        }
    }

    /// The sites this client draws and fetches for.
    pub fn registry(&self) -> &SiteRegistry {
        &self.registry
    }

    /// The deduplicated edge set, built once from the registry.
    pub fn graph(&self) -> &EdgeSet {
        &self.graph
    }

    /// The fetch settings used by [`SolarMap::load`].
    pub fn config(&self) -> &FetchConfig {
        &self.config
    }

    /// Loads the rolling 24-hour irradiance snapshot for every site.
    ///
    /// This method uses a builder pattern.
    ///
    /// # Arguments
    ///
    /// * `.now(DateTime<Utc>)`: Optional. End of the rolling window. Defaults to `Utc::now()`.
    ///
    /// Never fails: sites whose fetch fails are filled with zeros, see [`crate::fetch_all`].
    #[builder]
    pub async fn load(&self, now: Option<DateTime<Utc>>) -> IrradianceSeries {
        let now = now.unwrap_or_else(Utc::now);
        fetch_all(&self.provider, self.registry.sites(), now, &self.config).await
    }

    /// Marker style of every site at the selection's current hour.
    pub fn markers(&self, series: &IrradianceSeries, selection: &SelectionState) -> Vec<MarkerStyle> {
        marker_styles(&self.registry, series, selection.current_hour())
    }

    /// Chart records for the selected site, or an empty `Vec` if none is selected.
    pub fn chart(&self, series: &IrradianceSeries, selection: &SelectionState) -> Vec<ChartRecord> {
        build_series(series, selection.selected_site(), selection.current_hour())
    }

    /// Peak and insolation of the hovered site, else the selected one.
    pub fn summary(
        &self,
        series: &IrradianceSeries,
        selection: &SelectionState,
    ) -> Option<SeriesSummary> {
        selection
            .focused_site()
            .and_then(|site| summarize(series, site))
    }

    /// The site nearest to a map position, within `max_distance_km`.
    pub fn site_at(&self, location: LatLon, max_distance_km: f64) -> Option<&Site> {
        self.registry
            .nearest(location, max_distance_km)
            .map(|(site, _)| site)
    }
}
