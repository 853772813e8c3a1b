mod chart;
mod config;
mod encoding;
mod error;
mod graph;
mod irradiance;
mod registry;
mod solar_map;
mod types;

pub use error::SolarMapError;
pub use solar_map::*;

pub use config::{FetchConfig, DEFAULT_ENDPOINT, DEFAULT_VARIABLE};

pub use registry::error::RegistryError;
pub use registry::site_registry::SiteRegistry;

pub use graph::build_graph::build_graph;
pub use graph::edge_set::EdgeSet;

pub use irradiance::aggregator::fetch_all;
pub use irradiance::error::FetchError;
pub use irradiance::open_meteo::OpenMeteoProvider;
pub use irradiance::provider::{HourlySample, IrradianceProvider, SeriesRequest};

pub use encoding::color::{color_bucket, legend, LegendEntry, BUCKET_THRESHOLDS};
pub use encoding::magnitude::{visual_magnitude, MAX_SIZE, MIN_SIZE, SATURATION_RATIO};
pub use encoding::markers::{marker_styles, MarkerStyle};
pub use encoding::REFERENCE_IRRADIANCE;

pub use chart::series_builder::{build_series, summarize};

pub use types::chart_record::{ChartRecord, SeriesSummary};
pub use types::color_bucket::ColorBucket;
pub use types::edge::{Edge, EdgeId};
pub use types::selection::SelectionState;
pub use types::series::{
    HourlyValues, IrradianceSeries, RollingWindow, SeriesStatus, HOURS_PER_WINDOW,
};
pub use types::site::{LatLon, Site};
