use crate::encoding::color::color_bucket;
use crate::encoding::magnitude::visual_magnitude;
use crate::registry::site_registry::SiteRegistry;
use crate::types::color_bucket::ColorBucket;
use crate::types::series::IrradianceSeries;
use crate::types::site::LatLon;
use serde::Serialize;

/// How the map should draw one site at the current hour.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkerStyle {
    /// Name of the site the marker belongs to.
    pub site: String,
    /// Where to place the marker.
    pub location: LatLon,
    /// Irradiance at the hour, or `None` if the site has no series.
    pub value: Option<f64>,
    /// Color bucket of the value.
    pub bucket: ColorBucket,
    /// Hex fill color of [`MarkerStyle::bucket`] (e.g. "#d7191c").
    pub color: &'static str,
    /// Continuous marker size, see [`crate::visual_magnitude`].
    pub magnitude: f64,
}

/// Styles every registry site for `hour`, in registry order.
///
/// Sites without a series are drawn as if their value were 0.
pub fn marker_styles(
    registry: &SiteRegistry,
    series: &IrradianceSeries,
    hour: u8,
) -> Vec<MarkerStyle> {
    registry
        .sites()
        .iter()
        .map(|site| {
            let value = series.value_at(&site.name, usize::from(hour));
            let shown = value.unwrap_or(0.0);
            let bucket = color_bucket(shown);
            MarkerStyle {
                site: site.name.clone(),
                location: site.location(),
                value,
                bucket,
                color: bucket.color(),
                magnitude: visual_magnitude(shown),
            }
        })
        .collect()
}
