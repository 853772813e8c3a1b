//! Defines the data structures representing measurement sites and their coordinates.
//! Also includes the implementations needed for spatial indexing with the `rstar` crate.

use haversine::{distance, Location as HaversineLocation, Units};
use rstar::{PointDistance, RTreeObject, AABB};
use serde::{Deserialize, Serialize};

/// Represents a geographical coordinate using latitude and longitude.
///
/// Latitude is the first element (index 0), and longitude is the second (index 1).
///
/// # Examples
///
/// ```
/// use solarnet::LatLon;
///
/// let utrecht = LatLon(52.0907, 5.1214);
/// assert_eq!(utrecht.0, 52.0907); // Latitude
/// assert_eq!(utrecht.1, 5.1214); // Longitude
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLon(pub f64, pub f64);

impl LatLon {
    /// Latitude in degrees.
    pub fn lat(&self) -> f64 {
        self.0
    }

    /// Longitude in degrees.
    pub fn lon(&self) -> f64 {
        self.1
    }

    /// The `(lon, lat)` pair used by map geometries (GeoJSON axis order).
    pub fn lon_lat(&self) -> (f64, f64) {
        (self.1, self.0)
    }

    /// Great-circle distance to `other` in kilometers.
    pub fn distance_km(&self, other: LatLon) -> f64 {
        distance(
            HaversineLocation {
                latitude: self.0,
                longitude: self.1,
            },
            HaversineLocation {
                latitude: other.0,
                longitude: other.1,
            },
            Units::Kilometers,
        )
    }

    pub(crate) fn is_valid(&self) -> bool {
        self.0.is_finite()
            && self.1.is_finite()
            && (-90.0..=90.0).contains(&self.0)
            && (-180.0..=180.0).contains(&self.1)
    }
}

/// A named point of measurement on the map.
///
/// Sites are defined once at startup (see [`crate::SiteRegistry`]) and never change.
/// The `neighbors` list is an adjacency list by site name; names that do not resolve
/// to another site in the registry are ignored when the graph is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Site {
    /// Unique site name, used as the key everywhere else in the crate.
    pub name: String,
    /// Latitude in decimal degrees (positive for North).
    pub lat: f64,
    /// Longitude in decimal degrees (positive for East).
    pub lon: f64,
    /// Names of the sites this one is connected to, in declaration order.
    #[serde(default)]
    pub neighbors: Vec<String>,
}

impl Site {
    /// Creates a site at `location` connected to the sites named in `neighbors`.
    pub fn new(name: impl Into<String>, location: LatLon, neighbors: &[&str]) -> Self {
        Self {
            name: name.into(),
            lat: location.0,
            lon: location.1,
            neighbors: neighbors.iter().map(|n| n.to_string()).collect(),
        }
    }

    /// The site's coordinates as a [`LatLon`].
    pub fn location(&self) -> LatLon {
        LatLon(self.lat, self.lon)
    }
}

// --- R-Tree Implementations ---

/// Lets the registry index sites in an R-tree for nearest-site lookups.
impl RTreeObject for Site {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_point([self.lat, self.lon])
    }
}

impl PointDistance for Site {
    /// Squared planar distance in degrees. Only used to order candidates; the
    /// registry re-ranks them by great-circle distance.
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dx = self.lat - point[0];
        let dy = self.lon - point[1];
        dx * dx + dy * dy
    }
}
