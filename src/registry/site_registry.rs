use crate::registry::default_sites::default_sites;
use crate::registry::error::RegistryError;
use crate::types::site::{LatLon, Site};
use log::info;
use ordered_float::OrderedFloat;
use rstar::RTree;
use std::collections::HashMap;
use std::path::Path;

/// The fixed set of sites shown on the map, in declaration order.
///
/// Built once at startup and read-only afterwards. Besides name lookups it keeps an
/// R-tree of the sites so the map layer can resolve a pointer position to the nearest
/// site.
#[derive(Debug, Clone)]
pub struct SiteRegistry {
    sites: Vec<Site>,
    by_name: HashMap<String, usize>,
    rtree: RTree<Site>,
}

impl SiteRegistry {
    /// Builds a registry from `sites`, keeping their order.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::EmptyName`], [`RegistryError::DuplicateSite`] or
    /// [`RegistryError::InvalidCoordinates`] for the first offending site. Neighbor
    /// names are not checked; unknown ones are skipped when the graph is built.
    pub fn from_sites(sites: Vec<Site>) -> Result<Self, RegistryError> {
        let mut by_name = HashMap::with_capacity(sites.len());
        for (index, site) in sites.iter().enumerate() {
            if site.name.trim().is_empty() {
                return Err(RegistryError::EmptyName(index));
            }
            if !site.location().is_valid() {
                return Err(RegistryError::InvalidCoordinates {
                    name: site.name.clone(),
                    lat: site.lat,
                    lon: site.lon,
                });
            }
            if by_name.insert(site.name.clone(), index).is_some() {
                return Err(RegistryError::DuplicateSite(site.name.clone()));
            }
        }

        let rtree = RTree::bulk_load(sites.clone());
        Ok(Self {
            sites,
            by_name,
            rtree,
        })
    }

    /// Parses a JSON array of `{ "name", "lat", "lon", "neighbors" }` objects.
    pub fn from_json_str(json: &str) -> Result<Self, RegistryError> {
        let sites: Vec<Site> = serde_json::from_str(json)?;
        Self::from_sites(sites)
    }

    /// Reads a registry from a JSON file, see [`SiteRegistry::from_json_str`].
    pub fn from_json_file(path: &Path) -> Result<Self, RegistryError> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| RegistryError::Read(path.to_path_buf(), e))?;
        let registry = Self::from_json_str(&json)?;
        info!(
            "Loaded {} sites from {}",
            registry.len(),
            path.display()
        );
        Ok(registry)
    }

    /// All sites, in the order they were declared.
    pub fn sites(&self) -> &[Site] {
        &self.sites
    }

    /// Looks up a site by its exact name.
    pub fn get(&self, name: &str) -> Option<&Site> {
        self.by_name.get(name).map(|&i| &self.sites[i])
    }

    /// Whether a site named `name` is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Number of registered sites.
    pub fn len(&self) -> usize {
        self.sites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }

    /// Finds the site closest to `location` within `max_distance_km`.
    ///
    /// Returns the site and its great-circle distance in kilometers.
    pub fn nearest(&self, location: LatLon, max_distance_km: f64) -> Option<(&Site, f64)> {
        // The R-tree orders by planar degrees, so re-rank a few candidates by
        // great-circle distance before picking.
        const CANDIDATES: usize = 8;

        self.rtree
            .nearest_neighbor_iter(&[location.0, location.1])
            .take(CANDIDATES)
            .map(|site| (site, location.distance_km(site.location())))
            .filter(|(_, km)| *km <= max_distance_km)
            .min_by_key(|(_, km)| OrderedFloat(*km))
            .and_then(|(site, km)| self.get(&site.name).map(|s| (s, km)))
    }
}

impl Default for SiteRegistry {
    /// The built-in site network.
    fn default() -> Self {
        let sites = default_sites();
        let by_name = sites
            .iter()
            .enumerate()
            .map(|(i, s)| (s.name.clone(), i))
            .collect();
        let rtree = RTree::bulk_load(sites.clone());
        Self {
            sites,
            by_name,
            rtree,
        }
    }
}
