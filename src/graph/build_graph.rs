//! Turns the registry's adjacency lists into one undirected edge per connected pair.

use crate::graph::edge_set::EdgeSet;
use crate::types::edge::{Edge, EdgeId};
use crate::types::site::Site;
use log::trace;
use std::collections::HashMap;

/// Builds the deduplicated edge set for `sites`.
///
/// Walks every site's `neighbors` in order. A neighbor name that matches no site is
/// skipped, as is a site naming itself. Each unordered pair yields exactly one edge,
/// no matter how many times or in which direction it is declared.
///
/// # Examples
///
/// ```
/// use solarnet::{build_graph, LatLon, Site};
///
/// let sites = vec![
///     Site::new("A", LatLon(0.0, 0.0), &["B"]),
///     Site::new("B", LatLon(0.0, 1.0), &["A"]),
/// ];
/// let graph = build_graph(&sites);
/// assert_eq!(graph.len(), 1);
/// assert!(graph.contains("B", "A"));
/// ```
pub fn build_graph(sites: &[Site]) -> EdgeSet {
    let by_name: HashMap<&str, &Site> = sites.iter().map(|s| (s.name.as_str(), s)).collect();
    let mut edges = EdgeSet::new();

    for site in sites {
        for neighbor_name in &site.neighbors {
            let Some(neighbor) = by_name.get(neighbor_name.as_str()) else {
                trace!(
                    "Skipping unknown neighbor '{}' of site '{}'",
                    neighbor_name,
                    site.name
                );
                continue;
            };
            if neighbor.name == site.name {
                continue;
            }

            let id = EdgeId::new(&site.name, &neighbor.name);
            if edges.contains_id(&id) {
                continue;
            }

            edges.insert(Edge {
                id,
                a: site.name.clone(),
                b: neighbor.name.clone(),
                geometry: [site.location().lon_lat(), neighbor.location().lon_lat()],
                length_km: site.location().distance_km(neighbor.location()),
            });
        }
    }

    edges
}
