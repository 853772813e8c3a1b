use crate::types::edge::{Edge, EdgeId};
use serde_json::{json, Value};
use std::collections::HashMap;

/// Deduplicated undirected edges of the site network.
///
/// Holds at most one [`Edge`] per unordered pair of sites. Iteration follows
/// insertion order, but callers should treat the contents as a set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EdgeSet {
    edges: Vec<Edge>,
    index: HashMap<EdgeId, usize>,
}

impl EdgeSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `edge` unless an edge with the same identity is already present.
    /// Returns whether it was added.
    pub(crate) fn insert(&mut self, edge: Edge) -> bool {
        if self.index.contains_key(&edge.id) {
            return false;
        }
        self.index.insert(edge.id.clone(), self.edges.len());
        self.edges.push(edge);
        true
    }

    pub(crate) fn contains_id(&self, id: &EdgeId) -> bool {
        self.index.contains_key(id)
    }

    /// Whether `a` and `b` are connected, in either direction.
    pub fn contains(&self, a: &str, b: &str) -> bool {
        self.contains_id(&EdgeId::new(a, b))
    }

    /// The edge between `a` and `b`, in either direction.
    pub fn get(&self, a: &str, b: &str) -> Option<&Edge> {
        self.index
            .get(&EdgeId::new(a, b))
            .map(|&i| &self.edges[i])
    }

    pub fn iter(&self) -> impl Iterator<Item = &Edge> {
        self.edges.iter()
    }

    /// Number of distinct edges.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Renders the edges as a GeoJSON `FeatureCollection` of `LineString`s for the map layer.
    ///
    /// Each feature carries `id` (the sorted endpoint names as a two-element array),
    /// `label` (`low-high`), `a`, `b` and `lengthKm` properties.
    pub fn to_geojson(&self) -> Value {
        let features: Vec<Value> = self
            .edges
            .iter()
            .map(|edge| {
                let [(lon_a, lat_a), (lon_b, lat_b)] = edge.geometry;
                json!({
                    "type": "Feature",
                    "geometry": {
                        "type": "LineString",
                        "coordinates": [[lon_a, lat_a], [lon_b, lat_b]],
                    },
                    "properties": {
                        "id": [edge.id.low(), edge.id.high()],
                        "label": edge.id.to_string(),
                        "a": edge.a,
                        "b": edge.b,
                        "lengthKm": edge.length_km,
                    },
                })
            })
            .collect();

        json!({
            "type": "FeatureCollection",
            "features": features,
        })
    }
}

impl<'a> IntoIterator for &'a EdgeSet {
    type Item = &'a Edge;
    type IntoIter = std::slice::Iter<'a, Edge>;

    fn into_iter(self) -> Self::IntoIter {
        self.edges.iter()
    }
}
