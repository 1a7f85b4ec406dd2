//! Location and distance queries over a loaded city graph.
//!
//! Query-time negatives are results, not errors: a name that matches no POI
//! is [`QueryOutcome::NotFound`], a road distance with no connecting path is
//! [`QueryOutcome::Unreachable`].  Formatting is left to the caller.

use std::collections::hash_map::Entry;
use std::io::Read;
use std::path::Path;

use rustc_hash::FxHashMap;
use tracing::debug;

use cg_core::{GeoPoint, LoadConfig, NodeId, NodePos};
use cg_graph::shortest_distance;

use crate::error::IngestResult;
use crate::loader::{load_graph, load_graph_path};
use crate::record::{CityGraph, PoiData};

// ── Results ───────────────────────────────────────────────────────────────────

/// Outcome of a pairwise distance query.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "outcome", content = "meters", rename_all = "snake_case")
)]
pub enum QueryOutcome {
    /// Distance in metres.
    Value(f64),
    /// At least one name matched no POI.
    NotFound,
    /// Both POIs exist but no directed road path joins them.
    Unreachable,
}

impl QueryOutcome {
    pub fn value(self) -> Option<f64> {
        match self {
            QueryOutcome::Value(d) => Some(d),
            _ => None,
        }
    }
}

/// The two POIs furthest apart by great-circle distance.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FarthestPair {
    pub first_id:   NodeId,
    pub first:      GeoPoint,
    pub second_id:  NodeId,
    pub second:     GeoPoint,
    pub distance_m: f64,
}

// ── CityMap ───────────────────────────────────────────────────────────────────

/// A loaded, read-only city graph plus a name index.
///
/// Names are not required to be unique; lookups resolve to the first POI
/// with that exact name in node order.
pub struct CityMap {
    graph:   CityGraph,
    by_name: FxHashMap<String, NodePos>,
}

impl CityMap {
    pub fn new(graph: CityGraph) -> Self {
        let mut by_name = FxHashMap::default();
        for (i, node) in graph.nodes().enumerate() {
            if let Entry::Vacant(slot) = by_name.entry(node.data().name.clone()) {
                slot.insert(NodePos(i as u32));
            }
        }
        Self { graph, by_name }
    }

    /// Load the dataset at `path` and index it.
    pub fn open(path: &Path, config: &LoadConfig) -> IngestResult<Self> {
        load_graph_path(path, config).map(Self::new)
    }

    /// Load a dataset from any reader and index it.
    pub fn from_reader<R: Read>(reader: R, config: &LoadConfig) -> IngestResult<Self> {
        load_graph(reader, config).map(Self::new)
    }

    pub fn graph(&self) -> &CityGraph {
        &self.graph
    }

    /// Position and payload of the first POI named exactly `name`.
    pub fn find(&self, name: &str) -> Option<(NodePos, &PoiData)> {
        let pos = *self.by_name.get(name)?;
        self.graph.node_at(pos).map(|n| (pos, n.data()))
    }

    /// Coordinates of the POI named `name`.
    pub fn location(&self, name: &str) -> Option<GeoPoint> {
        self.find(name).map(|(_, poi)| poi.position)
    }

    /// Farthest pair of POIs by great-circle distance.
    ///
    /// Pairs are enumerated outer index ascending, inner index ascending from
    /// `outer + 1`; only a strictly larger distance replaces the current best,
    /// so ties go to the first pair met.  `None` with fewer than two POIs.
    pub fn diameter(&self) -> Option<FarthestPair> {
        let nodes: Vec<_> = self.graph.nodes().collect();
        let mut best: Option<FarthestPair> = None;

        for (i, a) in nodes.iter().enumerate() {
            let pa = a.data().position;
            for b in &nodes[i + 1..] {
                let pb = b.data().position;
                let d = pa.distance_m(pb);
                if best.as_ref().is_none_or(|cur| d > cur.distance_m) {
                    best = Some(FarthestPair {
                        first_id:   a.id(),
                        first:      pa,
                        second_id:  b.id(),
                        second:     pb,
                        distance_m: d,
                    });
                }
            }
        }
        best
    }

    /// Great-circle distance between two named POIs.
    pub fn distance(&self, a: &str, b: &str) -> QueryOutcome {
        match (self.location(a), self.location(b)) {
            (Some(pa), Some(pb)) => QueryOutcome::Value(pa.distance_m(pb)),
            _ => QueryOutcome::NotFound,
        }
    }

    /// Shortest road distance from POI `a` to POI `b` along directed roads.
    pub fn road_distance(&self, a: &str, b: &str) -> QueryOutcome {
        let (Some((from, _)), Some((to, _))) = (self.find(a), self.find(b)) else {
            return QueryOutcome::NotFound;
        };
        let outcome = match shortest_distance(&self.graph, from, to) {
            Some(d) => QueryOutcome::Value(d),
            None => QueryOutcome::Unreachable,
        };
        debug!(from = a, to = b, ?outcome, "road distance");
        outcome
    }
}
