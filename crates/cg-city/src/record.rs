//! Domain payloads carried by the city graph.

use cg_core::GeoPoint;
use cg_graph::Graph;

/// Node payload: a named point of interest.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PoiData {
    pub name:     String,
    pub position: GeoPoint,
}

/// Edge payload: the road record's name and its own coordinate pair.
///
/// The coordinate is validated on load and shown by the graph dump; no
/// distance query reads it.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoadData {
    pub name:     String,
    pub position: GeoPoint,
}

/// POIs as nodes, roads as directed edges weighted by length in metres.
pub type CityGraph = Graph<PoiData, RoadData>;
