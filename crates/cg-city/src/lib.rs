//! `cg-city`: ingestion, validation and queries for POI/road datasets.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                  |
//! |--------------|-----------------------------------------------------------|
//! | [`record`]   | `PoiData`, `RoadData`, `CityGraph`                        |
//! | [`parser`]   | Line reader and per-record field parsing                  |
//! | [`loader`]   | `load_graph`, `load_graph_path`, `validate`, `first_invalid_line` |
//! | [`query`]    | `CityMap`, `QueryOutcome`, `FarthestPair`                 |
//! | [`error`]    | `IngestError`, `FaultKind`, `IngestResult<T>`             |
//!
//! # Dataset format (summary)
//!
//! ```text
//! <numPOI>
//! <id>\t<name>\t<lat>\t<lon>                          × numPOI
//! <numRoads>
//! <fromId>\t<toId>\t<dist>\t<lat>\t<lon>\t<roadName>  × numRoads
//! ```
//!
//! Building a graph and validating a file go through the same parser, so the
//! two can never disagree about what a well-formed dataset is.

pub mod error;
pub mod loader;
pub mod parser;
pub mod query;
pub mod record;


pub use error::{FaultKind, IngestError, IngestResult};
pub use loader::{first_invalid_line, load_graph, load_graph_path, validate};
pub use query::{CityMap, FarthestPair, QueryOutcome};
pub use record::{CityGraph, PoiData, RoadData};
