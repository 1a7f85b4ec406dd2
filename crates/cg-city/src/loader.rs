//! Dataset loader: builds a [`CityGraph`] or validates a file.
//!
//! # Two views, one parser
//!
//! [`load_graph`] returns the built graph.  [`validate`] and
//! [`first_invalid_line`] run exactly the same code and throw the graph
//! away, so a file that validates always loads and vice versa.  Every input
//! fault carries the 1-based line of the offending record, counting both
//! section-count lines.
//!
//! # Failure
//!
//! The first fault aborts the load.  The half-built graph is dropped on the
//! way out; callers never see a partial result.
//!
//! # Order
//!
//! All POI lines are inserted as nodes before the first road line is read, so
//! a road may reference any POI regardless of where it appears in the POI
//! section.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use tracing::{debug, info, warn};

use cg_core::LoadConfig;

use crate::error::{IngestError, IngestResult};
use crate::parser::{Records, parse_count, parse_poi, parse_road};
use crate::record::CityGraph;

// ── Public API ────────────────────────────────────────────────────────────────

/// Build a [`CityGraph`] from the dataset file at `path`.
pub fn load_graph_path(path: &Path, config: &LoadConfig) -> IngestResult<CityGraph> {
    let file = File::open(path)?;
    debug!(path = %path.display(), "loading dataset");
    load_graph(file, config)
}

/// Like [`load_graph_path`] but accepts any `Read` source.
///
/// Useful for testing (pass a `&[u8]`) or reading standard input.
pub fn load_graph<R: Read>(reader: R, config: &LoadConfig) -> IngestResult<CityGraph> {
    build(reader, config).inspect_err(|e| warn!(error = %e, "dataset rejected"))
}

/// Check a dataset without keeping the graph.
///
/// Applies every rule [`load_graph`] applies, including graph-level ones
/// (duplicate ids, roads to unknown POIs, repeated roads).
pub fn validate<R: Read>(reader: R, config: &LoadConfig) -> IngestResult<()> {
    load_graph(reader, config).map(drop)
}

/// Line number of the first offending record, or `None` if the dataset is
/// valid.
///
/// Failures not attributable to a line (I/O, bad configuration) are
/// returned as errors.
pub fn first_invalid_line<R: Read>(reader: R, config: &LoadConfig) -> IngestResult<Option<usize>> {
    match validate(reader, config) {
        Ok(()) => Ok(None),
        Err(e) => match e.line() {
            Some(line) => Ok(Some(line)),
            None => Err(e),
        },
    }
}

// ── Internals ─────────────────────────────────────────────────────────────────

fn build<R: Read>(reader: R, config: &LoadConfig) -> IngestResult<CityGraph> {
    config.validate().map_err(IngestError::InvalidConfig)?;

    let mut records = Records::new(BufReader::new(reader));
    let mut graph = CityGraph::with_capacity(config.initial_node_capacity);

    // ── POI section ───────────────────────────────────────────────────────
    let (line, rec) = records.next_record()?;
    let poi_count = parse_count(&rec).map_err(|f| IngestError::malformed(line, f))?;
    debug!(poi_count, "reading POI section");

    for _ in 0..poi_count {
        let (line, rec) = records.next_record()?;
        let poi = parse_poi(&rec, config).map_err(|f| IngestError::malformed(line, f))?;
        graph
            .add_node(poi.id, poi.data)
            .map_err(|e| IngestError::malformed(line, e))?;
    }

    // ── Road section ──────────────────────────────────────────────────────
    let (line, rec) = records.next_record()?;
    let road_count = parse_count(&rec).map_err(|f| IngestError::malformed(line, f))?;
    debug!(road_count, first_line = records.line(), "reading road section");

    for _ in 0..road_count {
        let (line, rec) = records.next_record()?;
        let road = parse_road(&rec, config).map_err(|f| IngestError::malformed(line, f))?;
        graph
            .add_edge(road.from, road.to, road.length_m, road.data)
            .map_err(|e| IngestError::malformed(line, e))?;
    }

    let last_line = records.line() - 1;
    if records.has_more() {
        debug!(last_line, "ignoring lines after the road section");
    }

    info!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "city graph loaded"
    );
    Ok(graph)
}
