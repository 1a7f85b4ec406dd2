//! Rendering of query results.
//!
//! Text output is one line per operation:
//!
//! | Operation  | Found                                   | Otherwise              |
//! |------------|-----------------------------------------|------------------------|
//! | location   | `lat lon` (7 dp)                        | `NOTFOUND`             |
//! | diameter   | `lat1 lon1 lat2 lon2 dist` (7 dp, 2 dp) | `0`                    |
//! | distance   | metres (3 dp)                           | `NOTFOUND`             |
//! | roaddist   | metres (3 dp)                           | `NOTFOUND`, `UNREACHABLE` |
//!
//! JSON output is one object per line, tagged by `op`.

use serde::Serialize;

use cg_city::{CityMap, FarthestPair, QueryOutcome};
use cg_core::GeoPoint;

use crate::cli::Operation;

pub const NOT_FOUND: &str = "NOTFOUND";
pub const UNREACHABLE: &str = "UNREACHABLE";

// ── Text ──────────────────────────────────────────────────────────────────────

pub fn location_text(position: Option<GeoPoint>) -> String {
    match position {
        Some(p) => format!("{:.7} {:.7}", p.lat, p.lon),
        None => NOT_FOUND.to_owned(),
    }
}

pub fn diameter_text(pair: Option<&FarthestPair>) -> String {
    match pair {
        Some(p) => format!(
            "{:.7} {:.7} {:.7} {:.7} {:.2}",
            p.first.lat, p.first.lon, p.second.lat, p.second.lon, p.distance_m
        ),
        None => "0".to_owned(),
    }
}

pub fn outcome_text(outcome: QueryOutcome) -> String {
    match outcome {
        QueryOutcome::Value(d) => format!("{d:.3}"),
        QueryOutcome::NotFound => NOT_FOUND.to_owned(),
        QueryOutcome::Unreachable => UNREACHABLE.to_owned(),
    }
}

// ── JSON ──────────────────────────────────────────────────────────────────────

/// One executed operation and its result.
#[derive(Debug, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Report<'a> {
    Location {
        name:     &'a str,
        position: Option<GeoPoint>,
    },
    Diameter {
        pair: Option<FarthestPair>,
    },
    Distance {
        from:   &'a str,
        to:     &'a str,
        result: QueryOutcome,
    },
    RoadDistance {
        from:   &'a str,
        to:     &'a str,
        result: QueryOutcome,
    },
}

impl Report<'_> {
    pub fn text(&self) -> String {
        match self {
            Report::Location { position, .. } => location_text(*position),
            Report::Diameter { pair } => diameter_text(pair.as_ref()),
            Report::Distance { result, .. } | Report::RoadDistance { result, .. } => {
                outcome_text(*result)
            }
        }
    }

    pub fn json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Run one operation against `map`.
pub fn execute<'a>(map: &CityMap, op: &'a Operation) -> Report<'a> {
    match op {
        Operation::Location(name) => Report::Location { name, position: map.location(name) },
        Operation::Diameter => Report::Diameter { pair: map.diameter() },
        Operation::Distance(a, b) => Report::Distance { from: a, to: b, result: map.distance(a, b) },
        Operation::RoadDistance(a, b) => Report::RoadDistance {
            from:   a,
            to:     b,
            result: map.road_distance(a, b),
        },
    }
}
