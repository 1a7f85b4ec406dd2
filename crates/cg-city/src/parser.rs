//! Line reader and per-record field parsing.
//!
//! # Line rules
//!
//! | Record    | Fields                                              |
//! |-----------|-----------------------------------------------------|
//! | count     | `n` (positive integer)                              |
//! | POI       | `id`, `name`, `lat`, `lon`                          |
//! | road      | `from`, `to`, `dist`, `lat`, `lon`, `name`          |
//!
//! - Ids are `-?[0-9]+` within `i32`; surrounding whitespace is ignored.
//! - POI names lose leading whitespace; names must be non-empty and at most
//!   `LoadConfig::max_name_len` bytes.
//! - `dist` is the literal `NaN` (stored as 0 m) or a finite, non-negative
//!   number.
//! - Coordinates must be numeric and within range.
//!
//! Fields are split on every tab and never quoted; a `"` in a name is an
//! ordinary character, a tab in a name is a field-count fault.

use std::io::BufRead;

use cg_core::{GeoPoint, LoadConfig, NodeId};

use crate::error::{FaultKind, IngestError};
use crate::record::{PoiData, RoadData};

/// Distance token normalized to a zero-length road.
pub const NAN_DISTANCE_TOKEN: &str = "NaN";

const POI_FIELDS: usize = 4;
const ROAD_FIELDS: usize = 6;

// ── Parsed records ────────────────────────────────────────────────────────────

/// One POI line, ready for `Graph::add_node`.
#[derive(Clone, Debug, PartialEq)]
pub struct PoiRecord {
    pub id:   NodeId,
    pub data: PoiData,
}

/// One road line, ready for `Graph::add_edge`.
#[derive(Clone, Debug, PartialEq)]
pub struct RoadRecord {
    pub from:     NodeId,
    pub to:       NodeId,
    pub length_m: f32,
    pub data:     RoadData,
}

// ── Line reader ───────────────────────────────────────────────────────────────

/// Sequential reader that hands out one physical line at a time and knows
/// which line it is on.
///
/// Lines end at `\n`; a trailing `\r` is dropped.  Every line must be UTF-8.
pub struct Records<R: BufRead> {
    inner:     R,
    buf:       Vec<u8>,
    next_line: usize,
}

impl<R: BufRead> Records<R> {
    pub fn new(inner: R) -> Self {
        Self { inner, buf: Vec::new(), next_line: 1 }
    }

    /// Line number of the next record.
    pub fn line(&self) -> usize {
        self.next_line
    }

    /// Read the record on the next line.  End of input and blank lines are
    /// faults at that line.
    pub fn next_record(&mut self) -> Result<(usize, String), IngestError> {
        let line = self.next_line;
        let text = self
            .read_line()?
            .ok_or_else(|| IngestError::malformed(line, FaultKind::MissingRecord))?;
        if text.is_empty() {
            return Err(IngestError::malformed(line, FaultKind::BlankLine));
        }
        Ok((line, text))
    }

    /// `true` if anything but blank lines follows the last consumed record.
    ///
    /// Trailing content is never parsed: undecodable bytes and read errors
    /// past this point do not affect the load.
    pub fn has_more(&mut self) -> bool {
        loop {
            self.buf.clear();
            match self.inner.read_until(b'\n', &mut self.buf) {
                Ok(0) | Err(_) => return false,
                Ok(_) if self.buf.iter().any(|b| !b.is_ascii_whitespace()) => return true,
                Ok(_) => {}
            }
        }
    }

    fn read_line(&mut self) -> Result<Option<String>, IngestError> {
        let line = self.next_line;
        self.buf.clear();
        if self.inner.read_until(b'\n', &mut self.buf)? == 0 {
            return Ok(None);
        }
        self.next_line += 1;

        let mut bytes = self.buf.as_slice();
        if let Some(rest) = bytes.strip_suffix(b"\n") {
            bytes = rest;
        }
        if let Some(rest) = bytes.strip_suffix(b"\r") {
            bytes = rest;
        }
        match std::str::from_utf8(bytes) {
            Ok(text) => Ok(Some(text.to_owned())),
            Err(_) => Err(IngestError::malformed(line, FaultKind::Encoding)),
        }
    }
}

// ── Field parsing ─────────────────────────────────────────────────────────────

/// Parse a section header: a single positive integer.
pub fn parse_count(line: &str) -> Result<usize, FaultKind> {
    let rec = split_fields(line, 1)?;
    let tok = rec[0].trim();
    match tok.parse::<i64>() {
        Ok(n) if n > 0 => usize::try_from(n).map_err(|_| FaultKind::BadCount(tok.to_owned())),
        _ => Err(FaultKind::BadCount(tok.to_owned())),
    }
}

/// Parse `id \t name \t lat \t lon`.
pub fn parse_poi(line: &str, config: &LoadConfig) -> Result<PoiRecord, FaultKind> {
    let rec = split_fields(line, POI_FIELDS)?;
    let id = parse_id(rec[0])?;
    let name = check_name(rec[1].trim_start(), config)?;
    let position = parse_position(rec[2], rec[3])?;
    Ok(PoiRecord {
        id,
        data: PoiData { name: name.to_owned(), position },
    })
}

/// Parse `from \t to \t dist \t lat \t lon \t name`.
pub fn parse_road(line: &str, config: &LoadConfig) -> Result<RoadRecord, FaultKind> {
    let rec = split_fields(line, ROAD_FIELDS)?;
    let from = parse_id(rec[0])?;
    let to = parse_id(rec[1])?;
    let length_m = parse_distance(rec[2])?;
    let position = parse_position(rec[3], rec[4])?;
    let name = check_name(rec[5], config)?;
    Ok(RoadRecord {
        from,
        to,
        length_m,
        data: RoadData { name: name.to_owned(), position },
    })
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn split_fields(line: &str, expected: usize) -> Result<Vec<&str>, FaultKind> {
    let fields: Vec<&str> = line.split('\t').collect();
    if fields.len() != expected {
        return Err(FaultKind::FieldCount { expected, found: fields.len() });
    }
    Ok(fields)
}

fn parse_id(field: &str) -> Result<NodeId, FaultKind> {
    let tok = field.trim();
    tok.parse::<NodeId>().map_err(|_| FaultKind::BadId(tok.to_owned()))
}

fn parse_number(field: &str) -> Result<f64, FaultKind> {
    let tok = field.trim();
    tok.parse::<f64>().map_err(|_| FaultKind::BadNumber(tok.to_owned()))
}

fn parse_position(lat: &str, lon: &str) -> Result<GeoPoint, FaultKind> {
    let lat = parse_number(lat)?;
    let lon = parse_number(lon)?;
    Ok(GeoPoint::checked(lat, lon)?)
}

fn parse_distance(field: &str) -> Result<f32, FaultKind> {
    let tok = field.trim();
    if tok == NAN_DISTANCE_TOKEN {
        return Ok(0.0);
    }
    let bad = || FaultKind::BadDistance(tok.to_owned());
    let value = tok.parse::<f64>().map_err(|_| bad())?;
    let length = value as f32;
    if !length.is_finite() || length < 0.0 {
        return Err(bad());
    }
    Ok(length)
}

fn check_name<'a>(name: &'a str, config: &LoadConfig) -> Result<&'a str, FaultKind> {
    if name.trim().is_empty() {
        return Err(FaultKind::EmptyName);
    }
    if name.len() > config.max_name_len {
        return Err(FaultKind::NameTooLong { len: name.len(), max: config.max_name_len });
    }
    Ok(name)
}
