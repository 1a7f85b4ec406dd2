//! `cg-core`: foundational types for the `citygraph` workspace.
//!
//! This crate is a dependency of every other `cg-*` crate.  It intentionally
//! has no `cg-*` dependencies and minimal external ones (only `thiserror`,
//! plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `NodeId` (caller-assigned key), `NodePos` (dense slot)|
//! | [`geo`]         | `GeoPoint`, `deg_to_rad`, `haversine_m`, range checks |
//! | [`config`]      | `LoadConfig`                                          |
//! | [`error`]       | `CgError`, `CgResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod geo;
pub mod ids;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::LoadConfig;
pub use error::{CgError, CgResult};
pub use geo::{EARTH_RADIUS_M, GeoPoint, deg_to_rad, haversine_m, valid_lat, valid_lon};
pub use ids::{IdSyntaxError, NodeId, NodePos};
