//! Workspace base error type.
//!
//! Sub-crates define their own error enums and wrap `CgError` where a core
//! check (coordinate range, configuration) fails inside them.

use thiserror::Error;

/// The top-level error type for `cg-core`.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CgError {
    #[error("latitude {0} outside [-90, 90]")]
    InvalidLatitude(f64),

    #[error("longitude {0} outside [-180, 180]")]
    InvalidLongitude(f64),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `cg-core`.
pub type CgResult<T> = Result<T, CgError>;
