//! Dataset load configuration.

use crate::{CgError, CgResult};

/// Knobs for building a graph from a dataset file.
///
/// Typically built from command-line flags by the application crate and
/// passed to the loader.  `Default` gives the values the dataset format was
/// designed around.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LoadConfig {
    /// Node slots reserved up front.  The node array doubles when full.
    /// Default: 100.
    pub initial_node_capacity: usize,

    /// Longest accepted POI or road name, in bytes.  Longer names reject the
    /// whole dataset; they are never truncated to fit, so a name that loads
    /// is always the name as written.  Default: 255.
    pub max_name_len: usize,
}

impl LoadConfig {
    pub const DEFAULT_NODE_CAPACITY: usize = 100;
    pub const DEFAULT_MAX_NAME_LEN: usize = 255;

    /// Reject settings no dataset could satisfy.
    pub fn validate(&self) -> CgResult<()> {
        if self.initial_node_capacity == 0 {
            return Err(CgError::Config("initial_node_capacity must be positive".into()));
        }
        if self.max_name_len == 0 {
            return Err(CgError::Config("max_name_len must be positive".into()));
        }
        Ok(())
    }

    /// Override the name length limit.
    pub fn with_max_name_len(mut self, max_name_len: usize) -> Self {
        self.max_name_len = max_name_len;
        self
    }
}

impl Default for LoadConfig {
    fn default() -> Self {
        Self {
            initial_node_capacity: Self::DEFAULT_NODE_CAPACITY,
            max_name_len:          Self::DEFAULT_MAX_NAME_LEN,
        }
    }
}
