//! Strongly typed identifier wrappers.
//!
//! Two kinds of handle exist and must never be mixed up:
//!
//! - [`NodeId`] is the caller-assigned key read from the dataset.  It is a
//!   signed integer with no relation to storage order.
//! - [`NodePos`] is the dense slot of a node in a graph's live node array.
//!   Positions shift when a node is removed, so they are only valid until the
//!   next removal.

use std::fmt;
use std::str::FromStr;

/// Generate a typed wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<$inner> for $name {
            #[inline(always)]
            fn from(n: $inner) -> $name {
                $name(n)
            }
        }
    };
}

typed_id! {
    /// Caller-assigned identifier of a POI node.  Unique within one graph.
    pub struct NodeId(i32);
}

typed_id! {
    /// Dense index of a node in a graph's node array.
    pub struct NodePos(u32);
}

impl NodePos {
    /// Cast to `usize` for direct use as a `Vec` index.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl TryFrom<usize> for NodePos {
    type Error = std::num::TryFromIntError;
    fn try_from(n: usize) -> Result<NodePos, Self::Error> {
        u32::try_from(n).map(NodePos)
    }
}

/// Why a token was rejected as a [`NodeId`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum IdSyntaxError {
    /// Not of the form `-?[0-9]+`.
    Syntax,
    /// Well-formed but outside the `i32` range.
    Overflow,
}

impl FromStr for NodeId {
    type Err = IdSyntaxError;

    /// Accepts an optional leading minus followed by one or more ASCII
    /// digits, nothing else (no `+`, no whitespace).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix('-').unwrap_or(s);
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(IdSyntaxError::Syntax);
        }
        s.parse::<i32>().map(NodeId).map_err(|_| IdSyntaxError::Overflow)
    }
}
