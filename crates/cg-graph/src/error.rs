//! Graph-store error type.

use thiserror::Error;

use cg_core::NodeId;

/// Errors produced by `cg-graph`.  None of them leaves the graph modified.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GraphError {
    #[error("node {0} already exists")]
    DuplicateNode(NodeId),

    #[error("node {0} not found in graph")]
    NodeNotFound(NodeId),

    #[error("edge {from} -> {to} already exists")]
    DuplicateEdge { from: NodeId, to: NodeId },

    #[error("edge {from} -> {to} has invalid weight {weight}")]
    InvalidWeight { from: NodeId, to: NodeId, weight: f32 },
}

pub type GraphResult<T> = Result<T, GraphError>;
