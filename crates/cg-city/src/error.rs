use thiserror::Error;

use cg_core::CgError;
use cg_graph::GraphError;

/// What was wrong with a rejected dataset line.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum FaultKind {
    #[error("record count {0:?} is not a positive integer")]
    BadCount(String),

    #[error("record missing (unexpected end of input)")]
    MissingRecord,

    #[error("blank line where a record was expected")]
    BlankLine,

    #[error("expected {expected} tab-separated fields, found {found}")]
    FieldCount { expected: usize, found: usize },

    #[error("invalid identifier {0:?}")]
    BadId(String),

    #[error("invalid number {0:?}")]
    BadNumber(String),

    #[error("invalid road distance {0:?}")]
    BadDistance(String),

    #[error(transparent)]
    Coordinate(#[from] CgError),

    #[error("name is empty")]
    EmptyName,

    #[error("name is {len} bytes, limit is {max}")]
    NameTooLong { len: usize, max: usize },

    #[error("line is not valid UTF-8")]
    Encoding,

    #[error(transparent)]
    Graph(#[from] GraphError),
}

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("line {line}: {fault}")]
    Malformed { line: usize, fault: FaultKind },

    #[error("invalid load configuration: {0}")]
    InvalidConfig(CgError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl IngestError {
    pub(crate) fn malformed(line: usize, fault: impl Into<FaultKind>) -> Self {
        IngestError::Malformed { line, fault: fault.into() }
    }

    /// 1-based line of the first offending record, if the input itself was
    /// at fault.
    pub fn line(&self) -> Option<usize> {
        match self {
            IngestError::Malformed { line, .. } => Some(*line),
            _ => None,
        }
    }

    pub fn fault(&self) -> Option<&FaultKind> {
        match self {
            IngestError::Malformed { fault, .. } => Some(fault),
            _ => None,
        }
    }
}

pub type IngestResult<T> = Result<T, IngestError>;
