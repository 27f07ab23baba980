//! Graph-subsystem error type.

use thiserror::Error;

use fq_core::LocationId;

/// Errors produced by `fq-graph`.
#[derive(Debug, Error)]
pub enum GraphError {
    /// A road insertion referenced a location never added to this network.
    #[error("location {0} is not a member of this network")]
    UnknownNode(LocationId),

    /// A shortest-path query named an origin absent from this network.
    #[error("query origin {0} is not a member of this network")]
    UnknownOrigin(LocationId),
}

pub type GraphResult<T> = Result<T, GraphError>;
