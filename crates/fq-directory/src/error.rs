//! Directory-subsystem error type.

use thiserror::Error;

use fq_graph::GraphError;

/// Errors produced by `fq-directory`.
#[derive(Debug, Error)]
pub enum DirectoryError {
    /// A facility or query named a hub never declared in the dataset.
    #[error("hub {0:?} is not declared in this directory")]
    UnknownHub(String),

    #[error(transparent)]
    Graph(#[from] GraphError),

    /// Malformed dataset row (non-numeric coordinate, missing column…).
    /// Raised only at the CSV boundary, never inside the engine.
    #[error("dataset parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type DirectoryResult<T> = Result<T, DirectoryError>;
