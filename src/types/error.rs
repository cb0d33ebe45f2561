//! Error types for the relgraph library.
//!
//! The container itself is total: queries on absent structure return empty
//! collections or the sentinel, mutations create what they need, cleanup of
//! absent targets is a no-op. These errors belong to the surrounding
//! tooling — the edge-list loader and the CLI.

use thiserror::Error;

/// All errors that can occur in the relgraph tooling.
#[derive(Error, Debug)]
pub enum RelError {
    /// IO error while reading an edge-list file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A malformed line in an edge-list file.
    #[error("parse error at line {line}: {reason}")]
    Parse { line: usize, reason: String },

    /// An unrecognized direction name.
    #[error("unknown direction: {0}")]
    UnknownDirection(String),
}

/// Convenience result type for relgraph tooling operations.
pub type RelResult<T> = Result<T, RelError>;
