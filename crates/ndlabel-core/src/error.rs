//! Error types for ndlabel-core
//!
//! Provides a unified error type for the core data structures. The labeling
//! algorithms themselves have almost no recoverable failure surface; what is
//! reported here are malformed arguments caught at construction time.

use thiserror::Error;

/// ndlabel-core error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Structuring element is malformed (empty extent, bad center, ...)
    #[error("invalid structuring element: {0}")]
    InvalidStructuringElement(String),

    /// Rank of two inputs differs
    #[error("dimension mismatch: expected rank {expected}, got rank {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// Boundary mode name not recognized
    #[error("unknown boundary mode: {0:?}")]
    UnknownBoundaryMode(String),
}

/// Result type alias for ndlabel-core operations
pub type Result<T> = std::result::Result<T, Error>;
