//! Error types for the test framework

use thiserror::Error;

/// Errors that can occur while building regression fixtures
#[derive(Debug, Error)]
pub enum TestError {
    /// A text grid could not be parsed
    #[error("failed to parse grid at line {line}: {message}")]
    GridParse { line: usize, message: String },

    /// Foreground density outside [0, 1]
    #[error("invalid density {0}: must lie in [0, 1]")]
    InvalidDensity(f64),

    /// Fixture shape could not be built
    #[error("invalid fixture shape: {0}")]
    Shape(#[from] ndarray::ShapeError),
}

/// Result type for test operations
pub type TestResult<T> = Result<T, TestError>;
