//! Error types for ndlabel-region

use thiserror::Error;

/// Errors that can occur during region processing operations
#[derive(Debug, Error)]
pub enum RegionError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] ndlabel_core::Error),

    /// Paired arrays do not have the same shape
    #[error("shape mismatch: expected {expected:?}, got {actual:?}")]
    ShapeMismatch {
        expected: Vec<usize>,
        actual: Vec<usize>,
    },

    /// Number of labels does not fit the label element type
    #[error("label overflow: {count} labels exceed the label type maximum {max}")]
    LabelOverflow { count: usize, max: u128 },
}

/// Result type for region operations
pub type RegionResult<T> = Result<T, RegionError>;

/// Check that two shapes are identical
pub(crate) fn check_same_shape(expected: &[usize], actual: &[usize]) -> RegionResult<()> {
    if expected != actual {
        return Err(RegionError::ShapeMismatch {
            expected: expected.to_vec(),
            actual: actual.to_vec(),
        });
    }
    Ok(())
}
