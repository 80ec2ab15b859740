//! Error types for elimr

use thiserror::Error;

/// Result type alias using elimr's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in elimr operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Shape mismatch in an operation
    #[error("Shape mismatch: expected {expected:?}, got {got:?}")]
    ShapeMismatch {
        /// Expected shape
        expected: Vec<usize>,
        /// Actual shape
        got: Vec<usize>,
    },

    /// Rows of unequal length passed to a matrix constructor
    #[error("Jagged rows: row {row} has {got} columns, expected {expected}")]
    JaggedRows {
        /// Index of the offending row
        row: usize,
        /// Column count of row 0
        expected: usize,
        /// Column count of the offending row
        got: usize,
    },

    /// Matrix with zero rows or zero columns
    #[error("Matrix must have at least one row and one column")]
    EmptyMatrix,

    /// No valid pivot sequence exists, or the final identity check failed
    #[error("Matrix is not invertible")]
    NotInvertible,
}
