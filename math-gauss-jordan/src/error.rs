//! Error types for the Gauss-Jordan elimination solver.
//!
//! Library errors use `thiserror`, with helper methods for error
//! categorization.

use thiserror::Error;

/// Errors that can occur while building or solving an augmented system.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GaussJordanError {
    /// A dimension does not match what the system requires.
    ///
    /// Raised for m != n, and for matrix or free-term lengths that disagree
    /// with the declared dimensions.
    #[error("dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch {
        /// Expected dimension
        expected: usize,
        /// Actual dimension provided
        got: usize,
    },

    /// A row of nested input has the wrong number of columns.
    #[error("row {row} has {got} columns, expected {expected}")]
    RaggedRow {
        /// Index of the offending row
        row: usize,
        /// Expected number of columns
        expected: usize,
        /// Actual number of columns
        got: usize,
    },

    /// An input coefficient or free term is NaN or infinite.
    ///
    /// `col` is `None` when the offending value is a free term.
    #[error("non-finite input at row {row}, column {col:?}")]
    NonFiniteInput {
        /// Row of the offending value
        row: usize,
        /// Column of the offending value, `None` for the free-term vector
        col: Option<usize>,
    },

    /// A zero or near-zero pivot was met while eliminating.
    #[error("matrix is singular or not pivot-safe: zero pivot at row {row}")]
    SingularMatrix {
        /// Row whose pivot vanished
        row: usize,
    },

    /// A solution component was requested outside [0, n).
    #[error("index {index} out of bounds for solution of length {len}")]
    IndexOutOfBounds {
        /// Requested index
        index: usize,
        /// Number of unknowns
        len: usize,
    },

    /// The solution vector was read before `solve()` completed.
    #[error("system has not been solved yet")]
    NotSolved,
}

/// A specialized `Result` type for elimination operations.
pub type Result<T> = std::result::Result<T, GaussJordanError>;

impl GaussJordanError {
    /// Returns `true` if this is a shape-related error.
    ///
    /// This includes `DimensionMismatch` and `RaggedRow` variants.
    pub fn is_dimension_error(&self) -> bool {
        matches!(
            self,
            GaussJordanError::DimensionMismatch { .. } | GaussJordanError::RaggedRow { .. }
        )
    }

    /// Returns `true` if this error comes from the numbers rather than the shapes.
    ///
    /// This includes `NonFiniteInput` and `SingularMatrix` variants.
    pub fn is_numerical_error(&self) -> bool {
        matches!(
            self,
            GaussJordanError::NonFiniteInput { .. } | GaussJordanError::SingularMatrix { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GaussJordanError::DimensionMismatch {
            expected: 3,
            got: 4,
        };
        assert_eq!(err.to_string(), "dimension mismatch: expected 3, got 4");

        let err = GaussJordanError::SingularMatrix { row: 2 };
        assert_eq!(
            err.to_string(),
            "matrix is singular or not pivot-safe: zero pivot at row 2"
        );

        let err = GaussJordanError::IndexOutOfBounds { index: 5, len: 3 };
        assert_eq!(
            err.to_string(),
            "index 5 out of bounds for solution of length 3"
        );
    }

    #[test]
    fn test_is_dimension_error() {
        let dim_err = GaussJordanError::RaggedRow {
            row: 1,
            expected: 3,
            got: 2,
        };
        let singular = GaussJordanError::SingularMatrix { row: 0 };

        assert!(dim_err.is_dimension_error());
        assert!(!singular.is_dimension_error());
    }

    #[test]
    fn test_is_numerical_error() {
        let non_finite = GaussJordanError::NonFiniteInput {
            row: 0,
            col: Some(1),
        };
        let bounds = GaussJordanError::IndexOutOfBounds { index: 1, len: 1 };

        assert!(non_finite.is_numerical_error());
        assert!(!bounds.is_numerical_error());
        assert!(!GaussJordanError::NotSolved.is_numerical_error());
    }
}
