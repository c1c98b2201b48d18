//! Error types for the rectangle-rule integrator.

use thiserror::Error;

/// Errors that can occur while setting up an integration.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum QuadratureError {
    /// The interval must be split into at least one rectangle.
    #[error("subdivision count must be at least 1")]
    ZeroSubdivisions,

    /// An interval bound is NaN or infinite.
    #[error("invalid interval [{lower}, {upper}]: bounds must be finite")]
    InvalidInterval {
        /// Lower bound as given
        lower: f64,
        /// Upper bound as given
        upper: f64,
    },
}

/// A specialized `Result` type for quadrature operations.
pub type Result<T> = std::result::Result<T, QuadratureError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            QuadratureError::ZeroSubdivisions.to_string(),
            "subdivision count must be at least 1"
        );
        let err = QuadratureError::InvalidInterval {
            lower: 0.0,
            upper: f64::INFINITY,
        };
        assert_eq!(
            err.to_string(),
            "invalid interval [0, inf]: bounds must be finite"
        );
    }
}
