//! Solver configuration

use crate::traits::RealField;
use serde::{Deserialize, Serialize};

/// Row-exchange strategy used while eliminating
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Pivoting {
    /// No row exchanges: pivots are read from the frozen snapshot in natural row order
    #[default]
    None,
    /// Swap in the largest-magnitude candidate of the pivot column before each forward step
    Partial,
}

/// How much checking the solver performs on its input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Validation {
    /// Reject non-finite input and zero pivots with an error
    #[default]
    Strict,
    /// Divide through zero pivots and let NaN/inf propagate into the solution
    Legacy,
}

/// Gauss-Jordan solver configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GaussJordanConfig<R> {
    /// Row-exchange strategy
    #[serde(default)]
    pub pivoting: Pivoting,
    /// Input and pivot checking level
    #[serde(default)]
    pub validation: Validation,
    /// Relative pivot tolerance (strict mode only). A forward pivot is treated as zero
    /// when its magnitude is at or below `n * pivot_tolerance * max|row|`.
    pub pivot_tolerance: R,
    /// Log progress every N rows (0 = no output)
    #[serde(default)]
    pub print_interval: usize,
}

impl<R: RealField> GaussJordanConfig<R> {
    /// Configuration with the default tolerance for `R`
    pub fn new() -> Self {
        Self {
            pivoting: Pivoting::None,
            validation: Validation::Strict,
            pivot_tolerance: R::default_pivot_tolerance(),
            print_interval: 0,
        }
    }

    /// Sets the row-exchange strategy.
    pub fn pivoting(mut self, pivoting: Pivoting) -> Self {
        self.pivoting = pivoting;
        self
    }

    /// Sets the checking level.
    pub fn validation(mut self, validation: Validation) -> Self {
        self.validation = validation;
        self
    }

    /// Sets the zero-pivot tolerance.
    pub fn pivot_tolerance(mut self, tol: R) -> Self {
        self.pivot_tolerance = tol;
        self
    }

    /// Sets the progress logging interval in rows.
    pub fn print_interval(mut self, every: usize) -> Self {
        self.print_interval = every;
        self
    }

    /// Legacy behavior: no pivoting, no checks beyond the square shape
    pub fn legacy() -> Self {
        Self::new().validation(Validation::Legacy)
    }

    pub(crate) fn is_strict(&self) -> bool {
        self.validation == Validation::Strict
    }
}

impl Default for GaussJordanConfig<f64> {
    fn default() -> Self {
        Self::new()
    }
}

impl Default for GaussJordanConfig<f32> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = GaussJordanConfig::<f64>::default();
        assert_eq!(cfg.pivoting, Pivoting::None);
        assert_eq!(cfg.validation, Validation::Strict);
        assert_eq!(cfg.pivot_tolerance, f64::EPSILON);
        assert_eq!(cfg.print_interval, 0);
        assert!(cfg.is_strict());
    }

    #[test]
    fn test_builder_setters() {
        let cfg = GaussJordanConfig::<f64>::new()
            .pivoting(Pivoting::Partial)
            .pivot_tolerance(1e-12)
            .print_interval(10);
        assert_eq!(cfg.pivoting, Pivoting::Partial);
        assert_eq!(cfg.pivot_tolerance, 1e-12);
        assert_eq!(cfg.print_interval, 10);

        let legacy = GaussJordanConfig::<f64>::legacy();
        assert_eq!(legacy.validation, Validation::Legacy);
        assert!(!legacy.is_strict());
    }

    #[test]
    fn test_json_round_trip_uses_lowercase_names() {
        let cfg = GaussJordanConfig::<f64>::new().pivoting(Pivoting::Partial);
        let json = serde_json::to_string(&cfg).unwrap();
        assert!(json.contains("\"partial\""));
        assert!(json.contains("\"strict\""));

        let parsed: GaussJordanConfig<f64> =
            serde_json::from_str(r#"{"pivot_tolerance": 1e-10}"#).unwrap();
        assert_eq!(parsed.pivoting, Pivoting::None);
        assert_eq!(parsed.validation, Validation::Strict);
        assert_eq!(parsed.pivot_tolerance, 1e-10);
    }
}
