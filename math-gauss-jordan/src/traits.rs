//! Core traits for the elimination solver
//!
//! This module defines the abstractions shared by the solver and its checks:
//! - [`RealField`]: Trait for the real scalar types the solver works on
//! - [`LinearOperator`]: Trait for matrix-like objects that can perform matrix-vector products

use ndarray::Array1;
use num_traits::{Float, NumAssign, ToPrimitive};
use std::fmt::Debug;

/// Trait for real scalar types that can be used by the elimination solver.
///
/// # Implementations
///
/// Provided for:
/// - `f64` (default, the only type the benchmark harness uses)
/// - `f32` (for memory-constrained applications)
pub trait RealField: Float + NumAssign + ToPrimitive + Send + Sync + Debug + 'static {
    /// Default relative pivot tolerance (machine epsilon)
    #[inline]
    fn default_pivot_tolerance() -> Self {
        Self::epsilon()
    }

    /// Magnitude |x|
    #[inline]
    fn magnitude(&self) -> Self {
        self.abs()
    }

    /// Check if this is approximately zero
    #[inline]
    fn is_zero_approx(&self, tol: Self) -> bool {
        self.abs() <= tol
    }
}

impl RealField for f64 {}

impl RealField for f32 {}

/// Trait for linear operators (matrices) that can perform matrix-vector products.
///
/// The residual checks only need `y = A * x`, so dense matrices and
/// matrix-free operators can be verified the same way.
pub trait LinearOperator<T: RealField>: Send + Sync {
    /// Number of rows in the operator
    fn num_rows(&self) -> usize;

    /// Number of columns in the operator
    fn num_cols(&self) -> usize;

    /// Apply the operator: y = A * x
    fn apply(&self, x: &Array1<T>) -> Array1<T>;

    /// Check if the operator is square
    fn is_square(&self) -> bool {
        self.num_rows() == self.num_cols()
    }
}
