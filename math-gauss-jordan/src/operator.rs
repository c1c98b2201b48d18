//! Dense operator and residual checks
//!
//! Used to verify a computed solution: `A * x` should reproduce `b`.

use crate::error::{GaussJordanError, Result};
use crate::traits::{LinearOperator, RealField};
use ndarray::{Array1, Array2};

/// Dense row-major matrix seen as a linear operator
#[derive(Debug, Clone)]
pub struct DenseOperator<T: RealField> {
    matrix: Array2<T>,
}

impl<T: RealField> DenseOperator<T> {
    /// Wrap a dense matrix
    pub fn new(matrix: Array2<T>) -> Self {
        Self { matrix }
    }

    /// The wrapped matrix
    pub fn matrix(&self) -> &Array2<T> {
        &self.matrix
    }
}

impl<T: RealField> From<Array2<T>> for DenseOperator<T> {
    fn from(matrix: Array2<T>) -> Self {
        Self::new(matrix)
    }
}

impl<T: RealField> LinearOperator<T> for DenseOperator<T> {
    fn num_rows(&self) -> usize {
        self.matrix.nrows()
    }

    fn num_cols(&self) -> usize {
        self.matrix.ncols()
    }

    /// # Panics
    ///
    /// Panics if `x.len()` differs from the number of columns. The residual
    /// helpers check shapes first and report `DimensionMismatch` instead.
    fn apply(&self, x: &Array1<T>) -> Array1<T> {
        assert_eq!(x.len(), self.num_cols(), "operand length must match columns");
        Array1::from_shape_fn(self.num_rows(), |i| {
            self.matrix
                .row(i)
                .iter()
                .zip(x.iter())
                .fold(T::zero(), |acc, (&a, &xi)| acc + a * xi)
        })
    }
}

/// Euclidean norm of a vector
pub fn vector_norm<T: RealField>(v: &Array1<T>) -> T {
    v.iter().fold(T::zero(), |acc, &x| acc + x * x).sqrt()
}

/// Residual norm ||A x - b||
pub fn residual_norm<T, A>(operator: &A, x: &Array1<T>, b: &Array1<T>) -> Result<T>
where
    T: RealField,
    A: LinearOperator<T>,
{
    if x.len() != operator.num_cols() {
        return Err(GaussJordanError::DimensionMismatch {
            expected: operator.num_cols(),
            got: x.len(),
        });
    }
    if b.len() != operator.num_rows() {
        return Err(GaussJordanError::DimensionMismatch {
            expected: operator.num_rows(),
            got: b.len(),
        });
    }

    let ax = operator.apply(x);
    let r = &ax - b;
    Ok(vector_norm(&r))
}

/// Relative residual ||A x - b|| / ||b||
///
/// Falls back to the absolute residual when `b` is zero.
pub fn relative_residual<T, A>(operator: &A, x: &Array1<T>, b: &Array1<T>) -> Result<T>
where
    T: RealField,
    A: LinearOperator<T>,
{
    let r_norm = residual_norm(operator, x, b)?;
    let b_norm = vector_norm(b);
    if b_norm.is_zero_approx(T::zero()) {
        Ok(r_norm)
    } else {
        Ok(r_norm / b_norm)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::array;

    #[test]
    fn test_dense_apply() {
        let op = DenseOperator::new(array![[1.0_f64, 2.0], [3.0, 4.0], [5.0, 6.0]]);
        assert_eq!(op.num_rows(), 3);
        assert_eq!(op.num_cols(), 2);
        assert!(!op.is_square());

        let y = op.apply(&array![1.0, -1.0]);
        assert_eq!(y, array![-1.0, -1.0, -1.0]);
    }

    #[test]
    fn test_residuals() {
        let op: DenseOperator<f64> = array![[2.0, 0.0], [0.0, 4.0]].into();
        let b = array![2.0, 4.0];

        assert_relative_eq!(residual_norm(&op, &array![1.0, 1.0], &b).unwrap(), 0.0);
        assert_relative_eq!(residual_norm(&op, &array![1.0, 0.0], &b).unwrap(), 4.0);
        assert_relative_eq!(
            relative_residual(&op, &array![1.0, 0.0], &b).unwrap(),
            4.0 / 20.0_f64.sqrt()
        );
    }

    #[test]
    fn test_relative_residual_zero_rhs() {
        let op: DenseOperator<f64> = array![[1.0, 0.0], [0.0, 1.0]].into();
        let b = array![0.0, 0.0];
        assert_relative_eq!(
            relative_residual(&op, &array![3.0, 4.0], &b).unwrap(),
            5.0
        );
    }

    #[test]
    fn test_residual_shape_mismatch() {
        let op: DenseOperator<f64> = array![[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]].into();

        assert_eq!(
            residual_norm(&op, &array![1.0, 2.0, 3.0], &array![1.0, 1.0, 1.0]),
            Err(GaussJordanError::DimensionMismatch {
                expected: 2,
                got: 3
            })
        );
        assert_eq!(
            relative_residual(&op, &array![1.0, 2.0], &array![1.0, 1.0]),
            Err(GaussJordanError::DimensionMismatch {
                expected: 3,
                got: 2
            })
        );
    }
}
