//! Gauss-Jordan elimination solver
//!
//! Reduces a square augmented system to a normalized diagonal form with one
//! forward pass and one backward pass, then reads the solution straight out of
//! the transformed free-term vector.
//!
//! Two copies of the system are kept. The working copy is rewritten in place;
//! the frozen copy is the divisor source for pivots. The frozen copy is
//! refreshed from the working copy after every forward row and is never
//! refreshed during the backward pass, so backward pivots are the values
//! frozen at the end of the forward pass.

use crate::config::{GaussJordanConfig, Pivoting};
use crate::error::{GaussJordanError, Result};
use crate::traits::RealField;
use ndarray::{Array1, Array2};
use num_traits::NumCast;
use std::ops::{Index, IndexMut};
use std::time::Instant;

/// Timing and bookkeeping for one `solve` call
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolveReport {
    /// Wall-clock duration of forward + backward + extraction, in seconds
    pub elapsed: f64,
    /// Row-exchange strategy that was used
    pub pivoting: Pivoting,
    /// Number of row exchanges performed (always 0 without pivoting)
    pub row_swaps: usize,
}

/// Dense Gauss-Jordan solver owning its augmented system
///
/// The instance is single-use: it is built from one system, solved once and
/// then read through the accessors.
#[derive(Debug, Clone)]
pub struct EliminationSolver<T: RealField> {
    /// Frozen coefficients, the pivot divisor source
    coefs: Array2<T>,
    /// Working coefficients, mutated in place
    coefs_work: Array2<T>,
    /// Frozen free terms
    free_terms: Array1<T>,
    /// Working free terms, converge to the solution
    free_terms_work: Array1<T>,
    variables: Array1<T>,
    /// Largest input magnitude per row, follows its row through exchanges
    row_scale: Array1<T>,
    n: usize,
    m: usize,
    config: GaussJordanConfig<T>,
    row_swaps: usize,
    solved: bool,
}

impl<T: RealField> EliminationSolver<T> {
    /// Build a solver for `m` equations in `n` unknowns with the default configuration
    pub fn new(n: usize, m: usize, coefficients: &Array2<T>, free_terms: &Array1<T>) -> Result<Self> {
        Self::with_config(n, m, coefficients, free_terms, GaussJordanConfig::new())
    }

    /// Build a solver with an explicit configuration
    ///
    /// Both buffers are deep copies of the caller's data. `m != n` is always
    /// rejected; strict validation additionally rejects non-finite input.
    pub fn with_config(
        n: usize,
        m: usize,
        coefficients: &Array2<T>,
        free_terms: &Array1<T>,
        config: GaussJordanConfig<T>,
    ) -> Result<Self> {
        if m != n {
            return Err(GaussJordanError::DimensionMismatch {
                expected: n,
                got: m,
            });
        }
        if coefficients.nrows() != m {
            return Err(GaussJordanError::DimensionMismatch {
                expected: m,
                got: coefficients.nrows(),
            });
        }
        if coefficients.ncols() != n {
            return Err(GaussJordanError::DimensionMismatch {
                expected: n,
                got: coefficients.ncols(),
            });
        }
        if free_terms.len() != m {
            return Err(GaussJordanError::DimensionMismatch {
                expected: m,
                got: free_terms.len(),
            });
        }

        if config.is_strict() {
            if let Some(((row, col), _)) = coefficients.indexed_iter().find(|(_, v)| !v.is_finite()) {
                return Err(GaussJordanError::NonFiniteInput {
                    row,
                    col: Some(col),
                });
            }
            if let Some(row) = free_terms.iter().position(|v| !v.is_finite()) {
                return Err(GaussJordanError::NonFiniteInput { row, col: None });
            }
        }

        let row_scale = coefficients
            .rows()
            .into_iter()
            .map(|row| row.iter().fold(T::zero(), |acc, v| acc.max(v.magnitude())))
            .collect::<Array1<T>>();

        Ok(Self {
            coefs: coefficients.to_owned(),
            coefs_work: coefficients.to_owned(),
            free_terms: free_terms.to_owned(),
            free_terms_work: free_terms.to_owned(),
            variables: Array1::from_elem(n, T::zero()),
            row_scale,
            n,
            m,
            config,
            row_swaps: 0,
            solved: false,
        })
    }

    /// Build a solver from nested rows with the default configuration
    pub fn from_rows(n: usize, m: usize, rows: &[Vec<T>], free_terms: &[T]) -> Result<Self> {
        if rows.len() != m {
            return Err(GaussJordanError::DimensionMismatch {
                expected: m,
                got: rows.len(),
            });
        }
        if let Some((row, r)) = rows.iter().enumerate().find(|(_, r)| r.len() != n) {
            return Err(GaussJordanError::RaggedRow {
                row,
                expected: n,
                got: r.len(),
            });
        }

        let coefficients = Array2::from_shape_fn((m, n), |(i, j)| rows[i][j]);
        let free_terms = Array1::from_vec(free_terms.to_vec());
        Self::new(n, m, &coefficients, &free_terms)
    }

    /// Number of unknowns
    pub fn n(&self) -> usize {
        self.n
    }

    /// Number of equations
    pub fn m(&self) -> usize {
        self.m
    }

    /// Whether extraction has run
    pub fn is_solved(&self) -> bool {
        self.solved
    }

    /// Configuration in use
    pub fn config(&self) -> &GaussJordanConfig<T> {
        &self.config
    }

    /// Current elimination state of the coefficients
    pub fn working_matrix(&self) -> &Array2<T> {
        &self.coefs_work
    }

    /// Current elimination state of the free terms
    pub fn working_free_terms(&self) -> &Array1<T> {
        &self.free_terms_work
    }

    /// Frozen coefficient snapshot used as the pivot source
    pub fn frozen_matrix(&self) -> &Array2<T> {
        &self.coefs
    }

    /// Frozen free-term snapshot
    pub fn frozen_free_terms(&self) -> &Array1<T> {
        &self.free_terms
    }

    /// Forward pass: normalize each row by its frozen pivot and eliminate the
    /// pivot column from every row below, refreshing the frozen copy after each row.
    pub fn forward(&mut self) -> Result<()> {
        for i in 0..self.m {
            if self.config.pivoting == Pivoting::Partial {
                self.swap_in_pivot(i);
            }

            let pivot = self.coefs[[i, i]];
            self.check_pivot(i, pivot, self.pivot_threshold(i))?;

            self.coefs_work.row_mut(i).mapv_inplace(|v| v / pivot);
            self.free_terms_work[i] /= pivot;

            for j in (i + 1)..self.n {
                let coef = self.coefs_work[[j, i]] / self.coefs_work[[i, i]];
                for k in 0..self.n {
                    let update = self.coefs_work[[i, k]] * coef;
                    self.coefs_work[[j, k]] -= update;
                }
                let update = self.free_terms_work[i] * coef;
                self.free_terms_work[j] -= update;
            }

            self.coefs.assign(&self.coefs_work);
            self.free_terms.assign(&self.free_terms_work);

            if self.config.print_interval > 0 && (i + 1) % self.config.print_interval == 0 {
                log::debug!("Gauss-Jordan forward: row {}/{}", i + 1, self.m);
            }
        }
        Ok(())
    }

    /// Backward pass: normalize rows bottom-up and eliminate each pivot column
    /// from every row above. Pivots come from the snapshot frozen by `forward`.
    pub fn backward(&mut self) -> Result<()> {
        for i in (0..self.m).rev() {
            let pivot = self.coefs[[i, i]];
            // normalized by forward, only an exact zero is singular here
            self.check_pivot(i, pivot, T::zero())?;

            for j in (0..self.n).rev() {
                self.coefs_work[[i, j]] /= pivot;
            }
            self.free_terms_work[i] /= pivot;

            for j in (0..i).rev() {
                let coef = self.coefs_work[[j, i]] / self.coefs_work[[i, i]];
                for k in (0..self.n).rev() {
                    let update = self.coefs_work[[i, k]] * coef;
                    self.coefs_work[[j, k]] -= update;
                }
                let update = self.free_terms_work[i] * coef;
                self.free_terms_work[j] -= update;
            }

            if self.config.print_interval > 0 && (self.m - i) % self.config.print_interval == 0 {
                log::debug!("Gauss-Jordan backward: row {}/{}", self.m - i, self.m);
            }
        }
        Ok(())
    }

    /// Copy the diagonalized free terms into the solution vector
    pub fn extract(&mut self) {
        for i in 0..self.n {
            self.variables[i] = self.free_terms_work[i];
        }
        self.solved = true;

        if let Some(i) = self.variables.iter().position(|v| !v.is_finite()) {
            log::warn!(
                "Gauss-Jordan solution has a non-finite component at index {} (n = {})",
                i,
                self.n
            );
        }
    }

    /// Run forward, backward and extraction; returns the elapsed wall-clock seconds
    pub fn solve(&mut self) -> Result<f64> {
        self.solve_timed().map(|report| report.elapsed)
    }

    /// Same as [`solve`](Self::solve), returning the full report
    pub fn solve_timed(&mut self) -> Result<SolveReport> {
        let start = Instant::now();
        self.forward()?;
        self.backward()?;
        self.extract();
        let elapsed = start.elapsed().as_secs_f64();

        log::info!(
            "Gauss-Jordan solved {}x{} system in {:.6e} s ({} row swaps)",
            self.m,
            self.n,
            elapsed,
            self.row_swaps
        );

        Ok(SolveReport {
            elapsed,
            pivoting: self.config.pivoting,
            row_swaps: self.row_swaps,
        })
    }

    /// Solution vector, available once `solve` has completed
    pub fn solution(&self) -> Result<&Array1<T>> {
        if !self.solved {
            return Err(GaussJordanError::NotSolved);
        }
        Ok(&self.variables)
    }

    /// Consume the solver and return the solution vector
    pub fn into_solution(self) -> Result<Array1<T>> {
        if !self.solved {
            return Err(GaussJordanError::NotSolved);
        }
        Ok(self.variables)
    }

    /// Checked read of one solution component
    pub fn get(&self, index: usize) -> Result<T> {
        self.variables
            .get(index)
            .copied()
            .ok_or(GaussJordanError::IndexOutOfBounds {
                index,
                len: self.n,
            })
    }

    /// Checked mutable access to one solution component
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        let len = self.n;
        self.variables
            .get_mut(index)
            .ok_or(GaussJordanError::IndexOutOfBounds { index, len })
    }

    /// Forward pivots at or below `n * pivot_tolerance * max|A[i][..]|` are treated as zero.
    /// Row `i` keeps its input scale until it is normalized at step `i`.
    fn pivot_threshold(&self, row: usize) -> T {
        let n = <T as NumCast>::from(self.n).unwrap_or_else(T::one);
        n * self.config.pivot_tolerance * self.row_scale[row]
    }

    fn check_pivot(&self, row: usize, pivot: T, threshold: T) -> Result<()> {
        if self.config.is_strict() && (!pivot.is_finite() || pivot.is_zero_approx(threshold)) {
            log::error!(
                "Gauss-Jordan: pivot {:e} at row {} is below tolerance {:e}",
                pivot.to_f64().unwrap_or(f64::NAN),
                row,
                threshold.to_f64().unwrap_or(f64::NAN)
            );
            return Err(GaussJordanError::SingularMatrix { row });
        }
        Ok(())
    }

    /// Exchange row `k` with the row at or below it holding the largest
    /// magnitude in column `k`. Frozen and working copies are equal here.
    fn swap_in_pivot(&mut self, k: usize) {
        let mut max_val = self.coefs_work[[k, k]].magnitude();
        let mut max_row = k;

        for i in (k + 1)..self.m {
            let val = self.coefs_work[[i, k]].magnitude();
            if val > max_val {
                max_val = val;
                max_row = i;
            }
        }

        if max_row != k {
            for j in 0..self.n {
                self.coefs_work.swap([k, j], [max_row, j]);
                self.coefs.swap([k, j], [max_row, j]);
            }
            self.free_terms_work.swap(k, max_row);
            self.free_terms.swap(k, max_row);
            self.row_scale.swap(k, max_row);
            self.row_swaps += 1;
        }
    }
}

impl<T: RealField> Index<usize> for EliminationSolver<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.variables[index]
    }
}

impl<T: RealField> IndexMut<usize> for EliminationSolver<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.variables[index]
    }
}

/// Solve Ax = b by Gauss-Jordan elimination
///
/// Convenience wrapper using the default (strict, unpivoted) configuration.
pub fn gauss_jordan_solve<T: RealField>(a: &Array2<T>, b: &Array1<T>) -> Result<Array1<T>> {
    let mut solver = EliminationSolver::new(a.ncols(), a.nrows(), a, b)?;
    solver.solve()?;
    solver.into_solution()
}
