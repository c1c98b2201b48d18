//! Dense Gauss-Jordan elimination for square linear systems
//!
//! This crate reduces an augmented system to normalized diagonal form with one
//! forward and one backward elimination pass and reads the solution off the
//! transformed right-hand side.
//!
//! # Features
//!
//! - **Direct Solver**: [`EliminationSolver`] with a frozen pivot snapshot refreshed
//!   after every forward row and held fixed during the backward pass
//! - **Pivoting**: optional partial pivoting; the unpivoted schedule is the default
//! - **Validation**: strict mode reports `DimensionMismatch` / `SingularMatrix`,
//!   legacy mode lets NaN/inf propagate
//! - **Verification**: dense operator and residual checks
//! - **Benchmark Harness**: fixed known-answer run and random performance run
//!
//! # Example
//!
//! ```
//! use math_audio_gauss_jordan::EliminationSolver;
//! use ndarray::array;
//!
//! let a = array![[7.0_f64, 1.0, 0.0], [2.0, -10.0, 4.0], [-10.0, -1.0, -8.0]];
//! let b = array![-47.0, -74.0, 148.0];
//!
//! let mut solver = EliminationSolver::new(3, 3, &a, &b)?;
//! let elapsed = solver.solve()?;
//! assert!(elapsed >= 0.0);
//! assert!((solver[0] + 7.0).abs() < 1e-9);
//! # Ok::<(), math_audio_gauss_jordan::GaussJordanError>(())
//! ```

pub mod benchmark;
pub mod config;
pub mod direct;
pub mod error;
pub mod operator;
pub mod traits;

// Re-export main types
pub use config::{GaussJordanConfig, Pivoting, Validation};
pub use error::{GaussJordanError, Result};
pub use traits::{LinearOperator, RealField};

// Re-export the solver
pub use direct::{EliminationSolver, SolveReport, gauss_jordan_solve};

// Re-export verification helpers
pub use operator::{DenseOperator, relative_residual, residual_norm, vector_norm};
