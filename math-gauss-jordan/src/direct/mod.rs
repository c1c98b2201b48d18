//! Direct solvers for linear systems
//!
//! This module provides direct (non-iterative) solvers:
//! - [`EliminationSolver`]: Gauss-Jordan elimination with a frozen pivot snapshot,
//!   optionally with partial pivoting
//! - [`gauss_jordan_solve`]: one-shot convenience wrapper

mod gauss_jordan;

pub use gauss_jordan::{EliminationSolver, SolveReport, gauss_jordan_solve};
