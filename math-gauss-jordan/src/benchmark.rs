//! Correctness and performance runs for the elimination solver
//!
//! The correctness run solves a fixed 3x3 system with a known answer; the
//! performance run solves a random diagonally biased system of configurable size.

use crate::config::{GaussJordanConfig, Pivoting, Validation};
use crate::direct::EliminationSolver;
use crate::error::Result;
use crate::operator::{DenseOperator, relative_residual};
use ndarray::{Array1, Array2, array};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default size of the random benchmark system
pub const DEFAULT_TASK_SIZE: usize = 100;

/// Default seed of the random benchmark system (the Mersenne Twister default seed)
pub const DEFAULT_SEED: u64 = 5489;

/// Harness configuration, loadable from JSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchConfig {
    /// Size of the random system
    #[serde(default = "default_task_size")]
    pub task_size: usize,
    /// Random seed (None = fresh entropy every run)
    #[serde(default = "default_seed")]
    pub seed: Option<u64>,
    /// Row-exchange strategy for both runs
    #[serde(default)]
    pub pivoting: Pivoting,
    /// Input and pivot checking level for both runs
    #[serde(default)]
    pub validation: Validation,
    /// Maximum absolute error accepted by the correctness run
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,
}

fn default_task_size() -> usize {
    DEFAULT_TASK_SIZE
}

fn default_seed() -> Option<u64> {
    Some(DEFAULT_SEED)
}

fn default_tolerance() -> f64 {
    1e-9
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            task_size: DEFAULT_TASK_SIZE,
            seed: default_seed(),
            pivoting: Pivoting::None,
            validation: Validation::Strict,
            tolerance: default_tolerance(),
        }
    }
}

impl BenchConfig {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> std::result::Result<Self, String> {
        let contents =
            fs::read_to_string(path).map_err(|e| format!("Failed to read config file: {}", e))?;

        let config: BenchConfig =
            serde_json::from_str(&contents).map_err(|e| format!("Failed to parse JSON: {}", e))?;

        Ok(config)
    }

    /// Save configuration to a JSON file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> std::result::Result<(), String> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        fs::write(path, json).map_err(|e| format!("Failed to write config file: {}", e))?;

        Ok(())
    }

    /// Solver configuration derived from the harness settings
    pub fn solver_config(&self) -> GaussJordanConfig<f64> {
        GaussJordanConfig::new()
            .pivoting(self.pivoting)
            .validation(self.validation)
    }
}

/// A system together with its exact solution
#[derive(Debug, Clone)]
pub struct KnownAnswer {
    /// Coefficient matrix
    pub coefficients: Array2<f64>,
    /// Free-term vector
    pub free_terms: Array1<f64>,
    /// Reference solution
    pub expected: Array1<f64>,
}

/// The fixed 3x3 correctness case
pub fn known_answer_system() -> KnownAnswer {
    KnownAnswer {
        coefficients: array![[7.0, 1.0, 0.0], [2.0, -10.0, 4.0], [-10.0, -1.0, -8.0]],
        free_terms: array![-47.0, -74.0, 148.0],
        expected: array![-7.0, 2.0, -10.0],
    }
}

/// Random `n x n` system with a nonzero, dominant diagonal
///
/// Entries are raw 32-bit draws. Diagonal draws of zero are redrawn, then the
/// diagonal is lifted by the row's off-diagonal magnitude so that unpivoted
/// elimination stays pivot-safe.
pub fn random_system<R: Rng>(n: usize, rng: &mut R) -> (Array2<f64>, Array1<f64>) {
    let mut coefficients = Array2::zeros((n, n));
    let mut free_terms = Array1::zeros(n);

    for i in 0..n {
        for j in 0..n {
            let mut value = rng.random::<u32>() as f64;
            if i == j {
                while value == 0.0 {
                    value = rng.random::<u32>() as f64;
                }
            }
            coefficients[[i, j]] = value;
        }
        free_terms[i] = rng.random::<u32>() as f64;
    }

    for i in 0..n {
        let off_diagonal: f64 = (0..n)
            .filter(|&j| j != i)
            .map(|j| coefficients[[i, j]].abs())
            .sum();
        coefficients[[i, i]] += off_diagonal;
    }

    (coefficients, free_terms)
}

/// Outcome of the fixed-system run
#[derive(Debug, Clone)]
pub struct CorrectnessOutcome {
    /// Seconds spent in `solve`
    pub elapsed: f64,
    /// Largest absolute deviation from the reference solution
    pub max_error: f64,
    /// Whether every component is within tolerance
    pub passed: bool,
}

/// Solve the fixed 3x3 system and compare with its reference answer
pub fn correctness_check(
    tolerance: f64,
    config: GaussJordanConfig<f64>,
) -> Result<CorrectnessOutcome> {
    let case = known_answer_system();
    let n = case.expected.len();
    let mut solver =
        EliminationSolver::with_config(n, n, &case.coefficients, &case.free_terms, config)?;
    let elapsed = solver.solve()?;

    let max_error = (0..n)
        .map(|i| (case.expected[i] - solver[i]).abs())
        .fold(0.0_f64, f64::max);
    // NaN never passes
    let passed = (0..n).all(|i| (case.expected[i] - solver[i]).abs() <= tolerance);

    Ok(CorrectnessOutcome {
        elapsed,
        max_error,
        passed,
    })
}

/// Outcome of the random-system run
#[derive(Debug, Clone)]
pub struct PerformanceOutcome {
    /// System size
    pub size: usize,
    /// Seconds spent in `solve`
    pub elapsed: f64,
    /// Row exchanges performed
    pub row_swaps: usize,
    /// Whether every solution component is finite
    pub finite: bool,
    /// ||A x - b|| / ||b|| against the original system
    pub relative_residual: f64,
}

/// Solve a random system of the given size
pub fn performance_run(
    size: usize,
    seed: Option<u64>,
    config: GaussJordanConfig<f64>,
) -> Result<PerformanceOutcome> {
    let mut rng: StdRng = match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => {
            let mut thread_rng = rand::rng();
            StdRng::from_rng(&mut thread_rng)
        }
    };

    let (coefficients, free_terms) = random_system(size, &mut rng);
    let mut solver = EliminationSolver::with_config(size, size, &coefficients, &free_terms, config)?;
    let report = solver.solve_timed()?;
    let x = solver.into_solution()?;

    let finite = x.iter().all(|v| v.is_finite());
    let operator = DenseOperator::new(coefficients);
    let relative_residual = relative_residual(&operator, &x, &free_terms)?;

    Ok(PerformanceOutcome {
        size,
        elapsed: report.elapsed,
        row_swaps: report.row_swaps,
        finite,
        relative_residual,
    })
}
