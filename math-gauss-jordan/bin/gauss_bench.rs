use clap::{Parser, ValueEnum};
use math_audio_gauss_jordan::benchmark::{BenchConfig, correctness_check, performance_run};
use math_audio_gauss_jordan::{Pivoting, Validation};
use std::process;

#[derive(Parser, Debug)]
#[command(
    name = "gauss_bench",
    about = "Check and time the Gauss-Jordan elimination solver"
)]
struct Cli {
    /// Size of the random benchmark system
    task_size: Option<usize>,

    /// Optional random seed for reproducibility
    #[arg(long)]
    seed: Option<u64>,

    /// Row-exchange strategy
    #[arg(long, value_enum)]
    pivoting: Option<PivotingChoice>,

    /// Let zero pivots propagate NaN/inf instead of failing
    #[arg(long)]
    legacy: bool,

    /// Maximum absolute error accepted by the small correctness test
    #[arg(long)]
    tolerance: Option<f64>,

    /// JSON file with harness settings (command-line values take precedence)
    #[arg(long)]
    config: Option<String>,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum PivotingChoice {
    None,
    Partial,
}

impl From<PivotingChoice> for Pivoting {
    fn from(choice: PivotingChoice) -> Self {
        match choice {
            PivotingChoice::None => Pivoting::None,
            PivotingChoice::Partial => Pivoting::Partial,
        }
    }
}

fn main() {
    env_logger::init();
    let args = Cli::parse();

    let mut settings = match &args.config {
        Some(path) => BenchConfig::from_file(path).unwrap_or_else(|err| {
            eprintln!("Error: {err}");
            process::exit(2);
        }),
        None => BenchConfig::default(),
    };

    match args.task_size {
        Some(size) => {
            settings.task_size = size;
            println!("Task size set to: {}", size);
        }
        None => {
            println!("Using default task size: {}", settings.task_size);
        }
    }
    if settings.task_size == 0 {
        eprintln!("Error: task size must be greater than zero.");
        process::exit(2);
    }
    if args.seed.is_some() {
        settings.seed = args.seed;
    }
    if let Some(choice) = args.pivoting {
        settings.pivoting = choice.into();
    }
    if args.legacy {
        settings.validation = Validation::Legacy;
    }
    if let Some(tol) = args.tolerance {
        settings.tolerance = tol;
    }

    let solver_config = settings.solver_config();

    let correctness = match correctness_check(settings.tolerance, solver_config.clone()) {
        Ok(outcome) => outcome,
        Err(e) => {
            eprintln!("Error: small test failed to solve: {}", e);
            process::exit(1);
        }
    };
    println!(
        "Elapsed sequential Gaussian time: {} seconds",
        correctness.elapsed
    );
    if correctness.passed {
        println!("Small test passed.");
    } else {
        println!("Small test failed. Calculations are incorrect.");
    }

    let performance = match performance_run(settings.task_size, settings.seed, solver_config) {
        Ok(outcome) => outcome,
        Err(e) => {
            eprintln!("Error: performance run failed: {}", e);
            process::exit(1);
        }
    };
    println!(
        "Elapsed sequential Gaussian time: {} seconds",
        performance.elapsed
    );
    log::info!(
        "performance run: n = {}, row swaps = {}, relative residual = {:.3e}, finite = {}",
        performance.size,
        performance.row_swaps,
        performance.relative_residual,
        performance.finite
    );

    if !correctness.passed {
        process::exit(1);
    }
}
