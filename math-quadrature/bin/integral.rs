use clap::{Parser, ValueEnum};
use math_audio_quadrature::{IntegrationMethod, RectangleIntegrator};
use std::process;
use std::time::Instant;

/// Integral of 4 / sqrt(4 - x^2) over [0, 1], i.e. 2*pi/3
const REFERENCE: f64 = 2.09439510239319;

const DEFAULT_RECTANGLES: usize = 1_000_000_000;

#[derive(Parser, Debug)]
#[command(
    name = "integral",
    about = "Integrate 4/sqrt(4 - x^2) over [0, 1] with the rectangle rule"
)]
struct Cli {
    /// Number of rectangles
    iterations: Option<usize>,

    /// Sample point of each rectangle
    #[arg(long, value_enum, default_value_t = MethodChoice::Right)]
    method: MethodChoice,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum MethodChoice {
    Mid,
    Right,
}

impl From<MethodChoice> for IntegrationMethod {
    fn from(choice: MethodChoice) -> Self {
        match choice {
            MethodChoice::Mid => IntegrationMethod::Midpoint,
            MethodChoice::Right => IntegrationMethod::RightEndpoint,
        }
    }
}

fn integrand(x: f64) -> f64 {
    4.0 / (4.0 - x * x).sqrt()
}

fn main() {
    env_logger::init();
    let args = Cli::parse();

    println!("Integral solver\n");
    let rects = match args.iterations {
        Some(q) => q,
        None => {
            eprintln!("Usage: integral ITERATIONS [default is {DEFAULT_RECTANGLES}].");
            DEFAULT_RECTANGLES
        }
    };

    let solver = RectangleIntegrator::new(integrand);
    let method: IntegrationMethod = args.method.into();
    match method {
        IntegrationMethod::Midpoint => println!("Mid rectangles"),
        IntegrationMethod::RightEndpoint => println!("Right rectangles"),
    }

    let t_start = Instant::now();
    let result = match solver.integrate(0.0, 1.0, rects, method) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(2);
        }
    };
    let elapsed = t_start.elapsed().as_secs_f64();

    println!("Elapsed time: {}", elapsed);
    println!("Reference answer: {}", REFERENCE);
    println!("Answer: {}", result);
    println!("Delta: {}", (REFERENCE - result).abs());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_matches_closed_form() {
        assert!((REFERENCE - 2.0 * std::f64::consts::PI / 3.0).abs() < 1e-13);
    }

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::parse_from(["integral", "1000", "--method", "mid"]);
        assert_eq!(cli.iterations, Some(1000));
        assert!(matches!(cli.method, MethodChoice::Mid));

        let cli = Cli::parse_from(["integral"]);
        assert_eq!(cli.iterations, None);
        assert!(matches!(cli.method, MethodChoice::Right));
    }
}
