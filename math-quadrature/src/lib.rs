//! Rectangle-rule numerical integration
//!
//! Integrates a pluggable scalar function over an interval with the midpoint or
//! right-endpoint rectangle rule, accumulating the terms with Kahan-compensated
//! summation.
//!
//! # Example
//!
//! ```
//! use math_audio_quadrature::{IntegrationMethod, RectangleIntegrator};
//!
//! let integrator = RectangleIntegrator::new(|x: f64| x * x);
//! let area = integrator.integrate(0.0, 1.0, 1000, IntegrationMethod::Midpoint)?;
//! assert!((area - 1.0 / 3.0).abs() < 1e-6);
//! # Ok::<(), math_audio_quadrature::QuadratureError>(())
//! ```

pub mod error;
pub mod integrator;
pub mod kahan;

pub use error::{QuadratureError, Result};
pub use integrator::{Integrand, IntegrationMethod, RectangleIntegrator};
pub use kahan::KahanSum;
