//! Rectangle-rule integrator
//!
//! The interval `[a, b]` is split into `q` rectangles of width `h = (b - a) / q`.
//! Each rectangle contributes `f(x) * h`, where `x` is its midpoint or its right
//! endpoint depending on the [`IntegrationMethod`].

use crate::error::{QuadratureError, Result};
use crate::kahan::KahanSum;

/// Scalar function to integrate
pub trait Integrand {
    /// Evaluate the function at `x`
    fn eval(&self, x: f64) -> f64;
}

impl<F> Integrand for F
where
    F: Fn(f64) -> f64,
{
    #[inline]
    fn eval(&self, x: f64) -> f64 {
        self(x)
    }
}

/// Sample point used for each rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntegrationMethod {
    /// f(a + h*i + h/2)
    Midpoint,
    /// f(a + h*(i + 1))
    RightEndpoint,
}

/// Rectangle-rule integrator over a pluggable integrand
#[derive(Debug, Clone)]
pub struct RectangleIntegrator<F: Integrand> {
    func: F,
}

impl<F: Integrand> RectangleIntegrator<F> {
    /// Wrap an integrand
    pub fn new(func: F) -> Self {
        Self { func }
    }

    /// The wrapped integrand
    pub fn integrand(&self) -> &F {
        &self.func
    }

    /// Approximate the integral of the function over `[lower, upper]` with `subdivisions` rectangles
    pub fn integrate(
        &self,
        lower: f64,
        upper: f64,
        subdivisions: usize,
        method: IntegrationMethod,
    ) -> Result<f64> {
        if subdivisions == 0 {
            return Err(QuadratureError::ZeroSubdivisions);
        }
        if !lower.is_finite() || !upper.is_finite() {
            return Err(QuadratureError::InvalidInterval { lower, upper });
        }

        let h = (upper - lower) / subdivisions as f64;
        let result = match method {
            IntegrationMethod::Midpoint => {
                log::debug!("midpoint rectangles, q = {}", subdivisions);
                self.mid_rectangles(lower, h, subdivisions)
            }
            IntegrationMethod::RightEndpoint => {
                log::debug!("right rectangles, q = {}", subdivisions);
                self.right_rectangles(lower, h, subdivisions)
            }
        };
        Ok(result)
    }

    fn mid_rectangles(&self, a: f64, h: f64, q: usize) -> f64 {
        let mut sum = KahanSum::new();
        for i in 0..q {
            sum.add(self.func.eval(a + h * i as f64 + h / 2.0) * h);
        }
        sum.value()
    }

    fn right_rectangles(&self, a: f64, h: f64, q: usize) -> f64 {
        let mut sum = KahanSum::new();
        for i in 0..q {
            sum.add(self.func.eval(a + h * (i + 1) as f64) * h);
        }
        sum.value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    struct Linear {
        slope: f64,
    }

    impl Integrand for Linear {
        fn eval(&self, x: f64) -> f64 {
            self.slope * x
        }
    }

    #[test]
    fn test_midpoint_is_exact_for_linear() {
        let integrator = RectangleIntegrator::new(Linear { slope: 2.0 });
        let area = integrator
            .integrate(0.0, 3.0, 7, IntegrationMethod::Midpoint)
            .unwrap();
        assert_abs_diff_eq!(area, 9.0, epsilon = 1e-12);
    }

    #[test]
    fn test_right_endpoint_overestimates_increasing() {
        let integrator = RectangleIntegrator::new(|x: f64| x);
        let area = integrator
            .integrate(0.0, 1.0, 4, IntegrationMethod::RightEndpoint)
            .unwrap();
        // h * (0.25 + 0.5 + 0.75 + 1.0)
        assert_abs_diff_eq!(area, 0.625, epsilon = 1e-15);
    }

    #[test]
    fn test_constant_function() {
        let integrator = RectangleIntegrator::new(|_x: f64| 3.0);
        for method in [IntegrationMethod::Midpoint, IntegrationMethod::RightEndpoint] {
            let area = integrator.integrate(-1.0, 1.0, 10, method).unwrap();
            assert_abs_diff_eq!(area, 6.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_reversed_interval_negates() {
        let integrator = RectangleIntegrator::new(|x: f64| x * x);
        let forward = integrator
            .integrate(0.0, 2.0, 200, IntegrationMethod::Midpoint)
            .unwrap();
        let backward = integrator
            .integrate(2.0, 0.0, 200, IntegrationMethod::Midpoint)
            .unwrap();
        assert_abs_diff_eq!(forward, -backward, epsilon = 1e-12);
    }

    #[test]
    fn test_invalid_arguments() {
        let integrator = RectangleIntegrator::new(|x: f64| x);
        assert_eq!(
            integrator.integrate(0.0, 1.0, 0, IntegrationMethod::Midpoint),
            Err(QuadratureError::ZeroSubdivisions)
        );
        assert!(matches!(
            integrator.integrate(f64::NAN, 1.0, 10, IntegrationMethod::RightEndpoint),
            Err(QuadratureError::InvalidInterval { .. })
        ));
    }
}
