//! Kahan-compensated summation

/// Running sum carrying a compensation term for lost low-order bits
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct KahanSum {
    sum: f64,
    correction: f64,
}

impl KahanSum {
    /// Empty sum
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one term
    #[inline]
    pub fn add(&mut self, value: f64) {
        let y = value - self.correction;
        let t = self.sum + y;
        self.correction = (t - self.sum) - y;
        self.sum = t;
    }

    /// Current compensated total
    #[inline]
    pub fn value(&self) -> f64 {
        self.sum
    }
}

impl Extend<f64> for KahanSum {
    fn extend<I: IntoIterator<Item = f64>>(&mut self, iter: I) {
        for value in iter {
            self.add(value);
        }
    }
}

impl FromIterator<f64> for KahanSum {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        let mut sum = Self::new();
        sum.extend(iter);
        sum
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_sum() {
        assert_eq!(KahanSum::new().value(), 0.0);
    }

    #[test]
    fn test_recovers_small_terms() {
        let mut naive = 1.0_f64;
        let mut compensated = KahanSum::new();
        compensated.add(1.0);
        for _ in 0..10_000 {
            naive += 1e-16;
            compensated.add(1e-16);
        }

        assert_eq!(naive, 1.0);
        assert!((compensated.value() - (1.0 + 1e-12)).abs() < 1e-15);
    }

    #[test]
    fn test_collect() {
        let total: KahanSum = (0..10_000).map(|_| 0.1).collect();
        assert!((total.value() - 1000.0).abs() < 1e-10);
    }
}
