/// Tolerance used when comparing curve lengths and table entries.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Tolerance {
    /// Linear tolerance for distance and fraction comparisons (in model units)
    pub linear: f64,
}

impl Tolerance {
    pub const DEFAULT_LINEAR: f64 = 1e-7;

    pub fn default_precision() -> Self {
        Self {
            linear: Self::DEFAULT_LINEAR,
        }
    }

    pub fn loose() -> Self {
        Self { linear: 1e-5 }
    }

    pub fn tight() -> Self {
        Self { linear: 1e-10 }
    }

    /// Check if two values are equal within linear tolerance
    pub fn linear_eq(self, a: f64, b: f64) -> bool {
        (a - b).abs() <= self.linear
    }

    /// Check if a value is zero within linear tolerance
    pub fn is_zero(self, v: f64) -> bool {
        v.abs() <= self.linear
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::default_precision()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_eq() {
        let tol = Tolerance::loose();
        assert!(tol.linear_eq(1.0, 1.0 + 5e-6));
        assert!(!tol.linear_eq(1.0, 1.0 + 5e-5));
    }

    #[test]
    fn test_is_zero() {
        assert!(Tolerance::default().is_zero(5e-8));
        assert!(!Tolerance::tight().is_zero(5e-8));
    }
}
