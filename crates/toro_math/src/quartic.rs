//! Degree-4 polynomials with real coefficients.

use num_complex::Complex64;
use thiserror::Error;

/// Errors that can occur while manipulating a quartic.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum QuarticError {
    #[error("Degenerate quartic: leading coefficient is {0}")]
    DegenerateLeading(f64),
}

/// The polynomial `a·x⁴ + b·x³ + c·x² + d·x + e`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quartic {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub e: f64,
}

impl Quartic {
    /// Create a new quartic from its coefficients, highest power first.
    pub fn new(a: f64, b: f64, c: f64, d: f64, e: f64) -> Self {
        Self { a, b, c, d, e }
    }

    /// Build the monic quartic `(x − r1)(x − r2)(x − r3)(x − r4)`.
    pub fn from_roots(r1: f64, r2: f64, r3: f64, r4: f64) -> Self {
        // Elementary symmetric polynomials of the roots
        let e1 = r1 + r2 + r3 + r4;
        let e2 = r1 * r2 + r1 * r3 + r1 * r4 + r2 * r3 + r2 * r4 + r3 * r4;
        let e3 = r1 * r2 * r3 + r1 * r2 * r4 + r1 * r3 * r4 + r2 * r3 * r4;
        let e4 = r1 * r2 * r3 * r4;
        Self::new(1.0, -e1, e2, -e3, e4)
    }

    /// Divide every coefficient by `a`, yielding an equivalent monic quartic.
    pub fn normalise(&self) -> Result<Quartic, QuarticError> {
        if self.a == 0.0 || !self.a.is_finite() {
            return Err(QuarticError::DegenerateLeading(self.a));
        }
        let a = self.a;
        Ok(Quartic::new(1.0, self.b / a, self.c / a, self.d / a, self.e / a))
    }

    /// Evaluate the polynomial at a complex point using direct powers.
    pub fn compute(&self, x: Complex64) -> Complex64 {
        let x2 = x * x;
        let x3 = x2 * x;
        let x4 = x3 * x;
        x4 * self.a + x3 * self.b + x2 * self.c + x * self.d + self.e
    }

    /// Returns true if the leading coefficient is exactly one.
    pub fn is_monic(&self) -> bool {
        self.a == 1.0
    }
}
