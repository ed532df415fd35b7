//! Durand–Kerner root finding for quartics.
//!
//! All four (generally complex) roots are refined simultaneously by
//! fixed-point iteration, which copes with the badly scaled coefficient sets
//! produced by ray/torus algebra better than the closed-form Ferrari formulas.

use crate::{Quartic, QuarticError};
use num_complex::Complex64;
use thiserror::Error;

/// Tolerance for convergence and for classifying a root as real.
pub const EPSILON: f64 = 0.001;

/// Iteration cap; the method has no guaranteed bound for pathological inputs.
pub const MAX_ITERATIONS: usize = 200;

/// Errors that can occur while solving a quartic.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum SolverError {
    #[error(transparent)]
    Degenerate(#[from] QuarticError),

    #[error("Root solver did not converge after {iterations} iterations")]
    NoConvergence { iterations: usize },
}

pub type SolverResult<T> = Result<T, SolverError>;

/// Current estimates for the four roots.
#[derive(Debug, Clone, Copy)]
struct ComplexQuadruple {
    p: Complex64,
    q: Complex64,
    r: Complex64,
    s: Complex64,
}

impl ComplexQuadruple {
    /// Seed with the powers of a non-real point so no two estimates coincide.
    fn seed() -> Self {
        let q0 = Complex64::new(0.4, 0.9);
        Self {
            p: Complex64::new(1.0, 0.0),
            q: q0,
            r: q0 * q0,
            s: q0 * q0 * q0,
        }
    }

    /// One Durand–Kerner pass. Each estimate uses the already updated values
    /// of the estimates before it.
    fn step(&self, poly: &Quartic) -> Self {
        let Self { p, q, r, s } = *self;

        let p_next = p - poly.compute(p) / ((p - q) * (p - r) * (p - s));
        let q_next = q - poly.compute(q) / ((q - p_next) * (q - r) * (q - s));
        let r_next = r - poly.compute(r) / ((r - p_next) * (r - q_next) * (r - s));
        let s_next = s - poly.compute(s) / ((s - p_next) * (s - q_next) * (s - r_next));

        Self {
            p: p_next,
            q: q_next,
            r: r_next,
            s: s_next,
        }
    }

    /// Every estimate moved less than EPSILON since `prev`.
    fn settled(&self, prev: &Self) -> bool {
        let limit = EPSILON * EPSILON;
        (self.p - prev.p).norm_sqr() < limit
            && (self.q - prev.q).norm_sqr() < limit
            && (self.r - prev.r).norm_sqr() < limit
            && (self.s - prev.s).norm_sqr() < limit
    }

    fn is_finite(&self) -> bool {
        self.as_array().iter().all(|z| z.is_finite())
    }

    fn as_array(&self) -> [Complex64; 4] {
        [self.p, self.q, self.r, self.s]
    }
}

/// Find all four complex roots of a quartic.
pub fn find_roots(quartic: &Quartic) -> SolverResult<[Complex64; 4]> {
    let monic = quartic.normalise()?;
    let mut roots = ComplexQuadruple::seed();

    for iteration in 1..=MAX_ITERATIONS {
        let next = roots.step(&monic);
        if !next.is_finite() {
            return Err(SolverError::NoConvergence {
                iterations: iteration,
            });
        }
        if next.settled(&roots) {
            return Ok(next.as_array());
        }
        roots = next;
    }

    Err(SolverError::NoConvergence {
        iterations: MAX_ITERATIONS,
    })
}

/// Find the real roots of a quartic.
///
/// Roots whose imaginary part is below EPSILON count as real. Order is not
/// significant and repeated roots are not merged.
pub fn real_roots(quartic: &Quartic) -> SolverResult<Vec<f64>> {
    let roots = find_roots(quartic)?;
    Ok(roots
        .iter()
        .filter(|z| z.im.abs() < EPSILON)
        .map(|z| z.re)
        .collect())
}
