//! Escape-time iteration.
//!
//! The orbit of a point z under a function f is the sequence z, f(z),
//! f(f(z)), ...  Classifying a point for a Julia-style image means
//! finding the first step at which the orbit's magnitude reaches an
//! escape bound, if it ever does within the iteration budget.

use num::Complex;
use poly::Function;

/// Iterates f starting at z and reports the first iteration at which
/// the magnitude reaches `bound`.
///
/// `Some(i)` means the bound was reached after i applications of f;
/// the starting point itself is tested first, so a point already at or
/// beyond the bound escapes at iteration 0.  `None` means the orbit
/// stayed below the bound for all n iterations.  A non-finite point
/// (rational functions divide by zero without ceremony) counts as
/// escaped.
pub fn orbit<F: Function + ?Sized>(f: &F, z: Complex<f64>, bound: f64, n: usize) -> Option<usize> {
    let mut z = z;

    for i in 0..n {
        let magnitude = z.norm();
        if !magnitude.is_finite() || magnitude >= bound {
            return Some(i);
        }
        z = f.evaluate(z);
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use poly::{Poly, Rational};

    fn rpoly(coeffs: &[f64]) -> Poly {
        Poly::new(coeffs.iter().map(|&re| Complex::new(re, 0.0)).collect())
    }

    // z^2 + c, the map every quadratic Julia set comes from.
    fn quadratic(c: Complex<f64>) -> Poly {
        Poly::new(vec![c, Complex::new(0.0, 0.0), Complex::new(1.0, 0.0)])
    }

    #[test]
    fn far_point_escapes_immediately() {
        let f = quadratic(Complex::new(-1.0, 0.1));
        assert_eq!(orbit(&f, Complex::new(1000.0, 0.0), 2.0, 500), Some(0));
    }

    #[test]
    fn bound_comparison_is_inclusive() {
        let f = quadratic(Complex::new(0.0, 0.0));
        assert_eq!(orbit(&f, Complex::new(2.0, 0.0), 2.0, 500), Some(0));
    }

    #[test]
    fn periodic_orbit_stays_bounded() {
        // Under z^2 - 1 the origin cycles 0, -1, 0, -1, ...
        let f = quadratic(Complex::new(-1.0, 0.0));
        assert_eq!(orbit(&f, Complex::new(0.0, 0.0), 2.0, 500), None);
    }

    #[test]
    fn growing_orbit_escapes() {
        // z^2 + 1 from 0 runs 0, 1, 2, 5, 26: first at the bound after
        // two applications.
        let f = quadratic(Complex::new(1.0, 0.0));
        assert_eq!(orbit(&f, Complex::new(0.0, 0.0), 2.0, 500), Some(2));
    }

    #[test]
    fn classification_fits_the_budget() {
        let f = quadratic(Complex::new(-1.0, 0.1));
        match orbit(&f, Complex::new(0.0, 0.0), 2.0, 500) {
            Some(i) => assert!(i < 500),
            None => {}
        }
    }

    #[test]
    fn exhausted_budget_means_bounded() {
        let f = quadratic(Complex::new(1.0, 0.0));
        assert_eq!(orbit(&f, Complex::new(0.0, 0.0), 2.0, 0), None);
    }

    #[test]
    fn division_by_zero_counts_as_escaped() {
        // 1/z sends the origin to a non-finite value on the first
        // application.
        let f = Rational::new(rpoly(&[1.0]), rpoly(&[0.0, 1.0]));
        assert_eq!(orbit(&f, Complex::new(0.0, 0.0), 2.0, 500), Some(1));
    }
}
