// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Complex polynomials and rational functions.
//!
//! A polynomial is stored as its coefficient sequence, constant term
//! first, and is an immutable value: the ring operations all allocate
//! a fresh result.  The `Function` trait is the one capability the
//! iteration engine needs, so the renderer works identically against a
//! polynomial, a rational function, or a bare constant.

use num::{Complex, Zero};
use std::fmt;

/// A Function can be evaluated at a point on the complex plane.
pub trait Function {
    /// Computes the value of the function at z.
    fn evaluate(&self, z: Complex<f64>) -> Complex<f64>;
}

/// Raises z to a nonnegative integer power.  A negative exponent is a
/// caller bug and panics.
fn pow(z: Complex<f64>, i: i32) -> Complex<f64> {
    if i < 0 {
        panic!("negative power");
    }

    let mut res = Complex::new(1.0, 0.0);
    for _ in 0..i {
        res *= z;
    }
    res
}

/// A polynomial with complex coefficients.  Index i holds the
/// coefficient of the degree-i term.
#[derive(Clone, Debug)]
pub struct Poly {
    coeffs: Vec<Complex<f64>>,
}

impl Poly {
    /// Builds a polynomial from its coefficients, constant term first.
    /// The result is normalised.
    pub fn new(coeffs: Vec<Complex<f64>>) -> Poly {
        Poly { coeffs }.normalise()
    }

    // Coefficient i, with anything past the end of the sequence read
    // as zero.
    fn coeff(&self, i: usize) -> Complex<f64> {
        match self.coeffs.get(i) {
            Some(c) => *c,
            None => Complex::zero(),
        }
    }

    /// The index of the highest nonzero coefficient.  The degree of
    /// the zero polynomial (or of an empty sequence) is 0.
    pub fn degree(&self) -> usize {
        let mut deg = 0;
        for (i, c) in self.coeffs.iter().enumerate() {
            if !c.is_zero() {
                deg = i;
            }
        }
        deg
    }

    /// Culls excess zero coefficients from the end of the sequence.
    /// The normalised form of zero is `[0]`, not `[]`.
    pub fn normalise(&self) -> Poly {
        if self.coeffs.is_empty() {
            return Poly {
                coeffs: vec![Complex::zero()],
            };
        }

        Poly {
            coeffs: self.coeffs[..self.degree() + 1].to_vec(),
        }
    }

    /// True iff the polynomial has degree 0.
    pub fn is_constant(&self) -> bool {
        self.degree() == 0
    }

    /// Pointwise sum, padding the shorter operand with zeroes.
    pub fn add(&self, g: &Poly) -> Poly {
        let len = self.coeffs.len().max(g.coeffs.len());
        Poly {
            coeffs: (0..len).map(|i| self.coeff(i) + g.coeff(i)).collect(),
        }
    }

    /// The additive inverse.
    pub fn negative(&self) -> Poly {
        Poly {
            coeffs: self.coeffs.iter().map(|c| -c).collect(),
        }
    }

    /// Pointwise difference.
    pub fn subtract(&self, g: &Poly) -> Poly {
        self.add(&g.negative())
    }

    /// The product, as a convolution of the coefficient sequences.
    pub fn multiply(&self, g: &Poly) -> Poly {
        let deg = self.degree() + g.degree();
        let mut coeffs = vec![Complex::zero(); deg + 1];

        for i in 0..=deg {
            for j in 0..=i {
                coeffs[i] += self.coeff(j) * g.coeff(i - j);
            }
        }

        Poly { coeffs }
    }

    /// The symbolic derivative.  The derivative of any constant is the
    /// zero polynomial.
    pub fn derivative(&self) -> Poly {
        if self.is_constant() {
            return Poly {
                coeffs: vec![Complex::zero()],
            };
        }

        Poly {
            coeffs: (0..self.degree())
                .map(|i| Complex::new((i + 1) as f64, 0.0) * self.coeff(i + 1))
                .collect(),
        }
    }
}

/// Two polynomials are equal iff their normalised coefficient
/// sequences are identical.
impl PartialEq for Poly {
    fn eq(&self, g: &Poly) -> bool {
        self.normalise().coeffs == g.normalise().coeffs
    }
}

impl Function for Poly {
    fn evaluate(&self, z: Complex<f64>) -> Complex<f64> {
        let mut res = Complex::zero();
        for (i, c) in self.coeffs.iter().enumerate() {
            res += c * pow(z, i as i32);
        }
        res
    }
}

// Real coefficients print without their zero imaginary part; properly
// complex ones are parenthesised so the terms stay readable.
fn fmt_coeff(c: &Complex<f64>) -> String {
    if c.im == 0.0 {
        format!("{}", c.re)
    } else {
        format!("({})", c)
    }
}

/// Renders as `c0 + c1t + c2t^2 + …`, skipping zero terms.  The
/// constant term is always shown, so the zero polynomial prints as
/// `0`.
impl fmt::Display for Poly {
    fn fmt(&self, w: &mut fmt::Formatter) -> fmt::Result {
        let f = self.normalise();
        write!(w, "{}", fmt_coeff(&f.coeffs[0]))?;

        for (i, c) in f.coeffs.iter().enumerate().skip(1) {
            if c.is_zero() {
                continue;
            }
            if i == 1 {
                write!(w, " + {}t", fmt_coeff(c))?;
            } else {
                write!(w, " + {}t^{}", fmt_coeff(c), i)?;
            }
        }

        Ok(())
    }
}

/// A rational function: the quotient of two polynomials.
///
/// Nothing stops the denominator from vanishing at a query point; the
/// division then yields an infinite or NaN value, which the orbit
/// iterator classifies as escaped.
#[derive(Clone, Debug, PartialEq)]
pub struct Rational {
    numerator: Poly,
    denominator: Poly,
}

impl Rational {
    /// Builds the quotient numerator / denominator.
    pub fn new(numerator: Poly, denominator: Poly) -> Rational {
        Rational {
            numerator,
            denominator,
        }
    }
}

impl Function for Rational {
    fn evaluate(&self, z: Complex<f64>) -> Complex<f64> {
        self.numerator.evaluate(z) / self.denominator.evaluate(z)
    }
}

/// A constant is the simplest function of all.
impl Function for Complex<f64> {
    fn evaluate(&self, _z: Complex<f64>) -> Complex<f64> {
        *self
    }
}
