//! Dense univariate polynomials.
//!
//! Coefficients are stored in ascending degree order next to the
//! coefficient context that owns their arithmetic. The stored vector is
//! always normalized: it never ends in a zero coefficient, and the zero
//! polynomial stores nothing. Capacity beyond the length is retained.

use finitas_integers::Integer;
use finitas_rings::{FieldCtx, RingCtx};

use crate::algorithms;
use crate::cutoffs::Cutoffs;

/// A dense univariate polynomial over the coefficient context `C`.
///
/// Size-sensitive operations (`mul`, `sqr`, `mullow`, `divrem`,
/// `compose_mod`, `pow_mod`) select their algorithm through
/// [`Cutoffs::DEFAULT`]; the slice-level entry points in
/// [`crate::algorithms`] accept an explicit [`Cutoffs`].
#[derive(Clone, Debug, PartialEq)]
pub struct Poly<C: RingCtx> {
    ctx: C,
    coeffs: Vec<C::Elem>,
}

impl<C: RingCtx> Poly<C> {
    /// Creates a polynomial from coefficients, trimming trailing zeros.
    #[must_use]
    pub fn new(ctx: C, mut coeffs: Vec<C::Elem>) -> Self {
        while coeffs.last().is_some_and(|&c| ctx.is_zero(c)) {
            coeffs.pop();
        }
        Self { ctx, coeffs }
    }

    /// Creates the zero polynomial.
    #[must_use]
    pub fn zero(ctx: C) -> Self {
        Self {
            ctx,
            coeffs: Vec::new(),
        }
    }

    /// Creates the constant polynomial 1.
    #[must_use]
    pub fn one(ctx: C) -> Self {
        let one = ctx.one();
        Self {
            ctx,
            coeffs: vec![one],
        }
    }

    /// Creates the polynomial x.
    #[must_use]
    pub fn x(ctx: C) -> Self {
        let coeffs = vec![ctx.zero(), ctx.one()];
        Self { ctx, coeffs }
    }

    /// Creates a polynomial from integer images under the canonical map.
    #[must_use]
    pub fn from_ints(ctx: C, values: &[u64]) -> Self {
        let coeffs = values.iter().map(|&v| ctx.from_u64(v)).collect();
        Self::new(ctx, coeffs)
    }

    /// Returns the coefficient context.
    #[must_use]
    pub fn ctx(&self) -> &C {
        &self.ctx
    }

    /// Returns the number of stored coefficients (degree + 1, or 0).
    #[must_use]
    pub fn len(&self) -> usize {
        self.coeffs.len()
    }

    /// Returns true if this is the zero polynomial.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.coeffs.is_empty()
    }

    /// Returns true if this is the zero polynomial.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.coeffs.is_empty()
    }

    /// Returns the degree, with -1 for the zero polynomial.
    #[must_use]
    pub fn degree(&self) -> isize {
        self.coeffs.len() as isize - 1
    }

    /// Returns the coefficient of x^i, zero-extended past the length.
    #[must_use]
    pub fn coeff(&self, i: usize) -> C::Elem {
        self.coeffs.get(i).copied().unwrap_or_else(|| self.ctx.zero())
    }

    /// Returns the stored coefficients.
    #[must_use]
    pub fn coeffs(&self) -> &[C::Elem] {
        &self.coeffs
    }

    /// Returns the leading coefficient, `None` for the zero polynomial.
    #[must_use]
    pub fn leading_coeff(&self) -> Option<C::Elem> {
        self.coeffs.last().copied()
    }

    /// Evaluates the polynomial at a point using Horner's method.
    #[must_use]
    pub fn eval(&self, x: C::Elem) -> C::Elem {
        let mut result = self.ctx.zero();
        for &c in self.coeffs.iter().rev() {
            result = self.ctx.add(self.ctx.mul(result, x), c);
        }
        result
    }

    /// Adds two polynomials.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        debug_assert!(self.ctx == other.ctx, "mixed coefficient contexts");
        let len = self.coeffs.len().max(other.coeffs.len());
        let mut result = Vec::with_capacity(len);
        for i in 0..len {
            result.push(self.ctx.add(self.coeff(i), other.coeff(i)));
        }
        Self::new(self.ctx.clone(), result)
    }

    /// Negates a polynomial.
    #[must_use]
    pub fn neg(&self) -> Self {
        let coeffs = self.coeffs.iter().map(|&c| self.ctx.neg(c)).collect();
        Self {
            ctx: self.ctx.clone(),
            coeffs,
        }
    }

    /// Subtracts two polynomials.
    #[must_use]
    pub fn sub(&self, other: &Self) -> Self {
        debug_assert!(self.ctx == other.ctx, "mixed coefficient contexts");
        let len = self.coeffs.len().max(other.coeffs.len());
        let mut result = Vec::with_capacity(len);
        for i in 0..len {
            result.push(self.ctx.sub(self.coeff(i), other.coeff(i)));
        }
        Self::new(self.ctx.clone(), result)
    }

    /// Multiplies by a scalar.
    #[must_use]
    pub fn scale(&self, s: C::Elem) -> Self {
        let coeffs = self.coeffs.iter().map(|&c| self.ctx.mul(c, s)).collect();
        Self::new(self.ctx.clone(), coeffs)
    }

    /// Multiplies two polynomials.
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        debug_assert!(self.ctx == other.ctx, "mixed coefficient contexts");
        let coeffs = algorithms::mul(&self.coeffs, &other.coeffs, &self.ctx, &Cutoffs::DEFAULT);
        Self::new(self.ctx.clone(), coeffs)
    }

    /// Squares the polynomial.
    #[must_use]
    pub fn sqr(&self) -> Self {
        let coeffs = algorithms::sqr(&self.coeffs, &self.ctx, &Cutoffs::DEFAULT);
        Self::new(self.ctx.clone(), coeffs)
    }

    /// Computes the product truncated to its first `n` coefficients.
    #[must_use]
    pub fn mullow(&self, other: &Self, n: usize) -> Self {
        debug_assert!(self.ctx == other.ctx, "mixed coefficient contexts");
        let coeffs =
            algorithms::mullow(&self.coeffs, &other.coeffs, n, &self.ctx, &Cutoffs::DEFAULT);
        Self::new(self.ctx.clone(), coeffs)
    }
}

impl<C: FieldCtx> Poly<C> {
    /// Divides with remainder, returning `(quotient, remainder)`.
    ///
    /// # Panics
    ///
    /// Panics if `other` is the zero polynomial.
    #[must_use]
    pub fn divrem(&self, other: &Self) -> (Self, Self) {
        debug_assert!(self.ctx == other.ctx, "mixed coefficient contexts");
        let (q, r) =
            algorithms::divrem::divrem(&self.coeffs, &other.coeffs, &self.ctx, &Cutoffs::DEFAULT);
        (
            Self::new(self.ctx.clone(), q),
            Self::new(self.ctx.clone(), r),
        )
    }

    /// Returns the remainder of division by `other`.
    ///
    /// # Panics
    ///
    /// Panics if `other` is the zero polynomial.
    #[must_use]
    pub fn rem(&self, other: &Self) -> Self {
        self.divrem(other).1
    }

    /// Evaluates this polynomial at `g`, reduced modulo `f`.
    ///
    /// # Panics
    ///
    /// Panics if `f` is the zero polynomial.
    #[must_use]
    pub fn compose_mod(&self, g: &Self, f: &Self) -> Self {
        let coeffs = algorithms::compose_mod::compose_mod(
            &self.coeffs,
            &g.coeffs,
            &f.coeffs,
            &self.ctx,
            &Cutoffs::DEFAULT,
        );
        Self::new(self.ctx.clone(), coeffs)
    }

    /// Computes `self^e` modulo `f`.
    ///
    /// # Panics
    ///
    /// Panics if `e` is negative or `f` is the zero polynomial.
    #[must_use]
    pub fn pow_mod(&self, e: &Integer, f: &Self) -> Self {
        let coeffs = algorithms::frobenius::pow_mod(
            &self.coeffs,
            e,
            &f.coeffs,
            &self.ctx,
            &Cutoffs::DEFAULT,
        );
        Self::new(self.ctx.clone(), coeffs)
    }
}

impl<C: RingCtx> std::fmt::Display for Poly<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }

        let mut terms = Vec::new();
        for (i, c) in self.coeffs.iter().enumerate() {
            if self.ctx.is_zero(*c) {
                continue;
            }

            let term = match i {
                0 => format!("{c:?}"),
                1 => format!("{c:?}*x"),
                _ => format!("{c:?}*x^{i}"),
            };
            terms.push(term);
        }

        write!(f, "{}", terms.join(" + "))
    }
}
