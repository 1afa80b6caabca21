//! Slice-level polynomial algorithms.
//!
//! Every operation with asymptotically different implementations is
//! dispatched here through a [`Cutoffs`] value; the bodies live in the
//! submodules. Slices hold ascending coefficients and are assumed
//! normalized (no trailing zero) unless a function says otherwise.

pub mod classical;
pub mod compose_mod;
pub mod divrem;
pub mod frobenius;
pub mod karatsuba;
pub mod series;

use finitas_rings::RingCtx;

use crate::cutoffs::{Cutoffs, MulStrategy};

/// Multiplies two coefficient slices, selecting the body by length.
///
/// The product of two normalized inputs over a field is normalized.
pub fn mul<C: RingCtx>(a: &[C::Elem], b: &[C::Elem], ctx: &C, cutoffs: &Cutoffs) -> Vec<C::Elem> {
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }
    match cutoffs.mul_strategy(a.len().max(b.len())) {
        MulStrategy::Classical => classical::mul_classical(a, b, ctx),
        MulStrategy::Karatsuba => karatsuba::karatsuba_mul(a, b, ctx, cutoffs),
    }
}

/// Squares a coefficient slice, selecting the body by length.
pub fn sqr<C: RingCtx>(a: &[C::Elem], ctx: &C, cutoffs: &Cutoffs) -> Vec<C::Elem> {
    if a.is_empty() {
        return Vec::new();
    }
    match cutoffs.sqr_strategy(a.len()) {
        MulStrategy::Classical => classical::sqr_classical(a, ctx),
        MulStrategy::Karatsuba => karatsuba::karatsuba_mul(a, a, ctx, cutoffs),
    }
}

/// Multiplies two slices keeping only the first `n` coefficients.
///
/// Always returns exactly `n` coefficients, zero-padded when the product
/// is shorter; the tail is not normalized.
pub fn mullow<C: RingCtx>(
    a: &[C::Elem],
    b: &[C::Elem],
    n: usize,
    ctx: &C,
    cutoffs: &Cutoffs,
) -> Vec<C::Elem> {
    if a.is_empty() || b.is_empty() {
        return vec![ctx.zero(); n];
    }
    match cutoffs.mullow_strategy(a.len().max(b.len())) {
        MulStrategy::Classical => classical::mullow_classical(a, b, n, ctx),
        MulStrategy::Karatsuba => {
            let mut full = karatsuba::karatsuba_mul(a, b, ctx, cutoffs);
            full.truncate(n);
            full.resize(n, ctx.zero());
            full
        }
    }
}

/// Reverses a coefficient slice (x ↦ 1/x up to a power of x).
pub(crate) fn reversed<T: Copy>(a: &[T]) -> Vec<T> {
    let mut v = a.to_vec();
    v.reverse();
    v
}

/// Trims trailing zero coefficients.
pub(crate) fn trim_zeros<C: RingCtx>(v: &mut Vec<C::Elem>, ctx: &C) {
    while v.last().is_some_and(|&c| ctx.is_zero(c)) {
        v.pop();
    }
}
