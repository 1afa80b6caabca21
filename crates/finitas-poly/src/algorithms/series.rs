//! Truncated power-series arithmetic.
//!
//! Inversion and exponentials by Newton iteration with precision
//! doubling. These are the workhorses behind fast division and the fast
//! power-sums conversion: rev(P) = exp(−Σ pₖ xᵏ / k).
//!
//! All functions return exactly the requested number of coefficients,
//! zero-padded; tails are not normalized.

use finitas_rings::{FieldCtx, RingCtx};

use super::mullow;
use crate::cutoffs::Cutoffs;

/// Formal derivative.
pub fn derivative<C: RingCtx>(a: &[C::Elem], ctx: &C) -> Vec<C::Elem> {
    if a.len() <= 1 {
        return Vec::new();
    }
    a.iter()
        .enumerate()
        .skip(1)
        .map(|(i, &c)| ctx.mul(c, ctx.from_u64(i as u64)))
        .collect()
}

/// Formal integral with zero constant term.
///
/// # Panics
///
/// Panics if the characteristic divides one of the coefficient indices
/// (`k` must be invertible for every written coefficient of x^k).
pub fn integral<C: FieldCtx>(a: &[C::Elem], ctx: &C) -> Vec<C::Elem> {
    let mut result = Vec::with_capacity(a.len() + 1);
    result.push(ctx.zero());
    for (i, &c) in a.iter().enumerate() {
        let k = ctx
            .inv(ctx.from_u64(i as u64 + 1))
            .expect("division by non-invertible element");
        result.push(ctx.mul(c, k));
    }
    result
}

/// Multiplicative inverse of a power series to `n` terms.
///
/// Newton iteration: g ← g·(2 − a·g), doubling the correct precision.
///
/// # Panics
///
/// Panics if the constant term of `a` is missing or not invertible.
pub fn inv_series<C: FieldCtx>(
    a: &[C::Elem],
    n: usize,
    ctx: &C,
    cutoffs: &Cutoffs,
) -> Vec<C::Elem> {
    let a0 = a.first().copied().unwrap_or_else(|| ctx.zero());
    let g0 = ctx
        .inv(a0)
        .expect("series constant term must be invertible");
    if n == 0 {
        return Vec::new();
    }

    let two = ctx.add(ctx.one(), ctx.one());
    let mut g = vec![g0];
    let mut prec = 1;
    while prec < n {
        prec = (2 * prec).min(n);
        let ag = mullow(&a[..a.len().min(prec)], &g, prec, ctx, cutoffs);
        let mut t: Vec<C::Elem> = ag.iter().map(|&c| ctx.neg(c)).collect();
        t[0] = ctx.sub(two, ag[0]);
        g = mullow(&g, &t, prec, ctx, cutoffs);
    }
    g
}

/// Logarithm of a power series with constant term 1, to `n` terms.
///
/// log a = ∫ a′·a⁻¹.
pub fn log_series<C: FieldCtx>(
    a: &[C::Elem],
    n: usize,
    ctx: &C,
    cutoffs: &Cutoffs,
) -> Vec<C::Elem> {
    debug_assert!(
        a.first().is_some_and(|&c| ctx.is_one(c)),
        "log series requires constant term 1"
    );
    if n <= 1 {
        return vec![ctx.zero(); n];
    }

    let d = derivative(a, ctx);
    let ai = inv_series(a, n - 1, ctx, cutoffs);
    let t = mullow(&d, &ai, n - 1, ctx, cutoffs);
    integral(&t, ctx)
}

/// Exponential of a power series with constant term 0, to `n` terms.
///
/// Newton iteration: g ← g·(1 + a − log g), doubling the correct
/// precision.
///
/// # Panics
///
/// Panics if the characteristic divides one of the coefficient indices
/// below `n` (inherited from the logarithm's integral).
pub fn exp_series<C: FieldCtx>(
    a: &[C::Elem],
    n: usize,
    ctx: &C,
    cutoffs: &Cutoffs,
) -> Vec<C::Elem> {
    debug_assert!(
        a.first().map_or(true, |&c| ctx.is_zero(c)),
        "exp series requires constant term 0"
    );
    if n == 0 {
        return Vec::new();
    }

    let mut g = vec![ctx.one()];
    let mut prec = 1;
    while prec < n {
        prec = (2 * prec).min(n);
        let lg = log_series(&g, prec, ctx, cutoffs);
        let mut h: Vec<C::Elem> = (0..prec)
            .map(|i| {
                let ai = a.get(i).copied().unwrap_or_else(|| ctx.zero());
                ctx.sub(ai, lg[i])
            })
            .collect();
        h[0] = ctx.add(h[0], ctx.one());
        g = mullow(&g, &h, prec, ctx, cutoffs);
    }
    g
}
