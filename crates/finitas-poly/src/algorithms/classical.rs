//! Schoolbook multiplication, squaring and truncated products.

use finitas_rings::RingCtx;

/// Schoolbook multiplication: O(n·m).
pub fn mul_classical<C: RingCtx>(a: &[C::Elem], b: &[C::Elem], ctx: &C) -> Vec<C::Elem> {
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }

    let mut result = vec![ctx.zero(); a.len() + b.len() - 1];
    for (i, &ai) in a.iter().enumerate() {
        if ctx.is_zero(ai) {
            continue;
        }
        for (j, &bj) in b.iter().enumerate() {
            result[i + j] = ctx.add(result[i + j], ctx.mul(ai, bj));
        }
    }
    result
}

/// Schoolbook squaring.
///
/// The symmetric terms a_i·a_j and a_j·a_i are computed once and added
/// twice, halving the coefficient multiplications of `mul_classical`.
pub fn sqr_classical<C: RingCtx>(a: &[C::Elem], ctx: &C) -> Vec<C::Elem> {
    if a.is_empty() {
        return Vec::new();
    }

    let n = a.len();
    let mut result = vec![ctx.zero(); 2 * n - 1];
    for (i, &ai) in a.iter().enumerate() {
        if ctx.is_zero(ai) {
            continue;
        }
        result[2 * i] = ctx.add(result[2 * i], ctx.mul(ai, ai));
        for (j, &aj) in a.iter().enumerate().skip(i + 1) {
            let t = ctx.mul(ai, aj);
            result[i + j] = ctx.add(result[i + j], ctx.add(t, t));
        }
    }
    result
}

/// Schoolbook product truncated to `n` coefficients.
///
/// Always returns exactly `n` coefficients, zero-padded when needed.
pub fn mullow_classical<C: RingCtx>(
    a: &[C::Elem],
    b: &[C::Elem],
    n: usize,
    ctx: &C,
) -> Vec<C::Elem> {
    let mut result = vec![ctx.zero(); n];
    for (i, &ai) in a.iter().enumerate().take(n) {
        if ctx.is_zero(ai) {
            continue;
        }
        for (j, &bj) in b.iter().enumerate().take(n - i) {
            result[i + j] = ctx.add(result[i + j], ctx.mul(ai, bj));
        }
    }
    result
}
