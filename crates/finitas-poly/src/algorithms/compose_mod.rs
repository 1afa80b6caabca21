//! Modular composition: h(g) mod f.
//!
//! Horner's rule costs one modular multiplication per coefficient of h;
//! Brent–Kung trades that for ⌈√lenh⌉ precomputed powers of g and block
//! recombination, kept here in vector-of-polynomials form. Both bodies
//! are written once against a pluggable reduction step, so the variant
//! with a precomputed inverse of the reversed modulus shares them.

use finitas_rings::{FieldCtx, RingCtx};

use super::series::inv_series;
use super::{divrem, mul, mullow, reversed, trim_zeros};
use crate::cutoffs::{ComposeModStrategy, Cutoffs};

/// Composes `h` with `g` modulo `f`, selecting the body by `h.len()`.
///
/// # Panics
///
/// Panics if `f` is empty.
pub fn compose_mod<C: FieldCtx>(
    h: &[C::Elem],
    g: &[C::Elem],
    f: &[C::Elem],
    ctx: &C,
    cutoffs: &Cutoffs,
) -> Vec<C::Elem> {
    match cutoffs.compose_mod_strategy(h.len()) {
        ComposeModStrategy::Horner => compose_mod_horner(h, g, f, ctx, cutoffs),
        ComposeModStrategy::BrentKung => compose_mod_brent_kung(h, g, f, ctx, cutoffs),
    }
}

/// Composes `h` with `g` modulo `f` by Horner's rule.
///
/// # Panics
///
/// Panics if `f` is empty.
pub fn compose_mod_horner<C: FieldCtx>(
    h: &[C::Elem],
    g: &[C::Elem],
    f: &[C::Elem],
    ctx: &C,
    cutoffs: &Cutoffs,
) -> Vec<C::Elem> {
    assert!(!f.is_empty(), "division by zero polynomial");
    if f.len() == 1 || h.is_empty() {
        return Vec::new();
    }
    let gr = reduce_operand(g, f, ctx, cutoffs);
    horner_with(h, &gr, ctx, cutoffs, &|t| {
        if t.len() >= f.len() {
            divrem::rem(&t, f, ctx, cutoffs)
        } else {
            t
        }
    })
}

/// Composes `h` with `g` modulo `f` by Brent–Kung baby-step/giant-step.
///
/// # Panics
///
/// Panics if `f` is empty.
pub fn compose_mod_brent_kung<C: FieldCtx>(
    h: &[C::Elem],
    g: &[C::Elem],
    f: &[C::Elem],
    ctx: &C,
    cutoffs: &Cutoffs,
) -> Vec<C::Elem> {
    assert!(!f.is_empty(), "division by zero polynomial");
    if f.len() == 1 || h.is_empty() {
        return Vec::new();
    }
    let gr = reduce_operand(g, f, ctx, cutoffs);
    brent_kung_with(h, &gr, ctx, cutoffs, &|t| {
        if t.len() >= f.len() {
            divrem::rem(&t, f, ctx, cutoffs)
        } else {
            t
        }
    })
}

/// Composes `h` with `g` modulo `f`, reducing through `finv`, the series
/// inverse of the reversed `f` to at least `f.len() - 1` terms.
///
/// # Panics
///
/// Panics if `f` is empty.
pub fn compose_mod_preinv<C: FieldCtx>(
    h: &[C::Elem],
    g: &[C::Elem],
    f: &[C::Elem],
    finv: &[C::Elem],
    ctx: &C,
    cutoffs: &Cutoffs,
) -> Vec<C::Elem> {
    assert!(!f.is_empty(), "division by zero polynomial");
    if f.len() == 1 || h.is_empty() {
        return Vec::new();
    }
    let gr = if g.len() >= f.len() {
        rem_preinv(g, f, finv, ctx, cutoffs)
    } else {
        g.to_vec()
    };
    let reduce = |t: Vec<C::Elem>| {
        if t.len() >= f.len() {
            rem_preinv(&t, f, finv, ctx, cutoffs)
        } else {
            t
        }
    };
    match cutoffs.compose_mod_preinv_strategy(h.len()) {
        ComposeModStrategy::Horner => horner_with(h, &gr, ctx, cutoffs, &reduce),
        ComposeModStrategy::BrentKung => brent_kung_with(h, &gr, ctx, cutoffs, &reduce),
    }
}

/// Precomputes the reduction data [`compose_mod_preinv`] consumes.
pub fn precompute_inverse<C: FieldCtx>(f: &[C::Elem], ctx: &C, cutoffs: &Cutoffs) -> Vec<C::Elem> {
    inv_series(&reversed(f), f.len().max(1), ctx, cutoffs)
}

/// Remainder of `a` modulo `f` through the precomputed series inverse
/// `finv` of the reversed `f`.
///
/// `finv` must carry at least `a.len() − f.len() + 1` correct terms.
pub fn rem_preinv<C: FieldCtx>(
    a: &[C::Elem],
    f: &[C::Elem],
    finv: &[C::Elem],
    ctx: &C,
    cutoffs: &Cutoffs,
) -> Vec<C::Elem> {
    if a.len() < f.len() {
        return a.to_vec();
    }
    let m = a.len() - f.len() + 1;
    let arev = reversed(a);
    let mut q = mullow(&arev[..m], finv, m, ctx, cutoffs);
    q.reverse();

    let rlen = f.len() - 1;
    let fq = mullow(f, &q, rlen, ctx, cutoffs);
    let mut r: Vec<C::Elem> = (0..rlen).map(|i| ctx.sub(a[i], fq[i])).collect();
    trim_zeros(&mut r, ctx);
    r
}

fn reduce_operand<C: FieldCtx>(
    g: &[C::Elem],
    f: &[C::Elem],
    ctx: &C,
    cutoffs: &Cutoffs,
) -> Vec<C::Elem> {
    if g.len() >= f.len() {
        divrem::rem(g, f, ctx, cutoffs)
    } else {
        g.to_vec()
    }
}

fn horner_with<C, R>(
    h: &[C::Elem],
    g: &[C::Elem],
    ctx: &C,
    cutoffs: &Cutoffs,
    reduce: &R,
) -> Vec<C::Elem>
where
    C: FieldCtx,
    R: Fn(Vec<C::Elem>) -> Vec<C::Elem>,
{
    let mut res: Vec<C::Elem> = Vec::new();
    for &c in h.iter().rev() {
        let t = mul(&res, g, ctx, cutoffs);
        res = reduce(t);
        if res.is_empty() {
            if !ctx.is_zero(c) {
                res.push(c);
            }
        } else {
            res[0] = ctx.add(res[0], c);
            trim_zeros(&mut res, ctx);
        }
    }
    res
}

fn brent_kung_with<C, R>(
    h: &[C::Elem],
    g: &[C::Elem],
    ctx: &C,
    cutoffs: &Cutoffs,
    reduce: &R,
) -> Vec<C::Elem>
where
    C: FieldCtx,
    R: Fn(Vec<C::Elem>) -> Vec<C::Elem>,
{
    let lenh = h.len();
    let mut m = lenh.isqrt();
    if m * m < lenh {
        m += 1;
    }

    // baby steps: g^0 .. g^m mod f
    let mut powers: Vec<Vec<C::Elem>> = Vec::with_capacity(m + 1);
    powers.push(vec![ctx.one()]);
    for i in 1..=m {
        let t = mul(&powers[i - 1], g, ctx, cutoffs);
        powers.push(reduce(t));
    }
    let gm = powers[m].clone();

    // giant steps: Horner over the m-coefficient blocks of h
    let nblocks = lenh.div_ceil(m);
    let mut res: Vec<C::Elem> = Vec::new();
    for j in (0..nblocks).rev() {
        let t = mul(&res, &gm, ctx, cutoffs);
        res = reduce(t);
        let start = j * m;
        let end = lenh.min(start + m);
        for (i, &c) in h[start..end].iter().enumerate() {
            if ctx.is_zero(c) {
                continue;
            }
            addmul(&mut res, &powers[i], c, ctx);
        }
        trim_zeros(&mut res, ctx);
    }
    res
}

/// acc += p·s, growing acc as needed.
fn addmul<C: RingCtx>(acc: &mut Vec<C::Elem>, p: &[C::Elem], s: C::Elem, ctx: &C) {
    if acc.len() < p.len() {
        acc.resize(p.len(), ctx.zero());
    }
    for (i, &pi) in p.iter().enumerate() {
        acc[i] = ctx.add(acc[i], ctx.mul(pi, s));
    }
}
