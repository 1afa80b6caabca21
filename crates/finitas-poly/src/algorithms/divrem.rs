//! Division with remainder.
//!
//! Classical long division, and Newton division through power-series
//! inversion of the reversed divisor for long quotients. Both require a
//! field: the divisor's leading coefficient is inverted.

use finitas_rings::FieldCtx;

use super::series::inv_series;
use super::{mullow, reversed, trim_zeros};
use crate::cutoffs::{Cutoffs, DivRemStrategy};

/// Divides `a` by `b`, selecting the body by divisor length.
///
/// Inputs must be normalized; returns normalized `(quotient, remainder)`
/// with `remainder.len() < b.len()`.
///
/// # Panics
///
/// Panics if `b` is empty.
pub fn divrem<C: FieldCtx>(
    a: &[C::Elem],
    b: &[C::Elem],
    ctx: &C,
    cutoffs: &Cutoffs,
) -> (Vec<C::Elem>, Vec<C::Elem>) {
    match cutoffs.divrem_strategy(b.len()) {
        DivRemStrategy::Classical => divrem_classical(a, b, ctx),
        DivRemStrategy::Newton => divrem_newton(a, b, ctx, cutoffs),
    }
}

/// Returns the remainder of `a` divided by `b`.
///
/// # Panics
///
/// Panics if `b` is empty.
pub fn rem<C: FieldCtx>(a: &[C::Elem], b: &[C::Elem], ctx: &C, cutoffs: &Cutoffs) -> Vec<C::Elem> {
    divrem(a, b, ctx, cutoffs).1
}

/// Classical long division.
///
/// # Panics
///
/// Panics if `b` is empty.
pub fn divrem_classical<C: FieldCtx>(
    a: &[C::Elem],
    b: &[C::Elem],
    ctx: &C,
) -> (Vec<C::Elem>, Vec<C::Elem>) {
    assert!(!b.is_empty(), "division by zero polynomial");
    if a.len() < b.len() {
        return (Vec::new(), a.to_vec());
    }

    let b_lead_inv = ctx
        .inv(*b.last().expect("non-empty divisor"))
        .expect("field element should have inverse");
    let mut quotient = vec![ctx.zero(); a.len() - b.len() + 1];
    let mut remainder = a.to_vec();

    while remainder.len() >= b.len() {
        let shift = remainder.len() - b.len();
        let c = ctx.mul(*remainder.last().expect("non-empty remainder"), b_lead_inv);
        quotient[shift] = c;
        for (j, &bj) in b.iter().enumerate() {
            remainder[shift + j] = ctx.sub(remainder[shift + j], ctx.mul(c, bj));
        }
        trim_zeros(&mut remainder, ctx);
    }

    (quotient, remainder)
}

/// Newton division: reverse both operands, invert the reversed divisor
/// as a power series to quotient precision, and recover the remainder
/// from the low part of `a − b·q`.
///
/// # Panics
///
/// Panics if `b` is empty.
pub fn divrem_newton<C: FieldCtx>(
    a: &[C::Elem],
    b: &[C::Elem],
    ctx: &C,
    cutoffs: &Cutoffs,
) -> (Vec<C::Elem>, Vec<C::Elem>) {
    assert!(!b.is_empty(), "division by zero polynomial");
    if a.len() < b.len() {
        return (Vec::new(), a.to_vec());
    }

    let m = a.len() - b.len() + 1;
    let arev = reversed(a);
    let brev = reversed(b);
    let binv = inv_series(&brev, m, ctx, cutoffs);
    let mut q = mullow(&arev[..m], &binv, m, ctx, cutoffs);
    q.reverse();

    let rlen = b.len() - 1;
    let bq = mullow(b, &q, rlen, ctx, cutoffs);
    let mut r: Vec<C::Elem> = (0..rlen).map(|i| ctx.sub(a[i], bq[i])).collect();
    trim_zeros(&mut r, ctx);

    (q, r)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::mul;
    use finitas_integers::Modulus;
    use finitas_rings::{RingCtx, ZechField};

    const C: Cutoffs = Cutoffs::DEFAULT;

    fn check_identity(a: &[u64], b: &[u64], m: &Modulus) {
        let (q, r) = divrem_classical(a, b, m);
        assert!(r.len() < b.len());
        let mut back = mul(b, &q, m, &C);
        back.resize(back.len().max(r.len()), 0);
        for (i, &ri) in r.iter().enumerate() {
            back[i] = m.add(back[i], ri);
        }
        trim_zeros(&mut back, m);
        assert_eq!(back, a);

        let (qn, rn) = divrem_newton(a, b, m, &C);
        assert_eq!((qn, rn), (q, r), "newton and classical disagree");
    }

    #[test]
    fn test_divrem_identity() {
        let m = Modulus::new(101);
        let a: Vec<u64> = (0..50).map(|i| (i * i * 3 + i + 1) % 101).collect();
        let b: Vec<u64> = vec![7, 0, 2, 96, 5];
        check_identity(&a, &b, &m);
    }

    #[test]
    fn test_divrem_exact_division() {
        let m = Modulus::new(13);
        let b: Vec<u64> = vec![1, 3, 1];
        let q: Vec<u64> = vec![5, 0, 0, 2, 7];
        let a = mul(&b, &q, &m, &C);
        let (quot, rem) = divrem(&a, &b, &m, &C);
        assert_eq!(quot, q);
        assert!(rem.is_empty());
    }

    #[test]
    fn test_divrem_short_dividend() {
        let m = Modulus::new(101);
        let (q, r) = divrem(&[4, 5], &[1, 2, 3], &m, &C);
        assert!(q.is_empty());
        assert_eq!(r, vec![4, 5]);
    }

    #[test]
    fn test_divrem_by_constant() {
        let m = Modulus::new(101);
        let (q, r) = divrem_newton(&[2, 4, 6], &[2], &m, &C);
        assert_eq!(q, vec![1, 2, 3]);
        assert!(r.is_empty());
        let (qc, rc) = divrem_classical(&[2, 4, 6], &[2], &m);
        assert_eq!((qc, rc), (q, r));
    }

    #[test]
    fn test_newton_division_long_quotient() {
        // long enough that dispatch picks the Newton body on its own
        let m = Modulus::new(101);
        let b: Vec<u64> = (0..20).map(|i| (i * 5 + 1) % 101).collect();
        let a: Vec<u64> = (0..90).map(|i| (i * 17 + 3) % 101).collect();
        let (q, r) = divrem(&a, &b, &m, &C);
        let (qc, rc) = divrem_classical(&a, &b, &m);
        assert_eq!((q, r), (qc, rc));
    }

    #[test]
    fn test_divrem_over_extension_field() {
        let f4 = ZechField::new(2, 2);
        let a: Vec<_> = (0..12).map(|i| f4.from_code((i % 3) + 1)).collect();
        let b: Vec<_> = vec![f4.generator(), f4.one()];
        let (q, r) = divrem_classical(&a, &b, &f4);
        let mut back = mul(&b, &q, &f4, &C);
        back.resize(back.len().max(r.len()).max(a.len()), f4.zero());
        for (i, &ri) in r.iter().enumerate() {
            back[i] = f4.add(back[i], ri);
        }
        trim_zeros(&mut back, &f4);
        assert_eq!(back, a);
        let (qn, rn) = divrem_newton(&a, &b, &f4, &C);
        assert_eq!((qn, rn), (q, r));
    }

    #[test]
    #[should_panic(expected = "division by zero polynomial")]
    fn test_divide_by_zero_polynomial() {
        let m = Modulus::new(101);
        let _ = divrem(&[1, 2], &[], &m, &C);
    }
}
