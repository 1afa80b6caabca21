//! Modular exponentiation and iterated Frobenius.
//!
//! `iterated_frobenius` computes x^(q^e) mod f over GF(q). The direct
//! walk performs one exponentiation by q per step; the precomputed
//! variant pays for a single exponentiation up front and replaces the
//! remaining steps with modular composition, whose cost does not grow
//! with the bit length of q. The policy picks between them.

use finitas_integers::Integer;
use finitas_rings::{FieldCtx, FiniteFieldCtx};

use super::compose_mod::compose_mod;
use super::{divrem, mul, sqr};
use crate::cutoffs::{Cutoffs, FrobeniusStrategy};

/// Computes `g^e` modulo `f` by square-and-multiply over the bits of `e`.
///
/// # Panics
///
/// Panics if `e` is negative or `f` is empty.
pub fn pow_mod<C: FieldCtx>(
    g: &[C::Elem],
    e: &Integer,
    f: &[C::Elem],
    ctx: &C,
    cutoffs: &Cutoffs,
) -> Vec<C::Elem> {
    assert!(!e.is_negative(), "negative exponent");
    assert!(!f.is_empty(), "division by zero polynomial");
    if f.len() == 1 {
        return Vec::new();
    }

    let gr = if g.len() >= f.len() {
        divrem::rem(g, f, ctx, cutoffs)
    } else {
        g.to_vec()
    };

    let mut res = vec![ctx.one()];
    for i in (0..e.bit_len()).rev() {
        let t = sqr(&res, ctx, cutoffs);
        res = reduce(t, f, ctx, cutoffs);
        if e.bit(i) {
            let t = mul(&res, &gr, ctx, cutoffs);
            res = reduce(t, f, ctx, cutoffs);
        }
    }
    res
}

/// Computes x^(q^e) mod f over the field `ctx` of order q.
///
/// The strategy is chosen by
/// [`Cutoffs::iterated_frobenius_strategy`]: either `e` successive
/// exponentiations by q, or one exponentiation followed by `e − 1`
/// modular compositions with x^q mod f.
///
/// # Panics
///
/// Panics if `f` is empty.
pub fn iterated_frobenius<C: FiniteFieldCtx>(
    e: usize,
    f: &[C::Elem],
    ctx: &C,
    cutoffs: &Cutoffs,
) -> Vec<C::Elem> {
    assert!(!f.is_empty(), "division by zero polynomial");
    if f.len() == 1 {
        return Vec::new();
    }

    let x = vec![ctx.zero(), ctx.one()];
    let xr = if x.len() >= f.len() {
        divrem::rem(&x, f, ctx, cutoffs)
    } else {
        x
    };
    if e == 0 {
        return xr;
    }

    let q = ctx.order();
    match cutoffs.iterated_frobenius_strategy(ctx, f.len()) {
        FrobeniusStrategy::Direct => {
            let mut h = xr;
            for _ in 0..e {
                h = pow_mod(&h, &q, f, ctx, cutoffs);
            }
            h
        }
        FrobeniusStrategy::PrecomputedPowers => {
            let xq = pow_mod(&xr, &q, f, ctx, cutoffs);
            let mut h = xq.clone();
            for _ in 1..e {
                h = compose_mod(&h, &xq, f, ctx, cutoffs);
            }
            h
        }
    }
}

fn reduce<C: FieldCtx>(t: Vec<C::Elem>, f: &[C::Elem], ctx: &C, cutoffs: &Cutoffs) -> Vec<C::Elem> {
    if t.len() >= f.len() {
        divrem::rem(&t, f, ctx, cutoffs)
    } else {
        t
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cutoffs::FrobeniusStrategy;
    use finitas_integers::Modulus;
    use finitas_rings::{RingCtx, ZechField};

    const C: Cutoffs = Cutoffs::DEFAULT;

    #[test]
    fn test_pow_mod_small_exponents() {
        let m = Modulus::new(101);
        let g: Vec<u64> = vec![1, 1];
        let f: Vec<u64> = vec![1, 0, 0, 1];
        let mut direct: Vec<u64> = vec![1];
        for e in 0..8i64 {
            assert_eq!(
                pow_mod(&g, &Integer::new(e), &f, &m, &C),
                direct,
                "exponent {e}"
            );
            let t = mul(&direct, &g, &m, &C);
            direct = reduce(t, &f, &m, &C);
        }
    }

    #[test]
    fn test_pow_mod_matches_fermat() {
        // a constant is a unit of Z_p, so a^(p-1) ≡ 1
        let m = Modulus::new(13);
        let g: Vec<u64> = vec![7];
        let f: Vec<u64> = vec![5, 1, 1];
        assert_eq!(pow_mod(&g, &Integer::new(12), &f, &m, &C), vec![1]);
    }

    /// x^(q^e) mod f computed by e explicit exponentiations.
    fn frobenius_tower<C2: FiniteFieldCtx>(
        e: usize,
        f: &[C2::Elem],
        ctx: &C2,
    ) -> Vec<C2::Elem> {
        let q = ctx.order();
        let mut h = vec![ctx.zero(), ctx.one()];
        if h.len() >= f.len() {
            h = divrem::rem(&h, f, ctx, &C);
        }
        for _ in 0..e {
            h = pow_mod(&h, &q, f, ctx, &C);
        }
        h
    }

    #[test]
    fn test_iterated_frobenius_precomputed_side() {
        // GF(9), len 5: 2·bitlen(9) = 8 < 3·(⌊√5⌋+1) = 9 → PrecomputedPowers
        let f9 = ZechField::new(3, 2);
        assert_eq!(
            C.iterated_frobenius_strategy(&f9, 5),
            FrobeniusStrategy::PrecomputedPowers
        );
        let one = f9.one();
        let g = f9.generator();
        let f: Vec<_> = vec![g, one, f9.zero(), g, one];
        for e in 0..4 {
            assert_eq!(
                iterated_frobenius(e, &f, &f9, &C),
                frobenius_tower(e, &f, &f9),
                "e = {e}"
            );
        }
    }

    #[test]
    fn test_iterated_frobenius_direct_side() {
        // GF(2^8), len 5: 2·9 = 18 ≥ 9 → Direct
        let f256 = ZechField::new(2, 8);
        assert_eq!(
            C.iterated_frobenius_strategy(&f256, 5),
            FrobeniusStrategy::Direct
        );
        let one = f256.one();
        let g = f256.generator();
        let f: Vec<_> = vec![one, g, g, f256.zero(), one];
        for e in 0..3 {
            assert_eq!(
                iterated_frobenius(e, &f, &f256, &C),
                frobenius_tower(e, &f, &f256),
                "e = {e}"
            );
        }
    }

    #[test]
    fn test_frobenius_fixes_irreducible_modulus() {
        // for f irreducible of degree 2 over GF(9), x^(q^2) ≡ x mod f
        let f9 = ZechField::new(3, 2);
        let g = f9.generator();
        // x^2 - g is irreducible: g has odd discrete log, so it is a
        // non-square
        let f: Vec<_> = vec![f9.neg(g), f9.zero(), f9.one()];
        let h = iterated_frobenius(2, &f, &f9, &C);
        assert_eq!(h, vec![f9.zero(), f9.one()]);
    }

    #[test]
    fn test_prime_field_frobenius_is_identity_on_x() {
        // over Z_p, x^p mod an irreducible f of degree ≥ 2 is just x^p
        let m = Modulus::new(5);
        let f: Vec<u64> = vec![2, 1, 0, 1]; // no roots mod 5? irrelevant: e = 1 tower
        assert_eq!(
            iterated_frobenius(1, &f, &m, &C),
            frobenius_tower(1, &f, &m)
        );
    }
}
