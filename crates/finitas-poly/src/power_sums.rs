//! Conversion between a polynomial and the power sums of its roots.
//!
//! A power-sum sequence is stored polynomial-shaped: coefficient 0 holds
//! the number of roots d (the zeroth power sum, kept as a raw word, never
//! reduced), and coefficient k holds p_k = Σ rᵢᵏ. Missing entries past
//! the stored length count as zero.
//!
//! The backward conversion recovers the monic polynomial from its power
//! sums through Newton's identities, rearranged so that solving for each
//! coefficient costs one multiplication by the inverse of k instead of a
//! division chain. The fast path uses rev(P) = exp(−Σ pₖ xᵏ / k). Both
//! paths divide by every k up to d, so k must stay invertible: the
//! dispatch sends small moduli and small degrees to the direct
//! recurrence, but a degree reaching the characteristic fails either way
//! (the division helper panics).

use finitas_integers::Modulus;
use finitas_rings::RingCtx;

use crate::algorithms::{self, series};
use crate::cutoffs::{Cutoffs, PowerSumsStrategy};
use crate::dense::Poly;

/// Largest modulus routed to the direct recurrence unconditionally.
pub const NAIVE_MODULUS_LIMIT: u64 = 12;

/// Largest target degree routed to the direct recurrence.
pub const NAIVE_DEGREE_LIMIT: u64 = 10;

/// Recovers the monic polynomial of degree `q[0]` whose roots have the
/// power sums `q[1..]`.
///
/// The zero polynomial encodes "no roots" and yields the constant 1.
/// The result is normalized and, for valid inputs, monic of length
/// `q[0] + 1`.
///
/// # Panics
///
/// Panics if some k in `1..=q[0]` is not invertible modulo the modulus
/// (possible only when the degree reaches the characteristic).
#[must_use]
pub fn power_sums_to_poly(q: &Poly<Modulus>) -> Poly<Modulus> {
    let ctx = *q.ctx();
    if q.is_zero() {
        return Poly::one(ctx);
    }
    let coeffs = dispatch(q.coeffs(), ctx);
    Poly::new(ctx, coeffs)
}

/// In-place variant of [`power_sums_to_poly`].
///
/// The result is computed into a scoped temporary and swapped in, so the
/// input buffer is never read after it has been written.
pub fn power_sums_to_poly_inplace(q: &mut Poly<Modulus>) {
    let mut tmp = power_sums_to_poly(q);
    std::mem::swap(q, &mut tmp);
}

fn dispatch(poly: &[u64], ctx: Modulus) -> Vec<u64> {
    if ctx.modulus() <= NAIVE_MODULUS_LIMIT || poly[0] <= NAIVE_DEGREE_LIMIT {
        power_sums_to_poly_naive(poly, ctx)
    } else {
        power_sums_to_poly_schoenhage(poly, ctx)
    }
}

/// Direct Newton's-identities recurrence, O(d²).
///
/// With a₀ = 1 and aₖ the coefficient of x^(d−k), the identities give
/// k·aₖ = −Σᵢ aₖ₋ᵢ·pᵢ; each step multiplies the accumulated sum by the
/// inverse of k.
///
/// `poly` must be non-empty; `poly[0]` is the target degree, read raw.
///
/// # Panics
///
/// Panics if some k in `1..=poly[0]` is not invertible.
#[must_use]
pub fn power_sums_to_poly_naive(poly: &[u64], ctx: Modulus) -> Vec<u64> {
    let d = poly[0] as usize;
    let mut res = vec![0u64; d + 1];
    res[d] = 1;
    for k in 1..=d {
        let mut s = 0u64;
        for i in 1..=k.min(poly.len() - 1) {
            s = ctx.add(s, ctx.mul(res[d - k + i], poly[i]));
        }
        let kinv = ctx
            .inv(ctx.reduce(k as u64))
            .expect("division by non-invertible element");
        res[d - k] = ctx.mul(ctx.neg(s), kinv);
    }
    res
}

/// Series method: rev(P) = exp(−Σ pₖ xᵏ / k), then reverse.
///
/// Same contract as [`power_sums_to_poly_naive`].
///
/// # Panics
///
/// Panics if some k in `1..=poly[0]` is not invertible.
#[must_use]
pub fn power_sums_to_poly_schoenhage(poly: &[u64], ctx: Modulus) -> Vec<u64> {
    let d = poly[0] as usize;
    let mut f = vec![0u64; d + 1];
    for (k, fk) in f.iter_mut().enumerate().skip(1) {
        let pk = if k < poly.len() { poly[k] } else { 0 };
        let kinv = ctx
            .inv(ctx.reduce(k as u64))
            .expect("division by non-invertible element");
        *fk = ctx.neg(ctx.mul(pk, kinv));
    }
    let mut res = series::exp_series(&f, d + 1, &ctx, &Cutoffs::DEFAULT);
    res.reverse();
    res
}

/// Computes the first `n` power sums (p₀ = degree included) of the roots
/// of `p`.
///
/// A non-monic input is normalized by its leading coefficient first; the
/// roots, and so the power sums, are unchanged.
///
/// # Panics
///
/// Panics if `p` is the zero polynomial.
#[must_use]
pub fn poly_to_power_sums(p: &Poly<Modulus>, n: usize) -> Poly<Modulus> {
    let ctx = *p.ctx();
    let lead = p
        .leading_coeff()
        .expect("power sums of the zero polynomial");
    let monic;
    let coeffs = if ctx.is_one(lead) {
        p.coeffs()
    } else {
        monic = p.scale(ctx.inv(lead).expect("division by non-invertible element"));
        monic.coeffs()
    };
    let sums = match Cutoffs::DEFAULT.power_sums_strategy(coeffs.len()) {
        PowerSumsStrategy::Naive => poly_to_power_sums_naive(coeffs, n, ctx),
        PowerSumsStrategy::Series => poly_to_power_sums_series(coeffs, n, ctx),
    };
    Poly::new(ctx, sums)
}

/// Forward Newton recurrence, division-free:
/// pₖ = −k·c₍d−k₎ − Σᵢ c₍d−i₎·pₖ₋ᵢ.
fn poly_to_power_sums_naive(c: &[u64], n: usize, ctx: Modulus) -> Vec<u64> {
    let d = c.len() - 1;
    let mut res = vec![0u64; n.max(1)];
    res[0] = d as u64;
    for k in 1..n {
        let mut s = if k <= d {
            ctx.mul(ctx.reduce(k as u64), c[d - k])
        } else {
            0
        };
        for i in 1..=(k - 1).min(d) {
            s = ctx.add(s, ctx.mul(c[d - i], res[k - i]));
        }
        res[k] = ctx.neg(s);
    }
    res
}

/// Series method: the power sums are the coefficients of
/// −rev(P)′ · rev(P)⁻¹.
fn poly_to_power_sums_series(c: &[u64], n: usize, ctx: Modulus) -> Vec<u64> {
    let d = c.len() - 1;
    let mut res = vec![0u64; n.max(1)];
    res[0] = d as u64;
    if n <= 1 {
        return res;
    }
    let rev = algorithms::reversed(c);
    let drev = series::derivative(&rev, &ctx);
    let rinv = series::inv_series(&rev, n - 1, &ctx, &Cutoffs::DEFAULT);
    let t = algorithms::mullow(&drev, &rinv, n - 1, &ctx, &Cutoffs::DEFAULT);
    for (k, &tk) in t.iter().enumerate() {
        res[k + 1] = ctx.neg(tk);
    }
    res
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    fn poly(ctx: Modulus, coeffs: &[u64]) -> Poly<Modulus> {
        Poly::from_ints(ctx, coeffs)
    }

    #[test]
    fn test_concrete_example() {
        // d = 2, p = 101, power sums 3 and 5: x^2 - 3x + 2
        let m = Modulus::new(101);
        let q = poly(m, &[2, 3, 5]);
        let p = power_sums_to_poly(&q);
        assert_eq!(p.coeffs(), &[2, 98, 1]);
    }

    #[test]
    fn test_degree_zero_gives_constant_one() {
        let m = Modulus::new(101);
        assert_eq!(power_sums_to_poly(&Poly::zero(m)).coeffs(), &[1]);
        // [0] normalizes to the zero polynomial: same degenerate case
        assert_eq!(power_sums_to_poly(&poly(m, &[0])).coeffs(), &[1]);
    }

    #[test]
    fn test_missing_power_sums_are_zero() {
        // only the degree given: all power sums vanish, so P = x^d
        let m = Modulus::new(101);
        let p = power_sums_to_poly(&poly(m, &[3]));
        assert_eq!(p.coeffs(), &[0, 0, 0, 1]);
    }

    #[test]
    fn test_inplace_matches_pure() {
        let m = Modulus::new(101);
        let q = poly(m, &[4, 10, 20, 30, 40]);
        let expected = power_sums_to_poly(&q);
        let mut aliased = q;
        power_sums_to_poly_inplace(&mut aliased);
        assert_eq!(aliased, expected);
    }

    #[test]
    fn test_naive_and_schoenhage_agree_near_the_cutoff() {
        // the dispatch boundary: modulus 13 is the smallest taking the
        // fast path, degrees 10 and 11 sit on both sides of the degree
        // test
        let m = Modulus::new(13);
        for d in [10u64, 11] {
            let coeffs: Vec<u64> = (0..d).map(|i| (i * i + 1) % 13).chain([1]).collect();
            let p = Poly::new(m, coeffs);
            let q = poly_to_power_sums(&p, d as usize + 1);
            let a = power_sums_to_poly_naive(q.coeffs(), m);
            let b = power_sums_to_poly_schoenhage(q.coeffs(), m);
            assert_eq!(a, b, "degree {d}");
            assert_eq!(Poly::new(m, a), p, "degree {d}");
        }
    }

    #[test]
    fn test_round_trip() {
        let m = Modulus::new(101);
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        for d in [1usize, 2, 3, 5, 8, 12, 20, 33] {
            let mut coeffs: Vec<u64> = (0..d).map(|_| rng.gen_range(0..101)).collect();
            coeffs.push(1); // monic
            let p = Poly::new(m, coeffs);
            let sums = poly_to_power_sums(&p, d + 1);
            let back = power_sums_to_poly(&sums);
            assert_eq!(back, p, "degree {d}");
        }
    }

    #[test]
    fn test_round_trip_small_modulus() {
        // modulus ≤ 12 forces the direct recurrence; degrees stay below
        // the characteristic so every k is invertible
        let m = Modulus::new(11);
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for d in [1usize, 4, 7, 10] {
            let mut coeffs: Vec<u64> = (0..d).map(|_| rng.gen_range(0..11)).collect();
            coeffs.push(1);
            let p = Poly::new(m, coeffs);
            let sums = poly_to_power_sums(&p, d + 1);
            assert_eq!(power_sums_to_poly(&sums), p, "degree {d}");
        }
    }

    #[test]
    fn test_forward_naive_matches_series() {
        let m = Modulus::new(101);
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        for d in [1usize, 2, 6, 15, 40] {
            let mut coeffs: Vec<u64> = (0..d).map(|_| rng.gen_range(0..101)).collect();
            coeffs.push(1);
            for n in [1, d / 2 + 1, d + 1, d + 5] {
                let a = poly_to_power_sums_naive(&coeffs, n, m);
                let b = poly_to_power_sums_series(&coeffs, n, m);
                assert_eq!(a, b, "degree {d}, n = {n}");
            }
        }
    }

    #[test]
    fn test_forward_normalizes_non_monic_input() {
        let m = Modulus::new(101);
        let p = poly(m, &[6, 9, 3]); // 3(x^2 + 3x + 2) = 3(x+1)(x+2)
        let monic = poly(m, &[2, 3, 1]);
        assert_eq!(poly_to_power_sums(&p, 3), poly_to_power_sums(&monic, 3));
    }

    #[test]
    fn test_power_sums_values() {
        // roots 1 and 2: p1 = 3, p2 = 5, p3 = 9
        let m = Modulus::new(101);
        let p = poly(m, &[2, 98, 1]); // (x-1)(x-2)
        let sums = poly_to_power_sums(&p, 4);
        assert_eq!(sums.coeffs(), &[2, 3, 5, 9]);
    }

    #[test]
    fn test_round_trip_degree_exceeding_stored_sums() {
        // power sums truncated by normalization still reconstruct: the
        // missing tail is zero
        let m = Modulus::new(101);
        let p = poly(m, &[0, 0, 0, 1]); // x^3, all power sums zero
        let sums = poly_to_power_sums(&p, 4);
        assert_eq!(sums.coeffs(), &[3]); // trailing zeros trimmed
        assert_eq!(power_sums_to_poly(&sums), p);
    }

    #[test]
    #[should_panic(expected = "division by non-invertible element")]
    fn test_degree_reaching_the_characteristic_panics() {
        // d = 5 over Z_5: the recurrence needs 1/5
        let m = Modulus::new(5);
        let _ = power_sums_to_poly(&poly(m, &[5, 1, 2, 3, 4]));
    }
}
