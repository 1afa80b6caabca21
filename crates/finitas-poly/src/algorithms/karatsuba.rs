//! Karatsuba multiplication.
//!
//! Divide-and-conquer multiplication with O(n^1.58) complexity. The
//! recursion bottoms out at the configured classical threshold, so the
//! same [`Cutoffs`] value governs both the top-level dispatch and the
//! base case.

use finitas_rings::RingCtx;

use super::classical::mul_classical;
use super::trim_zeros;
use crate::cutoffs::Cutoffs;

/// Karatsuba multiplication of coefficient slices.
///
/// Returns the trimmed product coefficients.
pub fn karatsuba_mul<C: RingCtx>(
    a: &[C::Elem],
    b: &[C::Elem],
    ctx: &C,
    cutoffs: &Cutoffs,
) -> Vec<C::Elem> {
    let n = a.len();
    let m = b.len();
    if n == 0 || m == 0 {
        return Vec::new();
    }

    // Base case
    if n.min(m) <= cutoffs.mul_classical {
        return mul_classical(a, b, ctx);
    }

    // Make both the same size (power of 2)
    let size = n.max(m).next_power_of_two();
    let half = size / 2;

    let mut a_ext = a.to_vec();
    let mut b_ext = b.to_vec();
    a_ext.resize(size, ctx.zero());
    b_ext.resize(size, ctx.zero());

    // Split: a = a0 + a1*x^half, b = b0 + b1*x^half
    let a0 = &a_ext[..half];
    let a1 = &a_ext[half..];
    let b0 = &b_ext[..half];
    let b1 = &b_ext[half..];

    // z0 = a0*b0, z2 = a1*b1
    let z0 = karatsuba_mul(a0, b0, ctx, cutoffs);
    let z2 = karatsuba_mul(a1, b1, ctx, cutoffs);

    let a01: Vec<C::Elem> = a0
        .iter()
        .zip(a1.iter())
        .map(|(&x, &y)| ctx.add(x, y))
        .collect();
    let b01: Vec<C::Elem> = b0
        .iter()
        .zip(b1.iter())
        .map(|(&x, &y)| ctx.add(x, y))
        .collect();

    // z1 = (a0+a1)*(b0+b1) - z0 - z2; the product may come back shorter
    // than z0 or z2 when the halves cancel, so grow it first
    let mut z1 = karatsuba_mul(&a01, &b01, ctx, cutoffs);
    let needed = z1.len().max(z0.len()).max(z2.len());
    z1.resize(needed, ctx.zero());
    for (i, &c) in z0.iter().enumerate() {
        z1[i] = ctx.sub(z1[i], c);
    }
    for (i, &c) in z2.iter().enumerate() {
        z1[i] = ctx.sub(z1[i], c);
    }

    // Combine: result = z0 + z1*x^half + z2*x^(2*half)
    let mut result = vec![ctx.zero(); 2 * size - 1];
    for (i, c) in z0.into_iter().enumerate() {
        result[i] = c;
    }
    for (i, c) in z1.into_iter().enumerate() {
        result[i + half] = ctx.add(result[i + half], c);
    }
    for (i, c) in z2.into_iter().enumerate() {
        result[i + 2 * half] = ctx.add(result[i + 2 * half], c);
    }

    trim_zeros(&mut result, ctx);
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use finitas_integers::Modulus;
    use finitas_rings::ZechField;

    /// Forces deep recursion regardless of input size.
    fn deep() -> Cutoffs {
        Cutoffs {
            mul_classical: 2,
            ..Cutoffs::DEFAULT
        }
    }

    #[test]
    fn test_karatsuba_small() {
        let m = Modulus::new(101);
        let c = karatsuba_mul(&[1, 2], &[3, 4], &m, &deep());
        assert_eq!(c, vec![3, 10, 8]);
    }

    #[test]
    fn test_karatsuba_matches_classical() {
        let m = Modulus::new(101);
        let a: Vec<u64> = (0..100).map(|i| (i * 13 + 5) % 101).collect();
        let b: Vec<u64> = (0..77).map(|i| (i * i + 1) % 101).collect();
        assert_eq!(
            karatsuba_mul(&a, &b, &m, &deep()),
            mul_classical(&a, &b, &m)
        );
    }

    #[test]
    fn test_karatsuba_uneven_lengths() {
        let m = Modulus::new(13);
        let a: Vec<u64> = (0..65).map(|i| i % 13).collect();
        let b: Vec<u64> = vec![1, 12, 5];
        // short operand drops straight to the base case
        assert_eq!(
            karatsuba_mul(&a, &b, &m, &Cutoffs::DEFAULT),
            mul_classical(&a, &b, &m)
        );
    }

    #[test]
    fn test_karatsuba_cancelling_halves() {
        // a1 = -a0, so (a0 + a1)(b0 + b1) vanishes while z0, z2 do not
        let m = Modulus::new(101);
        let a: Vec<u64> = vec![1, 2, 3, 4, 100, 99, 98, 97];
        let b: Vec<u64> = vec![5, 6, 7, 8, 9, 10, 11, 12];
        assert_eq!(
            karatsuba_mul(&a, &b, &m, &deep()),
            mul_classical(&a, &b, &m)
        );
    }

    #[test]
    fn test_karatsuba_over_extension_field() {
        let f8 = ZechField::new(2, 3);
        let a: Vec<_> = (0..40).map(|i| f8.from_code(i % 8)).collect();
        let b: Vec<_> = (0..40).map(|i| f8.from_code((i + 3) % 8)).collect();
        assert_eq!(
            karatsuba_mul(&a, &b, &f8, &deep()),
            mul_classical(&a, &b, &f8)
        );
    }
}
