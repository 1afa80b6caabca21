//! Property-based tests for integer and modular arithmetic.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{Integer, Modulus};

    // Strategy for generating small integers
    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    proptest! {
        // Integer ring axioms

        #[test]
        fn integer_add_commutative(a in small_int(), b in small_int()) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            prop_assert_eq!(a.clone() + b.clone(), b + a);
        }

        #[test]
        fn integer_mul_associative(a in small_int(), b in small_int(), c in small_int()) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            let c = Integer::new(c);
            prop_assert_eq!(
                (a.clone() * b.clone()) * c.clone(),
                a * (b * c)
            );
        }

        #[test]
        fn integer_distributive(a in small_int(), b in small_int(), c in small_int()) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            let c = Integer::new(c);
            prop_assert_eq!(
                a.clone() * (b.clone() + c.clone()),
                a.clone() * b + a * c
            );
        }

        #[test]
        fn integer_bit_len_shift(a in 1i64..1_000_000i64) {
            // doubling adds exactly one bit
            let a = Integer::new(a);
            let doubled = a.clone() + a.clone();
            prop_assert_eq!(doubled.bit_len(), a.bit_len() + 1);
        }

        // Modulus properties

        #[test]
        fn modulus_add_commutative(a in 0u64..101, b in 0u64..101) {
            let m = Modulus::new(101);
            prop_assert_eq!(m.add(a, b), m.add(b, a));
        }

        #[test]
        fn modulus_mul_distributive(a in 0u64..101, b in 0u64..101, c in 0u64..101) {
            let m = Modulus::new(101);
            prop_assert_eq!(m.mul(a, m.add(b, c)), m.add(m.mul(a, b), m.mul(a, c)));
        }

        #[test]
        fn modulus_sub_is_add_neg(a in 0u64..101, b in 0u64..101) {
            let m = Modulus::new(101);
            prop_assert_eq!(m.sub(a, b), m.add(a, m.neg(b)));
        }

        #[test]
        fn modulus_inverse(a in 1u64..101) {
            let m = Modulus::new(101);
            let inv = m.inv(a).expect("inverse should exist for non-zero mod prime");
            prop_assert_eq!(m.mul(a, inv), 1);
        }

        #[test]
        fn modulus_fermat_little_theorem(a in 1u64..101) {
            let m = Modulus::new(101);
            // a^(p-1) = 1 (mod p) for a != 0
            prop_assert_eq!(m.pow(a, 100), 1);
        }
    }
}
