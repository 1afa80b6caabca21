//! Coefficient context traits.
//!
//! These traits are the seam between the polynomial algorithms and the
//! coefficient domains. A context owns whatever shared state the domain
//! needs (a modulus, discrete-logarithm tables) and performs all element
//! arithmetic; elements themselves stay `Copy` machine words.

use std::fmt::Debug;

use finitas_integers::{Integer, Modulus};

/// A commutative ring presented through a context object.
///
/// # Laws
///
/// - Addition is associative and commutative with identity `zero()`
/// - Multiplication is associative and commutative with identity `one()`
/// - Multiplication distributes over addition
/// - Every element has an additive inverse (`neg`)
///
/// All element parameters must belong to this context; mixing elements
/// from different contexts is a logic error that is not detected.
pub trait RingCtx: Clone + PartialEq {
    /// The element representation.
    type Elem: Copy + Eq + Debug;

    /// The additive identity.
    fn zero(&self) -> Self::Elem;

    /// The multiplicative identity.
    fn one(&self) -> Self::Elem;

    /// Returns true if `a` is the additive identity.
    fn is_zero(&self, a: Self::Elem) -> bool {
        a == self.zero()
    }

    /// Returns true if `a` is the multiplicative identity.
    fn is_one(&self, a: Self::Elem) -> bool {
        a == self.one()
    }

    /// Adds two elements.
    fn add(&self, a: Self::Elem, b: Self::Elem) -> Self::Elem;

    /// Subtracts two elements.
    fn sub(&self, a: Self::Elem, b: Self::Elem) -> Self::Elem;

    /// Multiplies two elements.
    fn mul(&self, a: Self::Elem, b: Self::Elem) -> Self::Elem;

    /// Negates an element.
    fn neg(&self, a: Self::Elem) -> Self::Elem;

    /// The image of a non-negative integer under the canonical map Z → R.
    fn from_u64(&self, n: u64) -> Self::Elem;

    /// Computes `a^exp` by binary exponentiation.
    fn pow(&self, a: Self::Elem, mut exp: u64) -> Self::Elem {
        let mut base = a;
        let mut result = self.one();

        while exp > 0 {
            if exp & 1 == 1 {
                result = self.mul(result, base);
            }
            base = self.mul(base, base);
            exp >>= 1;
        }

        result
    }
}

/// A field context: every non-zero element is invertible.
pub trait FieldCtx: RingCtx {
    /// Computes the multiplicative inverse.
    ///
    /// Returns `None` if the element is not invertible.
    fn inv(&self, a: Self::Elem) -> Option<Self::Elem>;

    /// Divides `a` by `b`.
    ///
    /// # Panics
    ///
    /// Panics if `b` is not invertible.
    fn div(&self, a: Self::Elem, b: Self::Elem) -> Self::Elem {
        self.mul(a, self.inv(b).expect("division by non-invertible element"))
    }
}

/// A finite field context.
///
/// Exposes the data the algorithm-selection policy consumes (order,
/// characteristic) and the Frobenius endomorphism `x ↦ x^p`.
pub trait FiniteFieldCtx: FieldCtx {
    /// The field characteristic p.
    fn characteristic(&self) -> u64;

    /// The field order as an arbitrary-precision integer.
    fn order(&self) -> Integer;

    /// Applies the Frobenius endomorphism `a ↦ a^p`.
    fn frobenius(&self, a: Self::Elem) -> Self::Elem;
}

impl RingCtx for Modulus {
    type Elem = u64;

    fn zero(&self) -> u64 {
        0
    }

    fn one(&self) -> u64 {
        1
    }

    fn add(&self, a: u64, b: u64) -> u64 {
        Modulus::add(*self, a, b)
    }

    fn sub(&self, a: u64, b: u64) -> u64 {
        Modulus::sub(*self, a, b)
    }

    fn mul(&self, a: u64, b: u64) -> u64 {
        Modulus::mul(*self, a, b)
    }

    fn neg(&self, a: u64) -> u64 {
        Modulus::neg(*self, a)
    }

    fn from_u64(&self, n: u64) -> u64 {
        self.reduce(n)
    }

    fn pow(&self, a: u64, exp: u64) -> u64 {
        Modulus::pow(*self, a, exp)
    }
}

impl FieldCtx for Modulus {
    fn inv(&self, a: u64) -> Option<u64> {
        Modulus::inv(*self, a)
    }
}

impl FiniteFieldCtx for Modulus {
    fn characteristic(&self) -> u64 {
        self.modulus()
    }

    fn order(&self) -> Integer {
        Integer::from(self.modulus())
    }

    fn frobenius(&self, a: u64) -> u64 {
        // x^p = x in Z_p
        a
    }
}
