//! Algorithm selection policy.
//!
//! Every size-sensitive polynomial operation has two implementations with
//! different asymptotics, and a threshold deciding which one runs. The
//! thresholds are empirical calibration data, not logic: they live in a
//! [`Cutoffs`] value that callers may override wholesale, and the decision
//! methods are pure step functions of the problem size.

use finitas_rings::FiniteFieldCtx;

/// Tunable crossover thresholds for algorithm selection.
///
/// A length at or below a threshold selects the classical variant of the
/// operation. [`Cutoffs::DEFAULT`] carries values calibrated for
/// table-based field arithmetic, where a coefficient multiplication costs
/// about as much as an addition.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Cutoffs {
    /// Longest operand length multiplied by the schoolbook method.
    pub mul_classical: usize,
    /// Longest operand length squared by the symmetric schoolbook method.
    ///
    /// Higher than `mul_classical`: the symmetric inner loop halves the
    /// coefficient multiplications, so classical squaring stays
    /// competitive longer.
    pub sqr_classical: usize,
    /// Longest operand length for schoolbook truncated products.
    pub mullow_classical: usize,
    /// Longest divisor length handled by classical long division.
    pub divrem_newton: usize,
    /// Longest outer-polynomial length composed by Horner's rule.
    pub compose_mod_lenh: usize,
    /// As `compose_mod_lenh`, for the precomputed-inverse variant.
    pub compose_mod_preinv_lenh: usize,
    /// Longest polynomial whose power sums are computed by the direct
    /// Newton recurrence rather than power-series division.
    pub power_sums_naive: usize,
}

/// Which multiplication (or squaring, or truncated product) body to run.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MulStrategy {
    /// Schoolbook, O(n²).
    Classical,
    /// Divide-and-conquer, O(n^1.58).
    Karatsuba,
}

/// Which division-with-remainder body to run.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum DivRemStrategy {
    /// Long division.
    Classical,
    /// Reversal and power-series inversion of the divisor.
    Newton,
}

/// Which modular-composition body to run.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ComposeModStrategy {
    /// Horner's rule, one modular multiplication per coefficient.
    Horner,
    /// Brent–Kung baby-step/giant-step over ⌈√lenh⌉ powers.
    BrentKung,
}

/// Which iterated-Frobenius body to run.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum FrobeniusStrategy {
    /// Precompute x^q mod f once, then iterate modular composition.
    PrecomputedPowers,
    /// Apply `pow_mod` by q at every step.
    Direct,
}

/// Which power-sums body to run for the forward conversion.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PowerSumsStrategy {
    /// Direct Newton recurrence, O(n·d).
    Naive,
    /// Power-series division −rev(P)′ · rev(P)⁻¹.
    Series,
}

impl Cutoffs {
    /// The calibrated defaults.
    pub const DEFAULT: Self = Self {
        mul_classical: 150,
        sqr_classical: 215,
        mullow_classical: 150,
        divrem_newton: 16,
        compose_mod_lenh: 6,
        compose_mod_preinv_lenh: 6,
        power_sums_naive: 32,
    };

    /// Selects the multiplication body; `len` is the longer operand length.
    #[must_use]
    pub fn mul_strategy(&self, len: usize) -> MulStrategy {
        if len <= self.mul_classical {
            MulStrategy::Classical
        } else {
            MulStrategy::Karatsuba
        }
    }

    /// Selects the squaring body; `len` is the operand length.
    #[must_use]
    pub fn sqr_strategy(&self, len: usize) -> MulStrategy {
        if len <= self.sqr_classical {
            MulStrategy::Classical
        } else {
            MulStrategy::Karatsuba
        }
    }

    /// Selects the truncated-product body; `len` is the longer operand
    /// length.
    #[must_use]
    pub fn mullow_strategy(&self, len: usize) -> MulStrategy {
        if len <= self.mullow_classical {
            MulStrategy::Classical
        } else {
            MulStrategy::Karatsuba
        }
    }

    /// Selects the division body; `len` is the divisor length.
    #[must_use]
    pub fn divrem_strategy(&self, len: usize) -> DivRemStrategy {
        if len <= self.divrem_newton {
            DivRemStrategy::Classical
        } else {
            DivRemStrategy::Newton
        }
    }

    /// Selects the modular-composition body; `lenh` is the outer
    /// polynomial's length.
    #[must_use]
    pub fn compose_mod_strategy(&self, lenh: usize) -> ComposeModStrategy {
        if lenh <= self.compose_mod_lenh {
            ComposeModStrategy::Horner
        } else {
            ComposeModStrategy::BrentKung
        }
    }

    /// As [`Self::compose_mod_strategy`], when the inverse of the reversed
    /// modulus is precomputed.
    #[must_use]
    pub fn compose_mod_preinv_strategy(&self, lenh: usize) -> ComposeModStrategy {
        if lenh <= self.compose_mod_preinv_lenh {
            ComposeModStrategy::Horner
        } else {
            ComposeModStrategy::BrentKung
        }
    }

    /// Selects the forward power-sums body; `len` is the polynomial length.
    #[must_use]
    pub fn power_sums_strategy(&self, len: usize) -> PowerSumsStrategy {
        if len <= self.power_sums_naive {
            PowerSumsStrategy::Naive
        } else {
            PowerSumsStrategy::Series
        }
    }

    /// Selects the iterated-Frobenius body for a modulus of length `len`
    /// over the field `ctx`.
    ///
    /// Precomputing Frobenius powers costs one exponentiation by q, which
    /// grows with the bit length of q; the direct walk applies that
    /// exponentiation at every one of the O(len) steps but precomputes
    /// nothing. The crossover weighs `bitlength(q)` against `⌊√len⌋`.
    #[must_use]
    pub fn iterated_frobenius_strategy<C: FiniteFieldCtx>(
        &self,
        ctx: &C,
        len: usize,
    ) -> FrobeniusStrategy {
        let q = ctx.order();
        if 2 * q.bit_len() < 3 * (len.isqrt() + 1) {
            FrobeniusStrategy::PrecomputedPowers
        } else {
            FrobeniusStrategy::Direct
        }
    }
}

impl Default for Cutoffs {
    fn default() -> Self {
        Self::DEFAULT
    }
}
