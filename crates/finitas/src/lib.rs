//! # Finitas
//!
//! Exact, high-performance polynomial arithmetic over finite fields.
//!
//! ## Features
//!
//! - **Prime fields**: word-sized Z_p on raw `u64` residues
//! - **Extension fields**: GF(p^k) through Zech logarithm tables
//! - **Dense polynomials**: cutoff-driven selection between classical
//!   and asymptotically fast algorithm bodies
//! - **Power sums**: Newton's-identities conversion in both directions
//!
//! ## Quick Start
//!
//! ```rust
//! use finitas::prelude::*;
//!
//! let m = Modulus::new(101);
//! // power sums 3 and 5 of two roots: x^2 - 3x + 2
//! let q = Poly::from_ints(m, &[2, 3, 5]);
//! let p = power_sums_to_poly(&q);
//! assert_eq!(p.coeffs(), &[2, 98, 1]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use finitas_integers as integers;
pub use finitas_poly as poly;
pub use finitas_rings as rings;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use finitas_integers::{Integer, Modulus};
    pub use finitas_poly::{
        poly_to_power_sums, power_sums_to_poly, power_sums_to_poly_inplace, Cutoffs, Poly,
    };
    pub use finitas_rings::{FieldCtx, FiniteFieldCtx, RingCtx, ZechElem, ZechField};
}
