//! # finitas-rings
//!
//! Coefficient domains for Finitas polynomial arithmetic.
//!
//! This crate provides:
//! - Context traits: `RingCtx`, `FieldCtx`, `FiniteFieldCtx`
//! - The prime field Z_p through `Modulus` (raw `u64` residues)
//! - The extension field GF(p^k) through Zech logarithm tables
//!
//! ## Context traits
//!
//! Coefficient arithmetic goes through a context object rather than the
//! element type itself: extension-field elements are bare table indices
//! and the tables live in the context. Polynomial algorithms are written
//! once over these traits and instantiated per coefficient domain.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod traits;
pub mod zech;

pub use traits::{FieldCtx, FiniteFieldCtx, RingCtx};
pub use zech::{ZechElem, ZechField};
