//! # finitas-integers
//!
//! Integer arithmetic for the Finitas polynomial crates.
//!
//! This crate provides:
//! - Arbitrary precision integers (`Integer`), wrapping `dashu`
//! - Word-sized modular arithmetic contexts (`Modulus`)
//!
//! ## Performance Notes
//!
//! - `Modulus` works on raw `u64` residues; products are reduced through
//!   `u128` widening, so no operation allocates
//! - `Integer` is only needed where values may exceed a machine word
//!   (field orders, Frobenius exponents)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod integer;
pub mod modular;

#[cfg(test)]
mod proptests;

pub use integer::Integer;
pub use modular::Modulus;
