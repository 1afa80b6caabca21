//! Property-based tests for polynomial arithmetic.
