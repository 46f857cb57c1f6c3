//! Functional unit tests.

/// Branch prediction unit.
pub mod bru;
