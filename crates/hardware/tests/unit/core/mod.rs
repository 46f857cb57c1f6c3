//! Core component tests.

/// Functional units.
pub mod units;
