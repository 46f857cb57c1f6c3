//! Execution units and functional components.

/// Branch prediction unit: direction predictors and their factory.
pub mod bru;
