//! Simulation driver tests.

/// Per-core predictor ownership and penalty accounting.
pub mod core_model;
