//! Core processor components.
//!
//! The branch predictor is the only core unit modeled here; the pipeline
//! that drives it lives in the surrounding simulator.

/// Execution units (branch prediction unit).
pub mod units;
