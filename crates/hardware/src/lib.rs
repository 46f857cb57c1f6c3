//! TAGE branch predictor model library.
//!
//! This crate models the conditional branch predictor of a cycle-level CPU core simulator:
//! 1. **Core:** The TAGE predictor (folded histories, tagged banks, allocation and aging) and its bimodal base.
//! 2. **Factory:** Config-driven construction of the predictor for each core, degrading to none on bad input.
//! 3. **Simulation:** A per-core driver with mispredict-penalty accounting and synthetic branch streams.
//! 4. **Support:** Configuration, error types, and prediction statistics.

/// Common types and constants (counters, errors, widths).
pub mod common;
/// Predictor configuration (defaults, per-core overrides, validation).
pub mod config;
/// CPU core components (branch prediction unit).
pub mod core;
/// Per-core driver and synthetic workloads.
pub mod sim;
/// Prediction accuracy statistics.
pub mod stats;

/// Root configuration type; use `Config::default()` or parse from JSON.
pub use crate::config::Config;
/// Predictor contract shared by every implementation.
pub use crate::core::units::bru::BranchPredictor;
/// TAGE predictor type.
pub use crate::core::units::bru::tage::TagePredictor;
