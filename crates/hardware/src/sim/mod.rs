//! Simulation drivers.
//!
//! Provides a per-core model that owns a predictor and feeds it resolved
//! branches, and synthetic branch streams to feed it with.

/// Per-core predictor ownership and penalty accounting.
pub mod simulator;

/// Synthetic branch streams.
pub mod workload;

pub use simulator::CoreModel;
pub use workload::{Branch, Pattern, Workload};
