//! Branch prediction unit tests.
//!
//! Leaves first: folded and global history, a single tagged bank, then the
//! full TAGE predictor, the bimodal predictor and the factory.

/// Bimodal table and bimodal-only predictor.
pub mod bimodal;


/// Folded history register.
pub mod folded_history;
