//! Common utilities and types used throughout the predictor models.
//!
//! This module provides the building blocks shared by every predictor. It includes:
//! 1. **Constants:** Aging period, counter limits, and register widths.
//! 2. **Counters:** Saturating arithmetic for narrow signed and unsigned fields.
//! 3. **Error Handling:** The configuration error type.

/// Constants shared by the predictor models.
pub mod constants;

/// Saturating counter helpers.
pub mod counter;

/// Error types for configuration loading and validation.
pub mod error;

pub use counter::{SignedBounds, step_unsigned};
pub use error::ConfigError;
