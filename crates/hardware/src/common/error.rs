//! Configuration error definitions.
//!
//! This module defines the error type reported while loading and validating
//! branch predictor configuration. It provides:
//! 1. **Source Errors:** Wrapping of I/O and JSON parse failures.
//! 2. **Range Errors:** One variant per parameter, carrying the offending value.
//! 3. **Error Handling:** Integration with standard Rust error traits via `thiserror`.
//!
//! None of these ever crosses the factory boundary: `create` logs them and
//! returns no predictor instead.

use thiserror::Error;

/// Errors raised while reading or validating predictor configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration text is not valid JSON for [`Config`](crate::config::Config).
    #[error("malformed configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// The number of tagged banks is outside `[1, 64]`.
    #[error("tagged_count = {0} is out of range [1, 64]")]
    TaggedCount(usize),

    /// The log2 size of each tagged table is outside `[1, 30]`.
    #[error("tagged_loglen = {0} is out of range [1, 30]")]
    TaggedLogLen(u32),

    /// The tag width is outside `[2, 16]`.
    #[error("tagged_tag_width = {0} is out of range [2, 16]")]
    TagWidth(u32),

    /// The prediction counter width is outside `[2, 8]`.
    #[error("tagged_ctr_width = {0} is out of range [2, 8]")]
    CounterWidth(u32),

    /// The history length bounds are inverted, zero, or too long.
    #[error("history lengths min = {min}, max = {max} must satisfy 1 <= min <= max <= 4096")]
    HistoryLength {
        /// Configured minimum history length.
        min: usize,
        /// Configured maximum history length.
        max: usize,
    },

    /// The log2 size of the base bimodal table is outside `[1, 30]`.
    #[error("bimodal_loglen = {0} is out of range [1, 30]")]
    BimodalLogLen(u32),
}
