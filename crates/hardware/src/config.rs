//! Configuration system for the branch predictor models.
//!
//! This module defines all configuration structures and enums used to parameterize
//! the predictors. It provides:
//! 1. **Defaults:** Baseline predictor geometry (bank count, widths, history range).
//! 2. **Structures:** A root config with a default predictor section and per-core overrides.
//! 3. **Validation:** Range checks that turn bad parameters into [`ConfigError`]s.
//!
//! Configuration is supplied as JSON (see [`Config::from_json`]) or use `Config::default()`.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::common::ConfigError;

/// Default configuration constants for the predictors.
///
/// These values define the baseline predictor when not explicitly
/// overridden in the JSON configuration.
mod defaults {
    /// Cycles lost on a branch misprediction.
    pub const MISPREDICT_PENALTY: u64 = 8;

    /// log2 of the base bimodal table size (16K entries).
    pub const BIMODAL_LOGLEN: u32 = 14;

    /// Number of tagged banks.
    pub const TAGGED_COUNT: usize = 8;

    /// log2 of each tagged table size (4K entries).
    pub const TAGGED_LOGLEN: u32 = 12;

    /// Tag width in bits.
    pub const TAGGED_TAG_WIDTH: u32 = 11;

    /// Prediction counter width in bits.
    pub const TAGGED_CTR_WIDTH: u32 = 3;

    /// History length of the shortest bank.
    pub const TAGGED_MIN_HIST_LEN: usize = 4;

    /// History length of the longest bank.
    pub const TAGGED_MAX_HIST_LEN: usize = 640;

    /// Seed of the allocation tie-break random source.
    pub const SEED: u64 = 0;

    /// Upper bound on the number of tagged banks.
    pub const MAX_TAGGED_COUNT: usize = 64;

    /// Upper bound on any table's log2 size.
    pub const MAX_LOGLEN: u32 = 30;

    /// Upper bound on the maximum history length.
    pub const MAX_HIST_LEN: usize = 4096;
}

/// Branch predictor implementation types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum PredictorKind {
    /// No branch predictor is modeled for the core.
    #[serde(alias = "none")]
    None,
    /// Base bimodal table on its own.
    #[serde(alias = "bimodal")]
    Bimodal,
    /// Tagged Geometric History Length predictor.
    #[default]
    #[serde(alias = "TAGE", alias = "tage")]
    Tage,
}

/// Root configuration structure.
///
/// # Examples
///
/// ```
/// use bpsim_core::config::{Config, PredictorKind};
///
/// let json = r#"{
///     "branch_predictor": {
///         "kind": "Tage",
///         "mispredict_penalty": 12,
///         "tage": { "tagged_count": 4, "tagged_max_hist_len": 128 }
///     },
///     "cores": { "1": { "kind": "None" } }
/// }"#;
///
/// let config = Config::from_json(json).unwrap();
/// assert_eq!(config.branch_predictor_for(0).mispredict_penalty, 12);
/// assert_eq!(config.branch_predictor_for(1).kind, PredictorKind::None);
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Predictor settings for every core without an override
    #[serde(default)]
    pub branch_predictor: BranchPredictorConfig,

    /// Per-core overrides, keyed by core id
    #[serde(default)]
    pub cores: BTreeMap<usize, BranchPredictorConfig>,
}

impl Config {
    /// Parses a configuration from JSON text.
    ///
    /// Missing fields take their defaults; values are not range-checked here
    /// (see [`BranchPredictorConfig::validate`]).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if the text is not a valid configuration.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, otherwise as
    /// [`Config::from_json`].
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Returns the predictor section that applies to `core_id`.
    pub fn branch_predictor_for(&self, core_id: usize) -> &BranchPredictorConfig {
        self.cores.get(&core_id).unwrap_or(&self.branch_predictor)
    }
}

/// Branch predictor selection and shared parameters.
#[derive(Debug, Clone, Deserialize)]
pub struct BranchPredictorConfig {
    /// Branch predictor type
    #[serde(default)]
    pub kind: PredictorKind,

    /// Cycles charged for a misprediction
    #[serde(default = "BranchPredictorConfig::default_mispredict_penalty")]
    pub mispredict_penalty: u64,

    /// log2 of the base bimodal table size
    #[serde(default = "BranchPredictorConfig::default_bimodal_loglen")]
    pub bimodal_loglen: u32,

    /// TAGE predictor configuration
    #[serde(default)]
    pub tage: TageConfig,
}

impl BranchPredictorConfig {
    /// Returns the default mispredict penalty in cycles.
    const fn default_mispredict_penalty() -> u64 {
        defaults::MISPREDICT_PENALTY
    }

    /// Returns the default bimodal table size (log2).
    const fn default_bimodal_loglen() -> u32 {
        defaults::BIMODAL_LOGLEN
    }

    /// Checks every parameter the selected predictor kind will use.
    ///
    /// # Errors
    ///
    /// Returns the first out-of-range parameter.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.kind == PredictorKind::None {
            return Ok(());
        }
        if !(1..=defaults::MAX_LOGLEN).contains(&self.bimodal_loglen) {
            return Err(ConfigError::BimodalLogLen(self.bimodal_loglen));
        }
        if self.kind == PredictorKind::Tage {
            self.tage.validate()?;
        }
        Ok(())
    }
}

impl Default for BranchPredictorConfig {
    fn default() -> Self {
        Self {
            kind: PredictorKind::default(),
            mispredict_penalty: defaults::MISPREDICT_PENALTY,
            bimodal_loglen: defaults::BIMODAL_LOGLEN,
            tage: TageConfig::default(),
        }
    }
}

/// TAGE (Tagged Geometric) predictor configuration.
///
/// Every tagged bank shares the same table geometry; only the history length
/// differs, following a geometric series from `tagged_min_hist_len` to
/// `tagged_max_hist_len`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TageConfig {
    /// Number of tagged banks
    #[serde(default = "TageConfig::default_tagged_count")]
    pub tagged_count: usize,

    /// log2 of entries per tagged table
    #[serde(default = "TageConfig::default_tagged_loglen")]
    pub tagged_loglen: u32,

    /// Tag width in bits
    #[serde(default = "TageConfig::default_tag_width")]
    pub tagged_tag_width: u32,

    /// Signed prediction counter width in bits
    #[serde(default = "TageConfig::default_ctr_width")]
    pub tagged_ctr_width: u32,

    /// History length of bank 0
    #[serde(default = "TageConfig::default_min_hist_len")]
    pub tagged_min_hist_len: usize,

    /// History length cap for the last bank
    #[serde(default = "TageConfig::default_max_hist_len")]
    pub tagged_max_hist_len: usize,

    /// Seed for the allocation tie-break random source
    #[serde(default = "TageConfig::default_seed")]
    pub seed: u64,
}

impl TageConfig {
    /// Returns the default number of tagged banks.
    const fn default_tagged_count() -> usize {
        defaults::TAGGED_COUNT
    }

    /// Returns the default tagged table size (log2).
    const fn default_tagged_loglen() -> u32 {
        defaults::TAGGED_LOGLEN
    }

    /// Returns the default tag width.
    const fn default_tag_width() -> u32 {
        defaults::TAGGED_TAG_WIDTH
    }

    /// Returns the default prediction counter width.
    const fn default_ctr_width() -> u32 {
        defaults::TAGGED_CTR_WIDTH
    }

    /// Returns the default shortest history length.
    const fn default_min_hist_len() -> usize {
        defaults::TAGGED_MIN_HIST_LEN
    }

    /// Returns the default longest history length.
    const fn default_max_hist_len() -> usize {
        defaults::TAGGED_MAX_HIST_LEN
    }

    /// Returns the default RNG seed.
    const fn default_seed() -> u64 {
        defaults::SEED
    }

    /// Checks that every parameter lies in the range the predictor supports.
    ///
    /// The bounds keep every folded history width within 32 bits, every tag
    /// within a `u16`, and every counter within an `i8`.
    ///
    /// # Errors
    ///
    /// Returns the first out-of-range parameter.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=defaults::MAX_TAGGED_COUNT).contains(&self.tagged_count) {
            return Err(ConfigError::TaggedCount(self.tagged_count));
        }
        if !(1..=defaults::MAX_LOGLEN).contains(&self.tagged_loglen) {
            return Err(ConfigError::TaggedLogLen(self.tagged_loglen));
        }
        if !(2..=16).contains(&self.tagged_tag_width) {
            return Err(ConfigError::TagWidth(self.tagged_tag_width));
        }
        if !(2..=8).contains(&self.tagged_ctr_width) {
            return Err(ConfigError::CounterWidth(self.tagged_ctr_width));
        }
        let (min, max) = (self.tagged_min_hist_len, self.tagged_max_hist_len);
        if min == 0 || min > max || max > defaults::MAX_HIST_LEN {
            return Err(ConfigError::HistoryLength { min, max });
        }
        Ok(())
    }
}

impl Default for TageConfig {
    fn default() -> Self {
        Self {
            tagged_count: defaults::TAGGED_COUNT,
            tagged_loglen: defaults::TAGGED_LOGLEN,
            tagged_tag_width: defaults::TAGGED_TAG_WIDTH,
            tagged_ctr_width: defaults::TAGGED_CTR_WIDTH,
            tagged_min_hist_len: defaults::TAGGED_MIN_HIST_LEN,
            tagged_max_hist_len: defaults::TAGGED_MAX_HIST_LEN,
            seed: defaults::SEED,
        }
    }
}
