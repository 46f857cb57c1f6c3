//! Branch prediction unit (BRU) implementations.
//!
//! This module contains the conditional branch direction predictors: the
//! TAGE predictor and the bimodal table it falls back on, plus the factory
//! that builds the configured predictor for a core.

pub use self::branch_predictor::BranchPredictor;

/// Bimodal table and bimodal-only predictor.
pub mod bimodal;

/// Branch predictor trait and common functionality.
pub mod branch_predictor;

/// Tagged Geometric History Length branch predictor.
pub mod tage;

use tracing::{error, info};

use self::{bimodal::BimodalPredictor, tage::TagePredictor};
use crate::common::ConfigError;
use crate::config::{BranchPredictorConfig, Config, PredictorKind};
use crate::stats::PredictorStats;

/// Enum wrapper for static dispatch of Branch Predictors.
/// This avoids vtable lookups in the critical fetch loop.
#[derive(Debug)]
pub enum BranchPredictorWrapper {
    /// Base bimodal table only.
    Bimodal(BimodalPredictor),
    /// Full TAGE predictor.
    Tage(TagePredictor),
}

impl BranchPredictorWrapper {
    /// Creates the predictor described by a single predictor section.
    ///
    /// Returns `Ok(None)` when the section selects no predictor.
    ///
    /// # Errors
    ///
    /// Returns the first parameter that fails validation.
    pub fn try_new(config: &BranchPredictorConfig) -> Result<Option<Self>, ConfigError> {
        config.validate()?;
        let penalty = config.mispredict_penalty;

        Ok(match config.kind {
            PredictorKind::None => None,
            PredictorKind::Bimodal => {
                Some(Self::Bimodal(BimodalPredictor::new(config.bimodal_loglen, penalty)))
            }
            PredictorKind::Tage => Some(Self::Tage(TagePredictor::new(
                &config.tage,
                config.bimodal_loglen,
                penalty,
            ))),
        })
    }
}

/// Builds the branch predictor for `core_id`.
///
/// Configuration problems never propagate: they are logged and the core
/// gets no predictor, which callers must treat as "branch prediction is not
/// modeled" rather than as a failure.
pub fn create(config: &Config, core_id: usize) -> Option<BranchPredictorWrapper> {
    let section = config.branch_predictor_for(core_id);
    match BranchPredictorWrapper::try_new(section) {
        Ok(Some(bp)) => {
            info!(core_id, kind = ?section.kind, "branch predictor created");
            Some(bp)
        }
        Ok(None) => {
            info!(core_id, "branch prediction disabled");
            None
        }
        Err(err) => {
            error!(core_id, %err, "invalid branch predictor configuration");
            None
        }
    }
}

/// Parses `json` and builds the branch predictor for `core_id`.
///
/// Malformed JSON is handled like any other configuration error.
pub fn create_from_json(json: &str, core_id: usize) -> Option<BranchPredictorWrapper> {
    match Config::from_json(json) {
        Ok(config) => create(&config, core_id),
        Err(err) => {
            error!(core_id, %err, "branch predictor configuration not available");
            None
        }
    }
}

impl BranchPredictor for BranchPredictorWrapper {
    #[inline(always)]
    fn predict(&mut self, is_indirect: bool, ip: u64, target: u64) -> bool {
        match self {
            Self::Bimodal(bp) => bp.predict(is_indirect, ip, target),
            Self::Tage(bp) => bp.predict(is_indirect, ip, target),
        }
    }

    #[inline(always)]
    fn update(&mut self, predicted: bool, actual: bool, is_indirect: bool, ip: u64, target: u64) {
        match self {
            Self::Bimodal(bp) => bp.update(predicted, actual, is_indirect, ip, target),
            Self::Tage(bp) => bp.update(predicted, actual, is_indirect, ip, target),
        }
    }

    fn stats(&self) -> &PredictorStats {
        match self {
            Self::Bimodal(bp) => bp.stats(),
            Self::Tage(bp) => bp.stats(),
        }
    }

    fn reset_counters(&mut self) {
        match self {
            Self::Bimodal(bp) => bp.reset_counters(),
            Self::Tage(bp) => bp.reset_counters(),
        }
    }

    fn mispredict_penalty(&self) -> u64 {
        match self {
            Self::Bimodal(bp) => bp.mispredict_penalty(),
            Self::Tage(bp) => bp.mispredict_penalty(),
        }
    }
}
