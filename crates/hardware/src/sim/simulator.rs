//! Per-core branch prediction model.
//!
//! Owns the predictor built for one core and plays the core's side of the
//! contract: one `predict` followed by its matching `update` per branch,
//! charging the mispredict penalty on every wrong direction.

use tracing::trace;

use super::workload::Branch;
use crate::config::Config;
use crate::core::units::bru::{self, BranchPredictor, BranchPredictorWrapper};

/// Branch prediction state of a single simulated core.
#[derive(Debug)]
pub struct CoreModel {
    core_id: usize,
    /// `None` when branch prediction is not modeled for this core.
    predictor: Option<BranchPredictorWrapper>,
    branches: u64,
    penalty_cycles: u64,
}

impl CoreModel {
    /// Builds the core's predictor from configuration.
    pub fn new(config: &Config, core_id: usize) -> Self {
        Self::with_predictor(core_id, bru::create(config, core_id))
    }

    /// Wraps an already-built predictor (or none).
    pub const fn with_predictor(core_id: usize, predictor: Option<BranchPredictorWrapper>) -> Self {
        Self {
            core_id,
            predictor,
            branches: 0,
            penalty_cycles: 0,
        }
    }

    /// Predicts and then resolves one branch.
    ///
    /// Returns whether the prediction was correct, or `None` if the core has
    /// no predictor.
    pub fn resolve(&mut self, branch: Branch) -> Option<bool> {
        let bp = self.predictor.as_mut()?;
        self.branches += 1;

        let predicted = bp.predict(branch.is_indirect, branch.ip, branch.target);
        bp.update(predicted, branch.taken, branch.is_indirect, branch.ip, branch.target);

        let correct = predicted == branch.taken;
        if !correct {
            self.penalty_cycles += bp.mispredict_penalty();
            trace!(core_id = self.core_id, ip = branch.ip, "mispredicted");
        }
        Some(correct)
    }

    /// Resolves every branch of `stream` in order.
    pub fn run(&mut self, stream: impl IntoIterator<Item = Branch>) {
        for branch in stream {
            if self.resolve(branch).is_none() {
                break;
            }
        }
    }

    /// Id of the simulated core.
    pub const fn core_id(&self) -> usize {
        self.core_id
    }

    /// The core's predictor, if one is modeled.
    pub const fn predictor(&self) -> Option<&BranchPredictorWrapper> {
        self.predictor.as_ref()
    }

    /// Branches resolved through the predictor.
    pub const fn branches(&self) -> u64 {
        self.branches
    }

    /// Cycles lost to mispredictions so far.
    pub const fn penalty_cycles(&self) -> u64 {
        self.penalty_cycles
    }
}
