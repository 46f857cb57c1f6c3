//! Branch Predictor Interface.
//!
//! This module defines the `BranchPredictor` trait that all direction
//! predictors adhere to. The core model calls `predict` when a conditional
//! branch is fetched and `update` once the branch resolves, strictly
//! alternating, one branch at a time.

use crate::stats::PredictorStats;

/// Trait for conditional branch direction predictors.
///
/// A predictor instance belongs to exactly one simulated core. Between a
/// `predict` and its matching `update` no other branch may be predicted.
pub trait BranchPredictor {
    /// Predicts whether the branch at `ip` will be taken.
    ///
    /// # Arguments
    ///
    /// * `is_indirect` - Whether the branch is an indirect jump
    /// * `ip` - Address of the branch instruction
    /// * `target` - Target address of the branch, if known
    ///
    /// # Returns
    ///
    /// `true` if the branch is predicted taken.
    fn predict(&mut self, is_indirect: bool, ip: u64, target: u64) -> bool;

    /// Trains the predictor with the resolved outcome of the last predicted branch.
    ///
    /// # Arguments
    ///
    /// * `predicted` - The direction returned by the matching `predict` call
    /// * `actual` - Whether the branch was actually taken
    /// * `is_indirect` - Whether the branch is an indirect jump
    /// * `ip` - Address of the branch instruction
    /// * `target` - Resolved target address
    fn update(&mut self, predicted: bool, actual: bool, is_indirect: bool, ip: u64, target: u64);

    /// Returns the correct/incorrect counters accumulated since the last reset.
    fn stats(&self) -> &PredictorStats;

    /// Clears the correct/incorrect counters without touching predictor state.
    fn reset_counters(&mut self);

    /// Cycles charged for each misprediction.
    fn mispredict_penalty(&self) -> u64;
}
