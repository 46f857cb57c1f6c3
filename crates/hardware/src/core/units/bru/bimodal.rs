//! Bimodal Branch Predictor.
//!
//! A table of 2-bit saturating counters indexed by the low bits of the branch
//! address. It serves as the base component of TAGE (the fallback whenever no
//! tagged bank matches) and can also be configured as a predictor on its own.
//!
//! # Performance
//!
//! - **Time Complexity:**
//!   - `predict()`: O(1)
//!   - `update()`: O(1)
//! - **Space Complexity:** O(2^N) 2-bit counters
//! - **Best Case:** Strongly biased branches
//! - **Worst Case:** Branches whose outcome depends on history (alternating, loops)

use super::BranchPredictor;
use crate::common::constants::{BIMODAL_MAX, BIMODAL_RESET, BIMODAL_TAKEN_THRESHOLD};
use crate::common::step_unsigned;
use crate::stats::PredictorStats;

/// Address-indexed table of 2-bit counters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BimodalTable {
    /// Counters in `[0, 3]`; taken iff `>= 2`.
    table: Vec<u8>,
    /// Mask for indexing the table.
    mask: u64,
}

impl BimodalTable {
    /// Creates a table with `2^loglen` counters, all weakly not-taken.
    pub fn new(loglen: u32) -> Self {
        let size = 1usize << loglen;
        Self {
            table: vec![BIMODAL_RESET; size],
            mask: (size as u64) - 1,
        }
    }

    #[inline]
    const fn index(&self, ip: u64) -> usize {
        (ip & self.mask) as usize
    }

    /// Predicted direction for the branch at `ip`.
    #[inline]
    pub fn predict(&self, ip: u64) -> bool {
        self.table[self.index(ip)] >= BIMODAL_TAKEN_THRESHOLD
    }

    /// Moves the counter at `ip` toward `actual`.
    #[inline]
    pub fn update(&mut self, actual: bool, ip: u64) {
        let idx = self.index(ip);
        step_unsigned(&mut self.table[idx], actual, BIMODAL_MAX);
    }

    /// Raw counter value for the branch at `ip`.
    pub fn counter(&self, ip: u64) -> u8 {
        self.table[self.index(ip)]
    }

    /// Number of counters in the table.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Always false; a table holds at least two counters.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Returns every counter to weakly not-taken.
    pub fn reset(&mut self) {
        self.table.fill(BIMODAL_RESET);
    }
}

/// Bimodal Predictor structure.
#[derive(Clone, Debug)]
pub struct BimodalPredictor {
    /// Direction table.
    table: BimodalTable,
    /// Accuracy counters.
    stats: PredictorStats,
    /// Cycles charged per misprediction.
    mispredict_penalty: u64,
}

impl BimodalPredictor {
    /// Creates a new Bimodal Predictor.
    ///
    /// # Arguments
    ///
    /// * `loglen` - log2 of the number of counters.
    /// * `mispredict_penalty` - Cycles charged per misprediction.
    pub fn new(loglen: u32, mispredict_penalty: u64) -> Self {
        Self {
            table: BimodalTable::new(loglen),
            stats: PredictorStats::default(),
            mispredict_penalty,
        }
    }

    /// Read access to the counter table.
    pub const fn table(&self) -> &BimodalTable {
        &self.table
    }
}

impl BranchPredictor for BimodalPredictor {
    /// Returns true if the 2-bit counter for `ip` is 2 or 3.
    fn predict(&mut self, _is_indirect: bool, ip: u64, _target: u64) -> bool {
        self.table.predict(ip)
    }

    /// Records the outcome and moves the counter toward it.
    fn update(&mut self, predicted: bool, actual: bool, _is_indirect: bool, ip: u64, _target: u64) {
        self.stats.record(predicted, actual);
        self.table.update(actual, ip);
    }

    fn stats(&self) -> &PredictorStats {
        &self.stats
    }

    fn reset_counters(&mut self) {
        self.stats.reset();
    }

    fn mispredict_penalty(&self) -> u64 {
        self.mispredict_penalty
    }
}
