//! TAGE (Tagged Geometric History Length) Branch Predictor.
//!
//! TAGE uses a base bimodal predictor and multiple tagged banks indexed with
//! geometrically increasing history lengths. It provides high accuracy by
//! matching long history patterns while falling back to shorter histories
//! or the base predictor when necessary.
//!
//! The pieces, leaves first:
//! - [`FoldedHistory`]: O(1) compression of a long history window.
//! - [`GlobalHistory`]: the outcome and path history every bank reads.
//! - [`TaggedBank`]: one tagged table with its own folded registers.
//! - [`TagePredictor`]: selection, allocation, aging, and history advance.
//!
//! # Performance
//!
//! - **Time Complexity:**
//!   - `predict()`: O(B) where B is the number of banks (typically 4-12)
//!   - `update()`: O(B), plus O(T × B) once every 2^19 branches for aging
//! - **Space Complexity:** O(T × B) where T is table size per bank
//! - **Hardware Cost:** High - multiple table lookups, priority selection
//! - **Best Case:** Complex history-correlated patterns with varying lengths
//! - **Worst Case:** Random or completely uncorrelated branches (~50% accuracy)

/// Tagged prediction bank.
pub mod bank;

/// Folded history register.
pub mod folded;

/// Global outcome and path history.
pub mod history;

pub use self::bank::{BankPrediction, TableEntry, TaggedBank};
pub use self::folded::FoldedHistory;
pub use self::history::GlobalHistory;

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use tracing::{debug, trace};

use super::BranchPredictor;
use super::bimodal::BimodalTable;
use crate::common::constants::{AGING_PERIOD_BITS, AGING_PERIOD_MASK};
use crate::config::TageConfig;
use crate::stats::PredictorStats;

/// Computes the history length of every bank.
///
/// Bank 0 gets `min`; each following bank multiplies the previous length by
/// `q = (max / min)^(1 / (count - 1))`, rounds to nearest, and clamps to `max`.
///
/// ```
/// use bpsim_core::core::units::bru::tage::history_lengths;
///
/// assert_eq!(history_lengths(5, 130, 4), vec![5, 15, 44, 130]);
/// ```
pub fn history_lengths(min: usize, max: usize, count: usize) -> Vec<usize> {
    let q = if count > 1 {
        (((max as f64).ln() - (min as f64).ln()) / (count - 1) as f64).exp()
    } else {
        1.0
    };

    let mut lengths = Vec::with_capacity(count);
    let mut len = min;
    for bank in 0..count {
        if bank > 0 {
            len = (len as f64 * q + 0.5) as usize;
        }
        len = len.min(max);
        lengths.push(len);
    }
    lengths
}

/// Banks that matched the last predicted branch.
///
/// Written by `predict` and consumed by the matching `update`; a second
/// `predict` in between overwrites it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Bridge {
    /// Longest-history bank whose tag matched, if any.
    pub hit_bank: Option<usize>,
    /// Next shorter bank whose tag matched, if any.
    pub alt_bank: Option<usize>,
}

/// TAGE Predictor structure.
///
/// Generic over the random source used to break ties when choosing a bank
/// to allocate into; [`TagePredictor::new`] seeds a [`StdRng`] from the
/// configuration so runs are reproducible.
#[derive(Debug)]
pub struct TagePredictor<R = StdRng> {
    /// Base bimodal predictor table.
    base: BimodalTable,
    /// Tagged component banks, ascending history length.
    banks: Vec<TaggedBank>,
    /// Global history read by every bank.
    global: GlobalHistory,
    /// Hit/alternate banks carried from `predict` to `update`.
    bridge: Bridge,
    /// Committed branch count, drives periodic aging.
    tick: u32,
    /// Allocation tie-break source.
    rng: R,
    /// Accuracy counters.
    stats: PredictorStats,
    /// Cycles charged per misprediction.
    mispredict_penalty: u64,
}

impl TagePredictor<StdRng> {
    /// Creates a new TAGE Predictor based on configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Tagged bank geometry, history range, and RNG seed.
    /// * `bimodal_loglen` - log2 of the base table size.
    /// * `mispredict_penalty` - Cycles charged per misprediction.
    ///
    /// # Panics
    ///
    /// Panics on parameters that [`TageConfig::validate`] rejects.
    pub fn new(config: &TageConfig, bimodal_loglen: u32, mispredict_penalty: u64) -> Self {
        let rng = StdRng::seed_from_u64(config.seed);
        Self::with_rng(config, bimodal_loglen, mispredict_penalty, rng)
    }
}

impl<R: RngCore> TagePredictor<R> {
    /// Creates a TAGE Predictor drawing allocation tie-breaks from `rng`.
    ///
    /// # Panics
    ///
    /// Panics on parameters that [`TageConfig::validate`] rejects.
    pub fn with_rng(
        config: &TageConfig,
        bimodal_loglen: u32,
        mispredict_penalty: u64,
        rng: R,
    ) -> Self {
        let lengths = history_lengths(
            config.tagged_min_hist_len,
            config.tagged_max_hist_len,
            config.tagged_count,
        );
        debug!(?lengths, loglen = config.tagged_loglen, "building TAGE banks");

        let banks = lengths
            .iter()
            .enumerate()
            .map(|(id, &len)| {
                TaggedBank::new(
                    id as u32,
                    config.tagged_loglen,
                    config.tagged_tag_width,
                    config.tagged_ctr_width,
                    len,
                )
            })
            .collect();

        Self {
            base: BimodalTable::new(bimodal_loglen),
            banks,
            global: GlobalHistory::new(config.tagged_max_hist_len),
            bridge: Bridge::default(),
            tick: 0,
            rng,
            stats: PredictorStats::default(),
            mispredict_penalty,
        }
    }

    /// Re-evaluates a bank (or the base table for `None`) under the current history.
    ///
    /// Returns `None` if the bank no longer matches.
    fn recompute(&self, bank: Option<usize>, ip: u64) -> Option<bool> {
        match bank {
            Some(id) => self.banks[id].predict(ip, &self.global).direction(),
            None => Some(self.base.predict(ip)),
        }
    }

    /// Decays usefulness in every bank once per aging period.
    fn tick_aging(&mut self) {
        self.tick = self.tick.wrapping_add(1);
        if self.tick & AGING_PERIOD_MASK != 0 {
            return;
        }
        let clear_high_bit = (self.tick >> AGING_PERIOD_BITS) & 1 == 1;
        debug!(tick = self.tick, clear_high_bit, "aging usefulness counters");
        for bank in &mut self.banks {
            bank.age(clear_high_bit);
        }
    }

    /// On a misprediction, claims a free slot in a bank with longer history
    /// than `hit_bank`, or decays the slots that were not free.
    fn allocate(&mut self, hit_bank: Option<usize>, actual: bool, ip: u64) {
        let first = hit_bank.map_or(0, |hit| hit + 1);
        if first >= self.banks.len() {
            return;
        }

        let mut candidates = Vec::with_capacity(self.banks.len() - first);
        for id in first..self.banks.len() {
            if self.banks[id].useful(ip, &self.global) == 0 {
                candidates.push(id);
            }
        }

        if candidates.is_empty() {
            debug!(ip, first, "no free slot, decaying usefulness");
            for bank in &mut self.banks[first..] {
                let useful = bank.useful_mut(ip, &self.global);
                *useful = useful.saturating_sub(1);
            }
            return;
        }

        // Candidates ascend in history length; slot i is drawn with weight
        // 1/4 except the last, which absorbs the remaining probability.
        let slot = ((self.rng.next_u32() & 3) as usize).min(candidates.len() - 1);
        let bank = candidates[slot];
        trace!(ip, bank, "allocating entry");
        self.banks[bank].allocate(actual, ip, &self.global);
    }

    /// Tagged banks, ascending history length.
    pub fn banks(&self) -> &[TaggedBank] {
        &self.banks
    }

    /// Base bimodal table.
    pub const fn base(&self) -> &BimodalTable {
        &self.base
    }

    /// Global history as of the last committed branch.
    pub const fn global_history(&self) -> &GlobalHistory {
        &self.global
    }

    /// Banks recorded by the last `predict`.
    pub const fn bridge(&self) -> Bridge {
        self.bridge
    }

    /// Number of committed branches, modulo 2^32.
    pub const fn tick(&self) -> u32 {
        self.tick
    }
}

impl<R: RngCore> BranchPredictor for TagePredictor<R> {
    /// Predicts branch direction.
    ///
    /// Searches every tagged bank for a tag match and takes the direction of
    /// the longest-history match (provider). If no bank matches, uses the
    /// base predictor.
    fn predict(&mut self, _is_indirect: bool, ip: u64, _target: u64) -> bool {
        let mut hit: Option<(usize, bool)> = None;
        let mut alt_bank = None;

        for (id, bank) in self.banks.iter().enumerate() {
            if let Some(taken) = bank.predict(ip, &self.global).direction() {
                alt_bank = hit.map(|(prev, _)| prev);
                hit = Some((id, taken));
            }
        }

        self.bridge = Bridge {
            hit_bank: hit.map(|(id, _)| id),
            alt_bank,
        };

        hit.map_or_else(|| self.base.predict(ip), |(_, taken)| taken)
    }

    /// Updates the predictor state.
    ///
    /// Adjusts the provider's usefulness when it disagreed with the
    /// alternate, allocates a longer-history entry on a misprediction,
    /// trains the provider (and the alternate while the provider is unproven)
    /// and the base table, then advances the global and folded histories.
    ///
    /// # Panics
    ///
    /// Panics if `predicted` is not what the matching `predict` returned,
    /// which means the predict/update pairing was broken.
    fn update(&mut self, predicted: bool, actual: bool, _is_indirect: bool, ip: u64, _target: u64) {
        self.stats.record(predicted, actual);
        self.tick_aging();

        let Bridge { hit_bank, alt_bank } = self.bridge;
        let hit_pred = self.recompute(hit_bank, ip);
        let alt_pred = self.recompute(alt_bank, ip);
        assert_eq!(
            hit_pred,
            Some(predicted),
            "TAGE: prediction for {ip:#x} changed between predict and update"
        );

        if let Some(hit) = hit_bank {
            if hit_pred != alt_pred {
                self.banks[hit].update_use(predicted, actual, ip, &self.global);
            }
        }

        if predicted != actual {
            self.allocate(hit_bank, actual, ip);
        }

        if let Some(hit) = hit_bank {
            self.banks[hit].update_ctr(actual, ip, &self.global);
            if let Some(alt) = alt_bank {
                if self.banks[hit].useful(ip, &self.global) == 0 {
                    self.banks[alt].update_ctr(actual, ip, &self.global);
                }
            }
        }

        self.base.update(actual, ip);

        self.global.update(actual, ip);
        for bank in &mut self.banks {
            bank.update_history(&self.global);
        }
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
