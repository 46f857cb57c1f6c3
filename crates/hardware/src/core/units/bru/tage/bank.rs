//! Tagged prediction bank.
//!
//! One TAGE component: a direct-mapped table of tagged entries indexed by a
//! hash of the branch address, the path history, and the outcome history
//! folded to the bank's history length. The tag, computed from two further
//! foldings of the same history, tells a genuine match from an alias.
//!
//! Every lookup needs the current [`GlobalHistory`]; the bank borrows it per
//! call and never stores or mutates it. Index and tag are recomputed on each
//! access, so they stay valid for the whole predict/update pair as long as
//! the history only advances after the update finishes.

use super::folded::FoldedHistory;
use super::history::GlobalHistory;
use crate::common::constants::{PATH_HISTORY_BITS, USEFUL_MAX};
use crate::common::{SignedBounds, step_unsigned};

/// An entry in a tagged bank.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct TableEntry {
    /// Signed saturating prediction counter; taken iff `>= 0`.
    pub ctr: i8,
    /// 2-bit usefulness counter in `[0, 3]`.
    pub useful: u8,
    /// Partial tag, masked to the bank's tag width.
    pub tag: u16,
}

/// Outcome of looking a branch up in a single bank.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BankPrediction {
    /// Tag matched and the counter is negative.
    NotTaken,
    /// Tag matched and the counter is non-negative.
    Taken,
    /// Tag mismatch; the bank abstains.
    Miss,
}

impl BankPrediction {
    /// Predicted direction, or `None` on a miss.
    #[inline]
    pub const fn direction(self) -> Option<bool> {
        match self {
            Self::NotTaken => Some(false),
            Self::Taken => Some(true),
            Self::Miss => None,
        }
    }

    /// Returns true if the tag matched.
    #[inline]
    pub const fn is_hit(self) -> bool {
        !matches!(self, Self::Miss)
    }
}

/// One tagged TAGE component.
#[derive(Clone, Debug)]
pub struct TaggedBank {
    /// Position in the bank list; higher ids use longer histories.
    id: u32,
    /// log2 of the number of entries.
    loglen: u32,
    index_mask: u64,
    tag_mask: u16,
    ctr_bounds: SignedBounds,
    table: Vec<TableEntry>,
    /// Number of outcome bits this bank correlates on.
    history_length: usize,
    /// Outcome history folded to `loglen` bits, for the index.
    hist_idx: FoldedHistory,
    /// Outcome history folded to the tag width.
    hist_tag_0: FoldedHistory,
    /// Outcome history folded to one bit less than the tag width.
    hist_tag_1: FoldedHistory,
}

impl TaggedBank {
    /// Creates an empty bank.
    ///
    /// # Arguments
    ///
    /// * `id` - Position of the bank, 0 for the shortest history.
    /// * `loglen` - log2 of the number of entries, in `[1, 30]`.
    /// * `tag_width` - Tag width in bits, in `[2, 16]`.
    /// * `ctr_width` - Prediction counter width in bits, in `[2, 8]`.
    /// * `history_length` - Number of outcome bits folded into index and tag.
    ///
    /// # Panics
    ///
    /// Panics if a width is outside the ranges above. Configuration
    /// validation rejects such values before a bank is built.
    pub fn new(
        id: u32,
        loglen: u32,
        tag_width: u32,
        ctr_width: u32,
        history_length: usize,
    ) -> Self {
        assert!((1..=30).contains(&loglen), "bank loglen {loglen} out of range");
        assert!((2..=16).contains(&tag_width), "bank tag width {tag_width} out of range");

        let size = 1usize << loglen;
        Self {
            id,
            loglen,
            index_mask: (size as u64) - 1,
            tag_mask: ((1u32 << tag_width) - 1) as u16,
            ctr_bounds: SignedBounds::with_width(ctr_width),
            table: vec![TableEntry::default(); size],
            history_length,
            hist_idx: FoldedHistory::new(history_length, loglen),
            hist_tag_0: FoldedHistory::new(history_length, tag_width),
            hist_tag_1: FoldedHistory::new(history_length, tag_width - 1),
        }
    }

    /// Rotates `x` left by the bank id within the index width.
    ///
    /// High bits of `x` beyond the index width are added back in below the
    /// rotation point; the caller masks the final index.
    #[inline]
    const fn rotate(&self, x: u64) -> u64 {
        let r = self.id % self.loglen;
        ((x << r) & self.index_mask) + (x >> (self.loglen - r))
    }

    /// Table index of the branch at `ip` under the current history.
    pub fn index(&self, ip: u64, global: &GlobalHistory) -> usize {
        let path_bits = self.history_length.min(PATH_HISTORY_BITS as usize);
        let hist = u64::from(global.path()) & ((1u64 << path_bits) - 1);

        let hist_lo = hist & self.index_mask;
        let hist_hi = hist >> self.loglen;
        let mixed = hist_lo ^ self.rotate(hist_hi);

        // Decorrelates banks of different sizes that see the same address.
        let shift = self.loglen.abs_diff(self.id) + 1;
        let index = ip ^ (ip >> shift) ^ u64::from(self.hist_idx.get()) ^ self.rotate(mixed);

        (index & self.index_mask) as usize
    }

    /// Tag of the branch at `ip` under the current history.
    pub fn tag(&self, ip: u64) -> u16 {
        let folded = u64::from(self.hist_tag_0.get()) ^ (u64::from(self.hist_tag_1.get()) << 1);
        ((ip ^ folded) as u16) & self.tag_mask
    }

    /// Entry the branch at `ip` maps to, whether or not its tag matches.
    pub fn entry(&self, ip: u64, global: &GlobalHistory) -> &TableEntry {
        &self.table[self.index(ip, global)]
    }

    #[inline]
    fn entry_mut(&mut self, ip: u64, global: &GlobalHistory) -> &mut TableEntry {
        let idx = self.index(ip, global);
        &mut self.table[idx]
    }

    /// Looks the branch up in this bank.
    pub fn predict(&self, ip: u64, global: &GlobalHistory) -> BankPrediction {
        let entry = self.entry(ip, global);
        if entry.tag != self.tag(ip) {
            BankPrediction::Miss
        } else if entry.ctr >= 0 {
            BankPrediction::Taken
        } else {
            BankPrediction::NotTaken
        }
    }

    /// Usefulness counter of the slot `ip` maps to.
    pub fn useful(&self, ip: u64, global: &GlobalHistory) -> u8 {
        self.entry(ip, global).useful
    }

    /// Mutable usefulness counter of the slot `ip` maps to.
    ///
    /// Callers must keep the value within `[0, 3]`.
    pub fn useful_mut(&mut self, ip: u64, global: &GlobalHistory) -> &mut u8 {
        &mut self.entry_mut(ip, global).useful
    }

    /// Claims the slot `ip` maps to for this branch.
    ///
    /// The counter starts at the weakest value predicting `actual`.
    pub fn allocate(&mut self, actual: bool, ip: u64, global: &GlobalHistory) {
        let tag = self.tag(ip);
        let entry = self.entry_mut(ip, global);
        entry.tag = tag;
        entry.ctr = if actual { 0 } else { -1 };
        entry.useful = 0;
    }

    /// Decays every usefulness counter in the table.
    ///
    /// With `clear_high_bit` bit 1 is cleared (`{0,1,2,3} -> {0,1,0,1}`),
    /// otherwise bit 0 (`{0,1,2,3} -> {0,0,2,2}`).
    pub fn age(&mut self, clear_high_bit: bool) {
        let keep = if clear_high_bit { 0b01 } else { 0b10 };
        for entry in &mut self.table {
            entry.useful &= keep;
        }
    }

    /// Strengthens usefulness when this bank's prediction was right, weakens it otherwise.
    pub fn update_use(&mut self, predicted: bool, actual: bool, ip: u64, global: &GlobalHistory) {
        step_unsigned(self.useful_mut(ip, global), predicted == actual, USEFUL_MAX);
    }

    /// Moves the prediction counter toward `actual`, saturating at the counter width.
    pub fn update_ctr(&mut self, actual: bool, ip: u64, global: &GlobalHistory) {
        let bounds = self.ctr_bounds;
        bounds.step(&mut self.entry_mut(ip, global).ctr, actual);
    }

    /// Advances the folded registers after the global history has advanced.
    pub fn update_history(&mut self, global: &GlobalHistory) {
        let pred = global.pred();
        self.hist_idx.update(pred);
        self.hist_tag_0.update(pred);
        self.hist_tag_1.update(pred);
    }

    /// Position of the bank, 0 for the shortest history.
    pub const fn id(&self) -> u32 {
        self.id
    }

    /// Number of outcome bits the bank correlates on.
    pub const fn history_length(&self) -> usize {
        self.history_length
    }

    /// Saturation range of the prediction counters.
    pub const fn ctr_bounds(&self) -> SignedBounds {
        self.ctr_bounds
    }

    /// All table entries, in index order.
    pub fn entries(&self) -> &[TableEntry] {
        &self.table
    }
}
