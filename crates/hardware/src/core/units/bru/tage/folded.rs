//! Folded history register.
//!
//! A cyclic shift register that keeps the XOR-fold of the newest
//! `orig_length` global history bits compressed into `comp_length` bits.
//! Each committed branch costs O(1): the newest bit is shifted in, the bit
//! leaving the window is cancelled at the position it was folded into, and
//! the bit shifted out the top wraps around to bit 0.

use std::ops::Index;

use crate::common::constants::MAX_FOLDED_BITS;

/// Compressed view of a sliding window over the global history.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FoldedHistory {
    state: u32,
    orig_length: usize,
    comp_length: u32,
    output_point: u32,
}

impl FoldedHistory {
    /// Creates a register folding `orig_length` history bits into `comp_length` bits.
    ///
    /// # Panics
    ///
    /// Panics if `comp_length` is not in `[1, 32]`.
    pub fn new(orig_length: usize, comp_length: u32) -> Self {
        assert!(
            (1..=MAX_FOLDED_BITS).contains(&comp_length),
            "folded history width {comp_length} out of range [1, {MAX_FOLDED_BITS}]"
        );
        Self {
            state: 0,
            orig_length,
            comp_length,
            output_point: (orig_length % comp_length as usize) as u32,
        }
    }

    /// Shifts the newest history bit in and the expiring one out.
    ///
    /// `history[0]` must be the outcome just pushed and `history[orig_length]`
    /// the one that just left the window, i.e. the store must already have
    /// advanced for this branch.
    #[inline]
    pub fn update<H>(&mut self, history: &H)
    where
        H: Index<usize, Output = bool> + ?Sized,
    {
        let mask = (1u64 << self.comp_length) - 1;
        let mut s = (u64::from(self.state) << 1) | u64::from(history[0]);
        s ^= u64::from(history[self.orig_length]) << self.output_point;
        s ^= s >> self.comp_length;
        self.state = (s & mask) as u32;
    }

    /// Current folded value, always below `2^comp_length`.
    #[inline]
    pub const fn get(&self) -> u32 {
        self.state
    }

    /// Length of the history window being folded.
    pub const fn orig_length(&self) -> usize {
        self.orig_length
    }

    /// Width of the folded value in bits.
    pub const fn comp_length(&self) -> u32 {
        self.comp_length
    }
}
