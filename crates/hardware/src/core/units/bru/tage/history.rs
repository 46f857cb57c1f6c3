//! Global history store.
//!
//! The single record of recent branch outcomes and branch-address path bits
//! that every tagged bank compresses at its own history length. Banks only
//! ever borrow it immutably; the predictor advances it once per committed
//! branch.

use std::collections::VecDeque;

/// Outcome history and path history shared by all tagged banks.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GlobalHistory {
    /// Outcome bits, newest at the front; length is fixed at construction.
    pred: VecDeque<bool>,
    /// Low address bit of each recent branch, newest in bit 0.
    path: u16,
}

impl GlobalHistory {
    /// Creates a zeroed history able to serve banks of up to `max_history_length` bits.
    ///
    /// One extra slot holds the bit that most recently left the longest
    /// window, which folded registers need to cancel it.
    pub fn new(max_history_length: usize) -> Self {
        Self {
            pred: VecDeque::from(vec![false; max_history_length + 1]),
            path: 0,
        }
    }

    /// Pushes the outcome and address of a committed branch.
    #[inline]
    pub fn update(&mut self, actual: bool, ip: u64) {
        let _ = self.pred.pop_back();
        self.pred.push_front(actual);
        self.path = (self.path << 1) | (ip & 1) as u16;
    }

    /// Outcome history, newest first.
    #[inline]
    pub const fn pred(&self) -> &VecDeque<bool> {
        &self.pred
    }

    /// Path history register.
    #[inline]
    pub const fn path(&self) -> u16 {
        self.path
    }

    /// Outcome `age` branches ago (0 is the most recent).
    pub fn bit(&self, age: usize) -> Option<bool> {
        self.pred.get(age).copied()
    }

    /// Number of outcome bits held; constant for the lifetime of the store.
    pub fn len(&self) -> usize {
        self.pred.len()
    }

    /// Always false; the store holds at least one bit.
    pub fn is_empty(&self) -> bool {
        self.pred.is_empty()
    }
}
