//! Synthetic branch streams.
//!
//! Generates resolved conditional branches with well-known behavior so a
//! predictor can be exercised without an instruction-level core model.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A resolved conditional branch, as the core reports it to the predictor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Branch {
    /// Address of the branch instruction.
    pub ip: u64,
    /// Branch target address.
    pub target: u64,
    /// Whether the branch was taken.
    pub taken: bool,
    /// Whether the branch is an indirect jump.
    pub is_indirect: bool,
}

/// Behavior of every branch site in a synthetic stream.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pattern {
    /// Always taken.
    AlwaysTaken,
    /// Taken, not-taken, taken, ...
    Alternating,
    /// Taken `period - 1` times, then not-taken once (a counted loop back-edge).
    Loop {
        /// Trip count of the loop.
        period: u32,
    },
    /// Taken with probability one half, from a seeded generator.
    Random {
        /// Generator seed.
        seed: u64,
    },
}

/// Stream of branches cycling over a fixed set of branch sites.
#[derive(Debug)]
pub struct Workload {
    pattern: Pattern,
    sites: Vec<u64>,
    remaining: usize,
    step: u64,
    rng: StdRng,
}

impl Workload {
    /// Base address of the first synthetic branch site.
    pub const BASE_IP: u64 = 0x8000_1000;

    /// Creates a stream of `count` branches spread round-robin over `sites` addresses.
    pub fn new(pattern: Pattern, sites: usize, count: usize) -> Self {
        let seed = match pattern {
            Pattern::Random { seed } => seed,
            _ => 0,
        };
        Self {
            pattern,
            sites: (0..sites.max(1) as u64).map(|i| Self::BASE_IP + 0x45 * i).collect(),
            remaining: count,
            step: 0,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    fn outcome(&mut self, occurrence: u64) -> bool {
        match self.pattern {
            Pattern::AlwaysTaken => true,
            Pattern::Alternating => occurrence % 2 == 0,
            Pattern::Loop { period } => {
                let period = u64::from(period.max(1));
                occurrence % period != period - 1
            }
            Pattern::Random { .. } => self.rng.gen_bool(0.5),
        }
    }
}

impl Iterator for Workload {
    type Item = Branch;

    fn next(&mut self) -> Option<Branch> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        let n = self.sites.len() as u64;
        let ip = self.sites[(self.step % n) as usize];
        let occurrence = self.step / n;
        self.step += 1;

        let taken = self.outcome(occurrence);
        Some(Branch {
            ip,
            target: ip.wrapping_sub(0x40),
            taken,
            is_indirect: false,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Workload {}
