//! Branch prediction statistics.
//!
//! Every predictor records whether each resolved branch matched its
//! prediction. This module tracks:
//! 1. **Outcome counts:** Correct and incorrect predictions.
//! 2. **Derived metrics:** Accuracy, misses per kilo-branch, and estimated penalty cycles.

use std::fmt;

/// Correct/incorrect prediction counters for one predictor instance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PredictorStats {
    /// Number of branch predictions that were correct.
    pub correct: u64,
    /// Number of branch predictions that were wrong (mispredictions).
    pub incorrect: u64,
}

impl PredictorStats {
    /// Records one resolved branch.
    #[inline]
    pub const fn record(&mut self, predicted: bool, actual: bool) {
        if predicted == actual {
            self.correct += 1;
        } else {
            self.incorrect += 1;
        }
    }

    /// Clears both counters.
    pub const fn reset(&mut self) {
        self.correct = 0;
        self.incorrect = 0;
    }

    /// Total number of resolved branches.
    pub const fn lookups(&self) -> u64 {
        self.correct + self.incorrect
    }

    /// Fraction of correct predictions in `[0, 1]`; zero before any branch resolves.
    pub fn accuracy(&self) -> f64 {
        let total = self.lookups();
        if total == 0 {
            0.0
        } else {
            self.correct as f64 / total as f64
        }
    }

    /// Mispredictions per thousand resolved branches.
    pub fn mpkb(&self) -> f64 {
        let total = self.lookups();
        if total == 0 {
            0.0
        } else {
            1000.0 * self.incorrect as f64 / total as f64
        }
    }

    /// Cycles lost to mispredictions at the given per-miss penalty.
    pub const fn penalty_cycles(&self, mispredict_penalty: u64) -> u64 {
        self.incorrect * mispredict_penalty
    }
}

impl fmt::Display for PredictorStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "BRANCH PREDICTION")?;
        writeln!(f, "  bp.lookups             {}", self.lookups())?;
        writeln!(f, "  bp.correct             {}", self.correct)?;
        writeln!(f, "  bp.mispredicts         {}", self.incorrect)?;
        writeln!(f, "  bp.mpkb                {:.3}", self.mpkb())?;
        write!(f, "  bp.accuracy            {:.2}%", 100.0 * self.accuracy())
    }
}
