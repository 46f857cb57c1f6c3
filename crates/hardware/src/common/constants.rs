//! Constants shared by the predictor models.

/// Width of the path history register in bits.
pub const PATH_HISTORY_BITS: u32 = 16;

/// log2 of the number of committed branches between two useful-counter aging passes.
pub const AGING_PERIOD_BITS: u32 = 19;

/// Mask selecting the tick counter bits below the aging period.
pub const AGING_PERIOD_MASK: u32 = (1 << AGING_PERIOD_BITS) - 1;

/// Maximum value of a 2-bit usefulness counter.
pub const USEFUL_MAX: u8 = 3;

/// Maximum value of a 2-bit bimodal counter.
pub const BIMODAL_MAX: u8 = 3;

/// Reset value of a bimodal counter (weakly not-taken).
pub const BIMODAL_RESET: u8 = 1;

/// Bimodal counter value at or above which the branch is predicted taken.
pub const BIMODAL_TAKEN_THRESHOLD: u8 = 2;

/// Widest compressed length a folded history register supports.
pub const MAX_FOLDED_BITS: u32 = 32;
