//! Shared helpers for predictor tests.

use bpsim_core::config::TageConfig;
use bpsim_core::core::units::bru::BranchPredictor;

/// Address of the branch most tests train on.
///
/// Its low 11 bits are zero, so on a fresh predictor with the default tag
/// width it matches the all-zero tag of every tagged entry.
pub const IP: u64 = 0x8000_1000;

/// A TAGE geometry small enough to allocate quickly in tests.
pub fn small_tage(tagged_count: usize, min: usize, max: usize) -> TageConfig {
    TageConfig {
        tagged_count,
        tagged_loglen: 10,
        tagged_tag_width: 9,
        tagged_ctr_width: 3,
        tagged_min_hist_len: min,
        tagged_max_hist_len: max,
        seed: 0,
    }
}

/// Predicts and resolves one branch, returning the prediction.
pub fn step<P: BranchPredictor>(bp: &mut P, ip: u64, taken: bool) -> bool {
    let predicted = bp.predict(false, ip, ip.wrapping_sub(0x40));
    bp.update(predicted, taken, false, ip, ip.wrapping_sub(0x40));
    predicted
}

/// Feeds `n` resolutions of the same branch outcome and returns how many were predicted correctly.
pub fn train<P: BranchPredictor>(bp: &mut P, ip: u64, taken: bool, n: usize) -> usize {
    (0..n).filter(|_| step(bp, ip, taken) == taken).count()
}

/// Routes predictor logs to the test harness; later calls are no-ops.
///
/// Run with `RUST_LOG=debug` to see allocation and aging events.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// A reproducible stream of `(ip, taken)` pairs with random outcomes spread
/// over `sites` branch addresses.
///
/// Uses its own xorshift generator so expected counts do not depend on the
/// `rand` version.
pub fn random_branches(seed: u64, sites: u64, count: usize) -> impl Iterator<Item = (u64, bool)> {
    let mut x = seed;
    std::iter::repeat_with(move || {
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        (IP + 0x45 * ((x >> 8) % sites), (x >> 40) & 1 == 1)
    })
    .take(count)
}
