//! # Folded History Register Tests
//!
//! The register must always hold the XOR-fold of exactly the newest
//! `orig_length` history bits, stay within `comp_length` bits, and depend on
//! nothing but the bits it was fed.

use bpsim_core::core::units::bru::tage::FoldedHistory;
use proptest::prelude::*;

/// Folds the newest `orig` bits directly: the bit of age `a` lands at `a mod comp`.
fn reference_fold(history: &[bool], orig: usize, comp: u32) -> u32 {
    history
        .iter()
        .take(orig)
        .enumerate()
        .fold(0u32, |acc, (age, &bit)| acc ^ (u32::from(bit) << (age % comp as usize)))
}

/// Pushes `bits` through a sliding window of `orig + 1` slots, newest first.
fn feed(fh: &mut FoldedHistory, window: &mut Vec<bool>, bits: &[bool]) {
    for &bit in bits {
        let _ = window.pop();
        window.insert(0, bit);
        fh.update(window.as_slice());
    }
}

#[test]
fn fresh_register_is_zero() {
    let fh = FoldedHistory::new(640, 12);
    assert_eq!(fh.get(), 0);
    assert_eq!(fh.orig_length(), 640);
    assert_eq!(fh.comp_length(), 12);
}

/// A single taken outcome rotates through the register and is cancelled
/// once it leaves the window.
#[test]
fn single_bit_enters_rotates_and_leaves() {
    let (orig, comp) = (5, 3);
    let mut window = vec![false; orig + 1];
    let mut fh = FoldedHistory::new(orig, comp);

    feed(&mut fh, &mut window, &[true]);
    assert_eq!(fh.get(), 0b001);
    feed(&mut fh, &mut window, &[false]);
    assert_eq!(fh.get(), 0b010);
    feed(&mut fh, &mut window, &[false, false]);
    // Age 3 wraps to bit 0.
    assert_eq!(fh.get(), 0b001);
    feed(&mut fh, &mut window, &[false, false]);
    assert_eq!(fh.get(), 0);
}

#[test]
#[should_panic(expected = "out of range")]
fn zero_width_rejected() {
    let _ = FoldedHistory::new(8, 0);
}

#[test]
#[should_panic(expected = "out of range")]
fn over_wide_rejected() {
    let _ = FoldedHistory::new(8, 33);
}

proptest! {
    #[test]
    fn matches_direct_fold(
        orig in 1usize..200,
        comp in 1u32..=32,
        bits in prop::collection::vec(any::<bool>(), 0..600),
    ) {
        let mut window = vec![false; orig + 1];
        let mut fh = FoldedHistory::new(orig, comp);
        for &bit in &bits {
            feed(&mut fh, &mut window, &[bit]);
            prop_assert_eq!(fh.get(), reference_fold(&window, orig, comp));
        }
    }

    #[test]
    fn stays_within_width(
        orig in 1usize..700,
        comp in 1u32..=32,
        bits in prop::collection::vec(any::<bool>(), 0..1000),
    ) {
        let mut window = vec![false; orig + 1];
        let mut fh = FoldedHistory::new(orig, comp);
        feed(&mut fh, &mut window, &bits);
        prop_assert!(u64::from(fh.get()) < 1u64 << comp);
    }

    #[test]
    fn deterministic(
        orig in 1usize..100,
        comp in 1u32..=16,
        bits in prop::collection::vec(any::<bool>(), 0..300),
    ) {
        let (mut wa, mut wb) = (vec![false; orig + 1], vec![false; orig + 1]);
        let (mut a, mut b) = (FoldedHistory::new(orig, comp), FoldedHistory::new(orig, comp));
        feed(&mut a, &mut wa, &bits);
        feed(&mut b, &mut wb, &bits);
        prop_assert_eq!(a, b);
    }
}
