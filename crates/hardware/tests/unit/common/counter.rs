//! # Saturating Counter Tests
//!
//! Verifies the ranges derived from a counter width and that stepping never
//! leaves them.

use bpsim_core::common::{SignedBounds, step_unsigned};
use rstest::rstest;

#[rstest]
#[case(2, -2, 1)]
#[case(3, -4, 3)]
#[case(4, -8, 7)]
#[case(8, -128, 127)]
fn signed_bounds_from_width(#[case] width: u32, #[case] min: i8, #[case] max: i8) {
    let bounds = SignedBounds::with_width(width);
    assert_eq!(bounds.min(), min);
    assert_eq!(bounds.max(), max);
    assert!(bounds.contains(min));
    assert!(bounds.contains(max));
}

/// A 3-bit counter pushed far past either end stays at the end.
#[test]
fn signed_step_saturates() {
    let bounds = SignedBounds::with_width(3);
    let mut ctr = 0;
    for _ in 0..1000 {
        bounds.step(&mut ctr, true);
    }
    assert_eq!(ctr, 3);
    for _ in 0..1000 {
        bounds.step(&mut ctr, false);
    }
    assert_eq!(ctr, -4);
}

#[test]
fn signed_step_moves_by_one() {
    let bounds = SignedBounds::with_width(3);
    let mut ctr = -1;
    bounds.step(&mut ctr, true);
    assert_eq!(ctr, 0);
    bounds.step(&mut ctr, false);
    bounds.step(&mut ctr, false);
    assert_eq!(ctr, -2);
}

#[test]
fn unsigned_step_saturates() {
    let mut useful = 0;
    for _ in 0..1000 {
        step_unsigned(&mut useful, true, 3);
    }
    assert_eq!(useful, 3);
    for _ in 0..1000 {
        step_unsigned(&mut useful, false, 3);
    }
    assert_eq!(useful, 0);
}
