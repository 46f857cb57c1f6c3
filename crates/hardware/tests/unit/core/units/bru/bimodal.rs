//! # Bimodal Predictor Tests
//!
//! The base table starts weakly not-taken and moves one step per outcome.

use bpsim_core::core::units::bru::BranchPredictor;
use bpsim_core::core::units::bru::bimodal::{BimodalPredictor, BimodalTable};

use crate::common::{IP, step, train};

#[test]
fn table_starts_weakly_not_taken() {
    let table = BimodalTable::new(6);
    assert_eq!(table.len(), 64);
    assert!(!table.is_empty());
    assert_eq!(table.counter(IP), 1);
    assert!(!table.predict(IP));
}

/// One taken outcome flips a weakly not-taken counter.
#[test]
fn table_hysteresis() {
    let mut table = BimodalTable::new(6);
    table.update(true, IP);
    assert!(table.predict(IP));
    table.update(true, IP);
    table.update(true, IP);
    assert_eq!(table.counter(IP), 3);
    // Strongly taken survives one not-taken outcome.
    table.update(false, IP);
    assert!(table.predict(IP));
    table.update(false, IP);
    assert!(!table.predict(IP));
}

#[test]
fn table_saturates_at_zero() {
    let mut table = BimodalTable::new(6);
    for _ in 0..10 {
        table.update(false, IP);
    }
    assert_eq!(table.counter(IP), 0);
    table.reset();
    assert_eq!(table.counter(IP), 1);
}

/// Addresses equal modulo the table size share a counter.
#[test]
fn table_aliases_on_low_bits() {
    let mut table = BimodalTable::new(4);
    table.update(true, 0x13);
    assert!(table.predict(0x23));
    assert!(!table.predict(0x14));
}

#[test]
fn predictor_learns_and_counts() {
    let mut bp = BimodalPredictor::new(10, 5);
    assert!(!step(&mut bp, IP, true));
    let correct = train(&mut bp, IP, true, 99);
    assert_eq!(correct, 99);
    assert_eq!(bp.stats().correct, 99);
    assert_eq!(bp.stats().incorrect, 1);
    assert_eq!(bp.mispredict_penalty(), 5);
    assert_eq!(bp.table().counter(IP), 3);

    bp.reset_counters();
    assert_eq!(bp.stats().lookups(), 0);
    assert!(bp.predict(false, IP, 0));
}
