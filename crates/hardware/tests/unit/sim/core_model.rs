//! # Core Model Tests
//!
//! The per-core driver pairs every prediction with its update and charges
//! the configured penalty per misprediction.

use bpsim_core::BranchPredictor;
use bpsim_core::config::Config;
use bpsim_core::sim::{CoreModel, Pattern, Workload};

#[test]
fn resolves_through_predictor() {
    let mut core = CoreModel::new(&Config::default(), 0);
    assert_eq!(core.core_id(), 0);
    core.run(Workload::new(Pattern::Alternating, 1, 1000));

    assert_eq!(core.branches(), 1000);
    let Some(bp) = core.predictor() else {
        panic!("default config must build a predictor");
    };
    assert_eq!(bp.stats().lookups(), 1000);
    assert_eq!(core.penalty_cycles(), bp.stats().incorrect * 8);
}

#[test]
fn penalty_comes_from_config() {
    let json = r#"{ "branch_predictor": { "kind": "Bimodal", "mispredict_penalty": 20 } }"#;
    let config = Config::from_json(json).unwrap();
    let mut core = CoreModel::new(&config, 0);

    // Alternating keeps a weakly not-taken counter flipping between 1 and 2,
    // so every branch mispredicts.
    core.run(Workload::new(Pattern::Alternating, 1, 10));
    assert_eq!(core.penalty_cycles(), 20 * 10);
}

#[test]
fn no_predictor_resolves_nothing() {
    let json = r#"{ "cores": { "3": { "kind": "None" } } }"#;
    let config = Config::from_json(json).unwrap();
    let mut core = CoreModel::new(&config, 3);

    assert!(core.predictor().is_none());
    let branch = Workload::new(Pattern::AlwaysTaken, 1, 1).next();
    assert_eq!(branch.and_then(|b| core.resolve(b)), None);
    core.run(Workload::new(Pattern::AlwaysTaken, 1, 100));
    assert_eq!(core.branches(), 0);
    assert_eq!(core.penalty_cycles(), 0);
}
