//! Runner properties
//!
//! These properties check that the runner evaluates at most the configured
//! number of values and stops at the first failure.

use crate::arbitrary_seed;
use quickprop::*;
use std::cell::Cell;
use std::rc::Rc;

/// Property: A passing property is evaluated exactly `run_count` times
pub fn test_run_count_bounds_evaluations() {
    let prop = property2(nat(200).unwrap(), arbitrary_seed(), |&runs, &seed: &Seed| {
        let calls = Rc::new(Cell::new(0usize));
        let counter = calls.clone();
        let inner = property(nat(10).unwrap(), move |_| counter.set(counter.get() + 1));

        let config = Config::default().with_runs(runs as usize);
        let verdict = check_with(&inner, &config, seed);

        !verdict.failed && verdict.tests_run == runs as usize && calls.get() == runs as usize
    });

    let fast_config = Config::default().with_runs(20);
    match prop.check(&fast_config) {
        Verdict { failed: false, .. } => println!("✓ Run count bound property passed"),
        verdict => panic!("Run count bound property failed: {verdict:?}"),
    }
}

/// Property: The runner stops at the first failing evaluation
pub fn test_failure_stops_runner() {
    let prop = property2(nat(50).unwrap(), arbitrary_seed(), |&fail_at, &seed: &Seed| {
        let fail_at = fail_at as usize + 1;
        let calls = Rc::new(Cell::new(0usize));
        let counter = calls.clone();
        let inner = property(nat(10).unwrap(), move |_| {
            counter.set(counter.get() + 1);
            counter.get() != fail_at
        });

        let verdict = check_with(&inner, &Config::default().with_runs(100), seed);

        verdict.failed && verdict.tests_run == fail_at && calls.get() == fail_at
    });

    let fast_config = Config::default().with_runs(20);
    match prop.check(&fast_config) {
        Verdict { failed: false, .. } => println!("✓ Failure stops runner property passed"),
        verdict => panic!("Failure stops runner property failed: {verdict:?}"),
    }
}
