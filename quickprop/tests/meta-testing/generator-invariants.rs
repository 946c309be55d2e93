//! Generator invariant properties
//!
//! These properties ensure that generators are deterministic per seed and
//! keep every drawn value inside its declared range.

use crate::{arbitrary_bounds, arbitrary_seed};
use quickprop::*;

/// Property: The same seed yields the same sequence of raw draws
pub fn test_seed_determinism() {
    let prop = property(arbitrary_seed(), |&seed: &Seed| {
        let mut first = seed;
        let mut second = seed;
        (0..100).all(|_| first.next_u64() == second.next_u64())
    });

    let fast_config = Config::default().with_runs(20);
    match prop.check(&fast_config) {
        Verdict { failed: false, .. } => println!("✓ Seed determinism property passed"),
        verdict => panic!("Seed determinism property failed: {verdict:?}"),
    }
}

/// Property: Streams built from the same seed agree value for value
pub fn test_stream_determinism() {
    let prop = property(arbitrary_seed(), |&seed: &Seed| {
        let arb = tuple((integer(-500, 500).unwrap(), char()));
        let left: Vec<_> = ValueStream::new(&arb, seed).bounded(50).collect();
        let right: Vec<_> = ValueStream::new(&arb, seed).bounded(50).collect();
        left == right
    });

    let fast_config = Config::default().with_runs(20);
    match prop.check(&fast_config) {
        Verdict { failed: false, .. } => println!("✓ Stream determinism property passed"),
        verdict => panic!("Stream determinism property failed: {verdict:?}"),
    }
}

/// Property: Integer arbitraries respect their bounds
pub fn test_range_bounds() {
    let prop = property2(
        arbitrary_bounds(),
        arbitrary_seed(),
        |&(min, max): &(i64, i64), &seed: &Seed| {
            let arb = integer(min, max).unwrap();
            let mut seed = seed;
            (0..200).all(|_| {
                let value = arb.generate(&mut seed).into_inner();
                min <= value && value <= max
            })
        },
    );

    let fast_config = Config::default().with_runs(30);
    match prop.check(&fast_config) {
        Verdict { failed: false, .. } => println!("✓ Range bounds property passed"),
        verdict => panic!("Range bounds property failed: {verdict:?}"),
    }
}

/// Property: Single element ranges should work
pub fn test_single_element_ranges() {
    let prop = property2(
        integer(-1_000, 1_000).unwrap(),
        arbitrary_seed(),
        |&point, &seed: &Seed| {
            let arb = integer(point, point).unwrap();
            let mut seed = seed;
            arb.generate(&mut seed).into_inner() == point
        },
    );

    let fast_config = Config::default().with_runs(20);
    match prop.check(&fast_config) {
        Verdict { failed: false, .. } => println!("✓ Single element range property passed"),
        verdict => panic!("Single element range property failed: {verdict:?}"),
    }
}
