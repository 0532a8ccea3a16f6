use std::collections::BTreeMap;

use scan_compound::CompoundGenerator;
use scan_generators::LineGenerator;
use scan_mutators::{RandomOffsetConfig, RandomOffsetMutator};

fn jittered_line(seed: u64, max: f64) -> CompoundGenerator {
    let x = LineGenerator::single("x", "mm", 0.0, 9.0, 10).unwrap();
    let mut max_offset = BTreeMap::new();
    max_offset.insert("x".to_string(), max);
    let mutator = RandomOffsetMutator::new(RandomOffsetConfig { seed, max_offset }).unwrap();
    CompoundGenerator::new(vec![Box::new(x)], vec![], vec![Box::new(mutator)]).unwrap()
}

#[test]
fn mutators_preserve_count_and_order() {
    let mut compound = jittered_line(11, 0.2);
    compound.prepare().expect("prepare");
    let points: Vec<_> = compound.iter_points().unwrap().collect();
    assert_eq!(points.len(), 10);
    for (n, point) in points.iter().enumerate() {
        assert_eq!(point.indexes, vec![n]);
        assert!((point.positions["x"] - n as f64).abs() <= 0.2);
        // bounds are untouched by the jitter
        assert_eq!(point.lower["x"], n as f64 - 0.5);
        assert_eq!(point.upper["x"], n as f64 + 0.5);
    }
}

#[test]
fn restarted_iterators_replay_identical_mutations() {
    let mut compound = jittered_line(23, 0.4);
    compound.prepare().expect("prepare");
    let first: Vec<_> = compound.iter_points().unwrap().collect();
    let second: Vec<_> = compound.iter_points().unwrap().collect();
    assert_eq!(first, second);
}

#[test]
fn get_point_is_unaffected_by_mutators() {
    // mutators act on the streamed sequence only
    let mut compound = jittered_line(5, 0.5);
    compound.prepare().expect("prepare");
    for n in 0..10 {
        assert_eq!(compound.get_point(n).unwrap().positions["x"], n as f64);
    }
}

#[test]
fn mutators_chain_in_registration_order() {
    let x = LineGenerator::single("x", "mm", 0.0, 4.0, 5).unwrap();
    let mut first_budget = BTreeMap::new();
    first_budget.insert("x".to_string(), 0.1);
    let mut second_budget = BTreeMap::new();
    second_budget.insert("x".to_string(), 0.3);
    let first = RandomOffsetMutator::new(RandomOffsetConfig {
        seed: 1,
        max_offset: first_budget,
    })
    .unwrap();
    let second = RandomOffsetMutator::new(RandomOffsetConfig {
        seed: 2,
        max_offset: second_budget,
    })
    .unwrap();
    let mut compound = CompoundGenerator::new(
        vec![Box::new(x)],
        vec![],
        vec![Box::new(first), Box::new(second)],
    )
    .unwrap();
    compound.prepare().expect("prepare");
    let points: Vec<_> = compound.iter_points().unwrap().collect();
    assert_eq!(points.len(), 5);
    for (n, point) in points.iter().enumerate() {
        assert!((point.positions["x"] - n as f64).abs() <= 0.4);
    }
}
