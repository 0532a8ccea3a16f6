use std::collections::BTreeMap;

use scan_core::{Mutator, Point, PointIter};
use scan_mutators::{RandomOffsetConfig, RandomOffsetMutator};

fn grid_points(n: usize) -> Vec<Point> {
    (0..n)
        .map(|i| {
            let mut point = Point::new();
            point.positions.insert("x".into(), i as f64);
            point.lower.insert("x".into(), i as f64 - 0.5);
            point.upper.insert("x".into(), i as f64 + 0.5);
            point.indexes.push(i);
            point
        })
        .collect()
}

fn mutator(seed: u64, max: f64) -> RandomOffsetMutator {
    let mut max_offset = BTreeMap::new();
    max_offset.insert("x".to_string(), max);
    RandomOffsetMutator::new(RandomOffsetConfig { seed, max_offset }).expect("mutator")
}

fn run(mutator: &RandomOffsetMutator, points: Vec<Point>) -> Vec<Point> {
    let iter: PointIter<'_> = Box::new(points.into_iter());
    mutator.mutate(iter).collect()
}

#[test]
fn offsets_are_bounded_and_leave_bounds_untouched() {
    let mutator = mutator(99, 0.25);
    let original = grid_points(20);
    let mutated = run(&mutator, original.clone());
    assert_eq!(mutated.len(), original.len());
    for (before, after) in original.iter().zip(&mutated) {
        let delta = after.positions["x"] - before.positions["x"];
        assert!(delta.abs() <= 0.25);
        assert_eq!(after.lower, before.lower);
        assert_eq!(after.upper, before.upper);
        assert_eq!(after.indexes, before.indexes);
    }
}

#[test]
fn restarting_the_sequence_replays_identical_offsets() {
    let mutator = mutator(7, 0.5);
    let first = run(&mutator, grid_points(10));
    let second = run(&mutator, grid_points(10));
    assert_eq!(first, second);
}

#[test]
fn different_seeds_jitter_differently() {
    let first = run(&mutator(1, 0.5), grid_points(10));
    let second = run(&mutator(2, 0.5), grid_points(10));
    assert_ne!(first, second);
}

#[test]
fn axes_without_a_budget_are_untouched() {
    let mutator = mutator(3, 0.5);
    let mut point = Point::new();
    point.positions.insert("y".into(), 4.0);
    let mutated = run(&mutator, vec![point.clone()]);
    assert_eq!(mutated[0], point);
}

#[test]
fn negative_budgets_are_rejected() {
    let mut max_offset = BTreeMap::new();
    max_offset.insert("x".to_string(), -1.0);
    let err = RandomOffsetMutator::new(RandomOffsetConfig { seed: 0, max_offset }).unwrap_err();
    assert_eq!(err.info().code, "offset-negative");
}
