use scan_compound::CompoundGenerator;
use scan_generators::LineGenerator;

fn compound_of(line: LineGenerator) -> CompoundGenerator {
    CompoundGenerator::new(vec![Box::new(line)], vec![], vec![]).expect("compound")
}

#[test]
fn single_generator_scan_replays_the_line() {
    let mut compound = compound_of(LineGenerator::single("x", "mm", 0.0, 4.0, 5).unwrap());
    compound.prepare().expect("prepare");
    assert_eq!(compound.num().unwrap(), 5);
    for n in 0..5 {
        let point = compound.get_point(n).expect("point");
        assert_eq!(point.positions["x"], n as f64);
        assert_eq!(point.lower["x"], n as f64 - 0.5);
        assert_eq!(point.upper["x"], n as f64 + 0.5);
        assert_eq!(point.indexes, vec![n]);
    }
}

#[test]
fn reads_before_prepare_are_rejected() {
    let compound = compound_of(LineGenerator::single("x", "mm", 0.0, 1.0, 2).unwrap());
    assert_eq!(compound.num().unwrap_err().info().code, "not-prepared");
    assert_eq!(compound.get_point(0).unwrap_err().info().code, "not-prepared");
    assert!(compound.iter_points().is_err());
    assert!(!compound.is_prepared());
}

#[test]
fn out_of_range_indices_are_rejected() {
    let mut compound = compound_of(LineGenerator::single("x", "mm", 0.0, 1.0, 2).unwrap());
    compound.prepare().expect("prepare");
    let err = compound.get_point(2).unwrap_err();
    assert_eq!(err.info().code, "point-out-of-range");
    assert_eq!(err.info().context.get("num").map(String::as_str), Some("2"));
}

#[test]
fn iterator_is_restartable_and_lazy() {
    let mut compound = compound_of(LineGenerator::single("x", "mm", 0.0, 9.0, 10).unwrap());
    compound.prepare().expect("prepare");
    let mut first = compound.iter_points().expect("iter");
    // consume a prefix only; a fresh traversal starts over
    assert_eq!(first.next().unwrap().positions["x"], 0.0);
    assert_eq!(first.next().unwrap().positions["x"], 1.0);
    let restarted: Vec<f64> = compound
        .iter_points()
        .expect("iter")
        .map(|p| p.positions["x"])
        .collect();
    assert_eq!(restarted.len(), 10);
    assert_eq!(restarted[0], 0.0);
}

#[test]
fn axes_and_units_are_available_before_prepare() {
    let compound = compound_of(LineGenerator::single("theta", "deg", 0.0, 90.0, 4).unwrap());
    assert_eq!(compound.axes(), &["theta".to_string()]);
    assert_eq!(
        compound.position_units().get("theta").map(String::as_str),
        Some("deg")
    );
}
