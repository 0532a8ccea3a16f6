use scan_core::AxisGenerator;
use scan_generators::{LineConfig, LineGenerator};

#[test]
fn line_positions_are_evenly_spaced_with_half_step_bounds() {
    let line = LineGenerator::single("x", "mm", 0.0, 4.0, 5).expect("line");
    assert_eq!(line.num(), 5);
    let table = line.produce_points().expect("points");
    assert_eq!(table.positions("x").unwrap(), &[0.0, 1.0, 2.0, 3.0, 4.0]);
    assert_eq!(table.lower("x").unwrap(), &[-0.5, 0.5, 1.5, 2.5, 3.5]);
    assert_eq!(table.upper("x").unwrap(), &[0.5, 1.5, 2.5, 3.5, 4.5]);
}

#[test]
fn single_point_line_sits_at_start_spanning_half_the_range() {
    let line = LineGenerator::single("x", "mm", 1.0, 3.0, 1).expect("line");
    let table = line.produce_points().expect("points");
    assert_eq!(table.positions("x").unwrap(), &[1.0]);
    assert_eq!(table.lower("x").unwrap(), &[0.0]);
    assert_eq!(table.upper("x").unwrap(), &[2.0]);
}

#[test]
fn multi_axis_line_moves_every_axis() {
    let line = LineGenerator::new(LineConfig {
        axes: vec!["x".into(), "y".into()],
        units: "mm".into(),
        start: vec![0.0, 10.0],
        stop: vec![1.0, 12.0],
        num: 3,
        alternate_direction: true,
    })
    .expect("line");
    assert!(line.alternate_direction());
    assert_eq!(line.axes(), vec!["x".to_string(), "y".to_string()]);
    assert_eq!(line.position_units().get("y").map(String::as_str), Some("mm"));
    let table = line.produce_points().expect("points");
    assert_eq!(table.positions("x").unwrap(), &[0.0, 0.5, 1.0]);
    assert_eq!(table.positions("y").unwrap(), &[10.0, 11.0, 12.0]);
}

#[test]
fn line_records_round_trip_their_config() {
    let line = LineGenerator::single("x", "mm", 0.0, 4.0, 5)
        .expect("line")
        .with_alternating(true);
    let record = line.to_record().expect("record");
    assert_eq!(record.typeid, LineGenerator::TYPEID);
    let config: LineConfig = record.parse_payload().expect("payload");
    assert_eq!(&config, line.config());
}

#[test]
fn line_rejects_bad_descriptions() {
    assert_eq!(
        LineGenerator::single("x", "mm", 0.0, 1.0, 0)
            .unwrap_err()
            .info()
            .code,
        "line-empty"
    );
    let mismatched = LineGenerator::new(LineConfig {
        axes: vec!["x".into(), "y".into()],
        units: "mm".into(),
        start: vec![0.0],
        stop: vec![1.0, 2.0],
        num: 2,
        alternate_direction: false,
    });
    assert_eq!(mismatched.unwrap_err().info().code, "line-shape-mismatch");
    let duplicated = LineGenerator::new(LineConfig {
        axes: vec!["x".into(), "x".into()],
        units: "mm".into(),
        start: vec![0.0, 0.0],
        stop: vec![1.0, 1.0],
        num: 2,
        alternate_direction: false,
    });
    assert_eq!(duplicated.unwrap_err().info().code, "line-duplicate-axis");
}
