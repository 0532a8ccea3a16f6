use scan_core::AxisGenerator;
use scan_generators::{
    LissajousConfig, LissajousGenerator, SpiralConfig, SpiralGenerator,
};

fn spiral(radius: f64, scale: f64) -> SpiralGenerator {
    SpiralGenerator::new(SpiralConfig {
        axes: ["x".into(), "y".into()],
        units: "mm".into(),
        centre: [0.0, 0.0],
        radius,
        scale,
        alternate_direction: false,
    })
    .expect("spiral")
}

#[test]
fn spiral_points_stay_inside_the_swept_radius() {
    let generator = spiral(5.0, 1.0);
    assert!(generator.num() > 1);
    let table = generator.produce_points().expect("points");
    let xs = table.positions("x").unwrap();
    let ys = table.positions("y").unwrap();
    assert_eq!(xs.len(), generator.num());
    for (x, y) in xs.iter().zip(ys) {
        assert!((x * x + y * y).sqrt() <= 5.0 + 1e-9);
    }
}

#[test]
fn shrinking_the_scale_packs_more_spiral_points() {
    assert!(spiral(5.0, 0.5).num() > spiral(5.0, 1.0).num());
}

#[test]
fn degenerate_spirals_are_rejected() {
    let err = SpiralGenerator::new(SpiralConfig {
        axes: ["x".into(), "y".into()],
        units: "mm".into(),
        centre: [0.0, 0.0],
        radius: 0.0,
        scale: 1.0,
        alternate_direction: false,
    })
    .unwrap_err();
    assert_eq!(err.info().code, "spiral-degenerate");
}

#[test]
fn lissajous_points_stay_inside_the_bounding_box() {
    let generator = LissajousGenerator::new(LissajousConfig {
        axes: ["x".into(), "y".into()],
        units: "mm".into(),
        centre: [1.0, -1.0],
        span: [4.0, 2.0],
        lobes: 3,
        num: 100,
        alternate_direction: false,
    })
    .expect("lissajous");
    assert_eq!(generator.num(), 100);
    let table = generator.produce_points().expect("points");
    for x in table.positions("x").unwrap() {
        assert!((*x - 1.0).abs() <= 2.0 + 1e-9);
    }
    for y in table.positions("y").unwrap() {
        assert!((*y + 1.0).abs() <= 1.0 + 1e-9);
    }
}

#[test]
fn lissajous_rejects_zero_lobes() {
    let err = LissajousGenerator::new(LissajousConfig {
        axes: ["x".into(), "y".into()],
        units: "mm".into(),
        centre: [0.0, 0.0],
        span: [1.0, 1.0],
        lobes: 0,
        num: 10,
        alternate_direction: false,
    })
    .unwrap_err();
    assert_eq!(err.info().code, "lissajous-empty");
}
