use scan_core::Excluder;
use scan_regions::{
    CircleConfig, CircularRegion, EllipseConfig, EllipticalRegion, RectangleConfig,
    RectangularRegion, Region, RegionExcluder,
};

#[test]
fn circle_contains_its_boundary() {
    let circle = CircularRegion::new(CircleConfig {
        centre: [1.0, 1.0],
        radius: 2.0,
    })
    .expect("circle");
    assert!(circle.contains(1.0, 1.0));
    assert!(circle.contains(3.0, 1.0));
    assert!(!circle.contains(3.1, 1.0));
}

#[test]
fn rectangle_contains_its_edges() {
    let rect = RectangularRegion::new(RectangleConfig {
        origin: [0.0, 0.0],
        width: 2.0,
        height: 1.0,
    })
    .expect("rectangle");
    assert!(rect.contains(0.0, 0.0));
    assert!(rect.contains(2.0, 1.0));
    assert!(!rect.contains(2.0, 1.1));
    assert!(!rect.contains(-0.1, 0.5));
}

#[test]
fn ellipse_scales_the_axes_independently() {
    let ellipse = EllipticalRegion::new(EllipseConfig {
        centre: [0.0, 0.0],
        semi_axes: [2.0, 1.0],
    })
    .expect("ellipse");
    assert!(ellipse.contains(2.0, 0.0));
    assert!(ellipse.contains(0.0, 1.0));
    assert!(!ellipse.contains(2.0, 1.0));
}

#[test]
fn degenerate_regions_are_rejected() {
    let circle = CircularRegion::new(CircleConfig {
        centre: [0.0, 0.0],
        radius: 0.0,
    });
    assert_eq!(circle.unwrap_err().info().code, "circle-degenerate");
    let rect = RectangularRegion::new(RectangleConfig {
        origin: [0.0, 0.0],
        width: 1.0,
        height: -1.0,
    });
    assert_eq!(rect.unwrap_err().info().code, "rectangle-degenerate");
}

#[test]
fn region_excluder_masks_pointwise() {
    let circle = CircularRegion::new(CircleConfig {
        centre: [0.0, 0.0],
        radius: 1.0,
    })
    .expect("circle");
    let excluder =
        RegionExcluder::new(Box::new(circle), ["x".into(), "y".into()]).expect("excluder");
    assert_eq!(excluder.scannables(), ["x".to_string(), "y".to_string()]);
    let mask = excluder
        .create_mask(&[0.0, 1.0, 2.0], &[0.0, 0.0, 0.0])
        .expect("mask");
    assert_eq!(mask, vec![true, true, false]);
}

#[test]
fn region_excluder_records_nest_the_region_record() {
    let circle = CircularRegion::new(CircleConfig {
        centre: [0.5, 0.5],
        radius: 2.0,
    })
    .expect("circle");
    let excluder =
        RegionExcluder::new(Box::new(circle), ["x".into(), "y".into()]).expect("excluder");
    let record = excluder.to_record().expect("record");
    assert_eq!(record.typeid, RegionExcluder::TYPEID);
    let payload: scan_regions::RegionExcluderRecord = record.parse_payload().expect("payload");
    assert_eq!(payload.axes, ["x".to_string(), "y".to_string()]);
    assert_eq!(payload.region.typeid, CircularRegion::TYPEID);
}

#[test]
fn region_excluder_rejects_mismatched_inputs() {
    let circle = CircularRegion::new(CircleConfig {
        centre: [0.0, 0.0],
        radius: 1.0,
    })
    .expect("circle");
    let excluder =
        RegionExcluder::new(Box::new(circle), ["x".into(), "y".into()]).expect("excluder");
    let err = excluder.create_mask(&[0.0, 1.0], &[0.0]).unwrap_err();
    assert_eq!(err.info().code, "mask-input-mismatch");
}
