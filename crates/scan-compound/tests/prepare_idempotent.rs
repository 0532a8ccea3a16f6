use scan_compound::CompoundGenerator;
use scan_core::Point;
use scan_generators::LineGenerator;
use scan_regions::{CircleConfig, CircularRegion, RegionExcluder};

fn masked_grid() -> CompoundGenerator {
    let x = LineGenerator::single("x", "mm", 0.0, 4.0, 5).unwrap();
    let y = LineGenerator::single("y", "mm", 0.0, 4.0, 5)
        .unwrap()
        .with_alternating(false);
    let circle = CircularRegion::new(CircleConfig {
        centre: [2.0, 2.0],
        radius: 2.0,
    })
    .unwrap();
    let excluder = RegionExcluder::new(Box::new(circle), ["x".into(), "y".into()]).unwrap();
    CompoundGenerator::new(
        vec![Box::new(x), Box::new(y)],
        vec![Box::new(excluder)],
        vec![],
    )
    .unwrap()
}

fn full_sequence(compound: &CompoundGenerator) -> Vec<Point> {
    compound.iter_points().expect("iter").collect()
}

#[test]
fn repeated_prepare_reproduces_the_same_scan() {
    let mut compound = masked_grid();
    compound.prepare().expect("first prepare");
    let first = full_sequence(&compound);
    let first_num = compound.num().unwrap();

    compound.prepare().expect("second prepare");
    let second = full_sequence(&compound);
    assert_eq!(compound.num().unwrap(), first_num);
    assert_eq!(first, second);
    for n in 0..first_num {
        assert_eq!(compound.get_point(n).unwrap(), first[n]);
    }
}

#[test]
fn get_point_agrees_with_the_iterator() {
    let mut compound = masked_grid();
    compound.prepare().expect("prepare");
    let streamed = full_sequence(&compound);
    assert_eq!(streamed.len(), compound.num().unwrap());
    for (n, point) in streamed.iter().enumerate() {
        assert_eq!(&compound.get_point(n).unwrap(), point);
    }
}

#[test]
fn concurrent_readers_share_a_prepared_scan() {
    let mut compound = masked_grid();
    compound.prepare().expect("prepare");
    let num = compound.num().unwrap();
    let expected = full_sequence(&compound);

    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                for n in 0..num {
                    assert_eq!(compound.get_point(n).unwrap(), expected[n]);
                }
            });
        }
    });
}
