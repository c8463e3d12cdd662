use tabiji::shared::geo::Coordinate;

const PAIRS: [((f64, f64), (f64, f64)); 4] = [
    ((35.6812, 139.7671), (35.6595, 139.7004)),
    ((34.9858, 135.7588), (34.9671, 135.7727)),
    ((34.7008, 135.4990), (34.6664, 135.5013)),
    ((35.6762, 139.6503), (34.6937, 135.5023)),
];

#[test]
fn distance_is_symmetric() {
    for (a, b) in PAIRS {
        let a = Coordinate::from(a);
        let b = Coordinate::from(b);
        let forward = a.distance(&b).as_kilometers();
        let backward = b.distance(&a).as_kilometers();
        let tolerance = 1e-9 * forward.max(backward).max(1.0);
        assert!(
            (forward - backward).abs() <= tolerance,
            "asymmetric: {forward} vs {backward}"
        );
    }
}

#[test]
fn distance_to_self_is_zero() {
    for (a, _) in PAIRS {
        let a = Coordinate::from(a);
        assert_eq!(a.distance(&a).as_kilometers(), 0.0);
    }
}

#[test]
fn tokyo_station_to_shibuya() {
    let tokyo_station = Coordinate::from((35.6812, 139.7671));
    let shibuya = Coordinate::from((35.6595, 139.7004));
    let d = tokyo_station.distance(&shibuya).as_kilometers();
    assert!((d - 6.5).abs() < 0.2, "expected ~6.5km, got {d}");
}

#[test]
fn umeda_to_namba() {
    let umeda = Coordinate::from((34.7008, 135.4990));
    let namba = Coordinate::from((34.6664, 135.5013));
    let d = umeda.distance(&namba).as_kilometers();
    assert!((d - 3.8).abs() < 0.2, "expected ~3.8km, got {d}");
}

#[test]
fn tokyo_to_osaka() {
    let tokyo = Coordinate::from((35.6762, 139.6503));
    let osaka = Coordinate::from((34.6937, 135.5023));
    let d = tokyo.distance(&osaka).as_kilometers();
    // City-center great-circle distance, well under the rail distance
    assert!((385.0..400.0).contains(&d), "got {d}");
}
