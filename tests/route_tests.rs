use tabiji::{
    atlas::Atlas,
    route::{self, SegmentMode},
    shared::geo::Coordinate,
};

fn bundled() -> Atlas {
    Atlas::bundled().expect("bundled fixtures should build")
}

// North Kyoto, next to Kokusai Kaikan station
const KOKUSAI_KAIKAN_AREA: (f64, f64) = (35.0610, 135.7850);
// Kyoto Station front
const KYOTO_STATION_AREA: (f64, f64) = (34.9857, 135.7587);
// Nakano Broadway, Tozai line territory
const NAKANO_AREA: (f64, f64) = (35.7061, 139.6656);
// Odaiba, Yurikamome line territory
const ODAIBA_AREA: (f64, f64) = (35.6259, 139.7764);

#[test]
fn stations_on_shared_line_report_it() {
    let atlas = bundled();
    let from = Coordinate::from(KOKUSAI_KAIKAN_AREA);
    let to = Coordinate::from(KYOTO_STATION_AREA);
    let connection = route::connection(&atlas, "kyoto", &from, &to).unwrap();
    assert_eq!(connection.from_station.id.as_ref(), "kokusai-kaikan");
    assert_eq!(connection.to_station.id.as_ref(), "kyoto-station");
    let line = connection.line.expect("both stops sit on the Karasuma line");
    assert_eq!(line.id.as_ref(), "kyoto-karasuma");
}

#[test]
fn disjoint_lines_report_no_connection() {
    let atlas = bundled();
    let from = Coordinate::from(NAKANO_AREA);
    let to = Coordinate::from(ODAIBA_AREA);
    let connection = route::connection(&atlas, "tokyo", &from, &to).unwrap();
    // Nearest stations exist, but nothing links Tozai to Yurikamome
    // without a transfer, and transfers are out of scope.
    assert!(connection.line.is_none());
    assert_eq!(connection.from_station.id.as_ref(), "nakano-t");
}

#[test]
fn connection_without_stations_is_none() {
    let atlas = bundled();
    let point = Coordinate::from((34.3853, 132.4553));
    assert!(route::connection(&atlas, "hiroshima", &point, &point).is_none());
}

#[test]
fn plan_composes_walk_transit_walk() {
    let atlas = bundled();
    let from = Coordinate::from(KOKUSAI_KAIKAN_AREA);
    let to = Coordinate::from(KYOTO_STATION_AREA);
    let segments = route::plan(&atlas, "kyoto", &from, &to);
    assert_eq!(segments.len(), 3);
    assert_eq!(segments[0].mode, SegmentMode::Walk);
    assert_eq!(segments[1].mode, SegmentMode::Metro);
    assert_eq!(segments[2].mode, SegmentMode::Walk);

    let line = segments[1].line.as_ref().unwrap();
    assert_eq!(line.name, "Karasuma Line");

    // Per-segment durations follow the estimator formulas
    assert_eq!(
        segments[1].duration,
        route::transit_time(segments[1].distance)
    );
    assert_eq!(segments[0].duration, route::walk_time(segments[0].distance));
}

#[test]
fn plan_segment_distances_sum_to_direct_distance() {
    let atlas = bundled();
    let from = Coordinate::from(KOKUSAI_KAIKAN_AREA);
    let to = Coordinate::from(KYOTO_STATION_AREA);
    let direct = from.distance(&to).as_kilometers();
    let segments = route::plan(&atlas, "kyoto", &from, &to);
    let total: f64 = segments
        .iter()
        .map(|segment| segment.distance.as_kilometers())
        .sum();
    assert!(
        (total - direct).abs() / direct < 0.05,
        "segments sum to {total}, direct is {direct}"
    );
}

#[test]
fn plan_falls_back_to_walking_without_a_line() {
    let atlas = bundled();
    let from = Coordinate::from(NAKANO_AREA);
    let to = Coordinate::from(ODAIBA_AREA);
    let segments = route::plan(&atlas, "tokyo", &from, &to);
    assert_eq!(segments.len(), 1);
    assert_eq!(segments[0].mode, SegmentMode::Walk);
    let direct = from.distance(&to);
    assert_eq!(segments[0].distance, direct);
}

#[test]
fn plan_without_stations_walks_the_whole_way() {
    let atlas = bundled();
    let from = Coordinate::from((34.3853, 132.4553));
    let to = Coordinate::from((34.3900, 132.4600));
    let segments = route::plan(&atlas, "hiroshima", &from, &to);
    assert_eq!(segments.len(), 1);
    assert_eq!(segments[0].mode, SegmentMode::Walk);
    assert!(segments[0].line.is_none());
}

#[test]
fn plan_between_identical_points_is_a_zero_walk() {
    let atlas = bundled();
    let point = Coordinate::from(KYOTO_STATION_AREA);
    let segments = route::plan(&atlas, "kyoto", &point, &point);
    assert_eq!(segments.len(), 1);
    assert_eq!(segments[0].mode, SegmentMode::Walk);
    assert_eq!(segments[0].distance.as_kilometers(), 0.0);
    assert_eq!(segments[0].duration.as_minutes(), 0);
}

#[test]
fn plan_uses_bus_lines_too() {
    let atlas = bundled();
    // Nara bus loop: JR Nara to the Todaiji stop
    let from = Coordinate::from((34.6849, 135.8181));
    let to = Coordinate::from((34.6886, 135.8396));
    let segments = route::plan(&atlas, "nara", &from, &to);
    let transit = segments
        .iter()
        .find(|segment| segment.mode != SegmentMode::Walk);
    match transit {
        Some(segment) => assert_eq!(segment.mode, SegmentMode::Bus),
        None => panic!("expected a bus segment"),
    }
}

#[test]
fn poi_leg_annotates_consecutive_entries() {
    let atlas = bundled();
    let (distance, estimate) = route::poi_leg(&atlas, "sensoji", "ueno-park").unwrap();
    assert!(distance.as_kilometers() > 0.5);
    assert!(estimate.duration.as_minutes() > 0);
    assert!(route::poi_leg(&atlas, "sensoji", "ghost").is_none());
}
