use tabiji::{
    atlas::{Atlas, Error, PoiKind},
    fixtures::{
        FixtureSet,
        models::{CityRow, LineRow, StationRow},
    },
    shared::geo::Coordinate,
};

fn bundled() -> Atlas {
    Atlas::bundled().expect("bundled fixtures should build")
}

#[test]
fn bundled_dataset_builds() {
    let atlas = bundled();
    assert!(!atlas.cities().is_empty());
    assert!(!atlas.pois().is_empty());

    let tokyo = atlas.city_by_id("tokyo").unwrap();
    assert_eq!(tokyo.name.as_ref(), "Tokyo");
    assert_eq!(tokyo.local_name.as_ref(), "東京");

    let station = atlas.station_by_id("tokyo-g").unwrap();
    assert_eq!(station.name.as_ref(), "Tokyo");
    assert_eq!(station.city_id.as_ref(), "tokyo");
    assert_eq!(station.line_id.as_ref(), "tokyo-ginza");

    let line = atlas.line_by_id("kyoto-karasuma").unwrap();
    assert!(line.serves("kyoto-station"));
    assert!(!line.serves("tokyo-g"));
}

#[test]
fn stations_keep_fixture_order_per_city() {
    let atlas = bundled();
    let stations = atlas.stations_in_city("nara").unwrap();
    assert_eq!(stations[0].id.as_ref(), "nara-station");
    assert!(stations.len() >= 8);
}

#[test]
fn nearest_station_resolves_asakusa() {
    let atlas = bundled();
    // Senso-ji sits exactly on the Asakusa stops of both the Ginza and
    // Asakusa lines; the tie goes to the first station in fixture order.
    let sensoji = Coordinate::from((35.7148, 139.7967));
    let nearest = atlas.nearest_station("tokyo", &sensoji).unwrap();
    assert_eq!(nearest.id.as_ref(), "asakusa-g");
}

#[test]
fn nearest_station_missing_city_is_none() {
    let atlas = bundled();
    let point = Coordinate::from((34.3853, 132.4553));
    // Hiroshima is a registered city with no stations
    assert!(atlas.nearest_station("hiroshima", &point).is_none());
    assert!(atlas.nearest_station("atlantis", &point).is_none());
}

#[test]
fn lines_through_interchange_station() {
    let atlas = bundled();
    let lines = atlas.lines_through_station("sanjo-keihan");
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].id.as_ref(), "kyoto-tozai");
}

#[test]
fn poi_kinds_are_tagged() {
    let atlas = bundled();
    let temple = atlas.poi_by_id("kinkakuji").unwrap();
    assert!(matches!(temple.kind, PoiKind::Attraction { .. }));
    assert_eq!(temple.price(), 400);

    let hotel = atlas.poi_by_id("hotel-granvia-kyoto").unwrap();
    assert!(matches!(hotel.kind, PoiKind::Hotel { .. }));
    assert_eq!(hotel.price(), 25000);

    let restaurant = atlas.poi_by_id("mizuno-dotonbori").unwrap();
    assert!(matches!(restaurant.kind, PoiKind::Restaurant { .. }));
}

#[test]
fn search_finds_pois_by_name() {
    let atlas = bundled();
    let results = atlas.search_pois_by_name("fushimi inari");
    assert!(!results.is_empty());
    assert_eq!(results[0].id.as_ref(), "fushimi-inari");
}

#[test]
fn rides_between_cities() {
    let atlas = bundled();
    let rides = atlas.rides_between("tokyo", "kyoto");
    assert_eq!(rides.len(), 1);
    assert_eq!(rides[0].train.as_ref(), "Nozomi");
    assert!(atlas.rides_between("tokyo", "nara").is_empty());
}

fn city(id: &str) -> CityRow {
    CityRow {
        city_id: id.to_string(),
        name: id.to_string(),
        local_name: id.to_string(),
        region: "Test".to_string(),
        lat: 35.0,
        lon: 135.0,
    }
}

fn station(id: &str, city_id: &str, line_id: &str) -> StationRow {
    StationRow {
        station_id: id.to_string(),
        name: id.to_string(),
        local_name: id.to_string(),
        city_id: city_id.to_string(),
        line_id: line_id.to_string(),
        line_color: "#000000".to_string(),
        lat: 35.0,
        lon: 135.0,
        connections: String::new(),
    }
}

fn line(id: &str, city_id: &str, mode: &str, stations: &str) -> LineRow {
    LineRow {
        line_id: id.to_string(),
        city_id: city_id.to_string(),
        name: id.to_string(),
        color: "#000000".to_string(),
        mode: mode.to_string(),
        stations: stations.to_string(),
    }
}

#[test]
fn station_with_unknown_city_is_rejected() {
    let set = FixtureSet {
        cities: vec![city("testville")],
        stations: vec![station("a", "nowhere", "l")],
        ..Default::default()
    };
    assert!(matches!(
        Atlas::from_set(set),
        Err(Error::UnknownCity { .. })
    ));
}

#[test]
fn duplicate_station_id_is_rejected() {
    let set = FixtureSet {
        cities: vec![city("testville")],
        stations: vec![
            station("a", "testville", "l"),
            station("a", "testville", "l"),
        ],
        ..Default::default()
    };
    assert!(matches!(
        Atlas::from_set(set),
        Err(Error::DuplicateId { .. })
    ));
}

#[test]
fn line_with_unknown_station_is_rejected() {
    let set = FixtureSet {
        cities: vec![city("testville")],
        stations: vec![station("a", "testville", "l")],
        lines: vec![line("l", "testville", "metro", "a;ghost")],
        ..Default::default()
    };
    assert!(matches!(
        Atlas::from_set(set),
        Err(Error::UnknownStation { .. })
    ));
}

#[test]
fn line_with_unknown_mode_is_rejected() {
    let set = FixtureSet {
        cities: vec![city("testville")],
        stations: vec![station("a", "testville", "l")],
        lines: vec![line("l", "testville", "rickshaw", "a")],
        ..Default::default()
    };
    assert!(matches!(
        Atlas::from_set(set),
        Err(Error::UnknownMode { .. })
    ));
}

#[test]
fn station_with_unknown_line_is_rejected() {
    let set = FixtureSet {
        cities: vec![city("testville")],
        stations: vec![station("a", "testville", "ghost-line")],
        lines: vec![],
        ..Default::default()
    };
    assert!(matches!(
        Atlas::from_set(set),
        Err(Error::UnknownLine { .. })
    ));
}
