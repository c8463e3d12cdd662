use tabiji::fixtures::Fixtures;

#[test]
fn bundled_tables_load() {
    let set = Fixtures::new().load().unwrap();

    if set.cities.is_empty() {
        panic!("cities should not be empty");
    }
    for city in set.cities.iter() {
        if city.city_id.is_empty() {
            panic!("city_id should never be empty");
        }
        if city.name.is_empty() {
            panic!("city name should never be empty");
        }
    }

    if set.stations.is_empty() {
        panic!("stations should not be empty");
    }
    for station in set.stations.iter() {
        if station.station_id.is_empty() {
            panic!("station_id should never be empty");
        }
        if station.line_id.is_empty() {
            panic!("station line_id should never be empty");
        }
        if station.line_color.is_empty() {
            panic!("station line_color should never be empty");
        }
    }

    if set.lines.is_empty() {
        panic!("lines should not be empty");
    }
    for line in set.lines.iter() {
        if line.line_id.is_empty() {
            panic!("line_id should never be empty");
        }
        if line.stations.is_empty() {
            panic!("a line should always list stations");
        }
    }

    if set.attractions.is_empty() {
        panic!("attractions should not be empty");
    }
    if set.hotels.is_empty() {
        panic!("hotels should not be empty");
    }
    if set.restaurants.is_empty() {
        panic!("restaurants should not be empty");
    }
    if set.intercity.is_empty() {
        panic!("intercity should not be empty");
    }
}

#[test]
fn missing_directory_loads_empty() {
    let fixtures = Fixtures::new().from_dir("/definitely/not/a/real/path".into());
    let set = fixtures.load().unwrap();
    assert!(set.cities.is_empty());
    assert!(set.stations.is_empty());
}
