use std::{collections::HashMap, sync::Arc};

mod models;
pub use models::*;

use thiserror::Error;
use tracing::debug;

use crate::{
    fixtures::{self, FixtureSet, Fixtures},
    intercity::Ride,
    shared::{self, geo::Coordinate},
};

type IdToIndex = HashMap<Arc<str>, usize>;
type IdToIndexes = HashMap<Arc<str>, Box<[usize]>>;
type PairToIndexes = HashMap<(Arc<str>, Arc<str>), Box<[usize]>>;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Fixture(#[from] fixtures::Error),
    #[error("Duplicate {table} id: {id}")]
    DuplicateId { table: &'static str, id: String },
    #[error("{table} {id} references unknown city {city}")]
    UnknownCity {
        table: &'static str,
        id: String,
        city: String,
    },
    #[error("Station {station} references unknown line {line}")]
    UnknownLine { station: String, line: String },
    #[error("Line {line} lists unknown station {station}")]
    UnknownStation { line: String, station: String },
    #[error("Line {line} has unknown mode {mode}")]
    UnknownMode { line: String, mode: String },
}

/// Read-only reference tables for every registered city, validated once at
/// build time. All estimation and lookup operations read from here; nothing
/// ever mutates an `Atlas` after construction.
#[derive(Debug, Clone, Default)]
pub struct Atlas {
    cities: Box<[City]>,
    stations: Box<[Station]>,
    lines: Box<[Line]>,
    pois: Box<[Poi]>,
    rides: Box<[Ride]>,

    city_lookup: IdToIndex,
    station_lookup: IdToIndex,
    line_lookup: IdToIndex,
    poi_lookup: IdToIndex,
    ride_lookup: IdToIndex,

    // Per-city views keep fixture order, which makes nearest-station
    // tie-breaking deterministic.
    city_to_stations: IdToIndexes,
    city_to_lines: IdToIndexes,
    city_to_pois: IdToIndexes,
    station_to_lines: IdToIndexes,
    city_pair_to_rides: PairToIndexes,
}

impl Atlas {
    /// Builds an atlas from the dataset compiled into the library.
    pub fn bundled() -> Result<Self, Error> {
        Self::from_fixtures(&Fixtures::new())
    }

    pub fn from_fixtures(fixtures: &Fixtures) -> Result<Self, Error> {
        Self::from_set(fixtures.load()?)
    }

    pub fn from_set(set: FixtureSet) -> Result<Self, Error> {
        let mut atlas = Self::default();

        // Cities first, everything else references them
        let mut city_lookup: IdToIndex = HashMap::new();
        let mut cities: Vec<City> = Vec::new();
        for (i, row) in set.cities.into_iter().enumerate() {
            let value: City = row.into();
            if city_lookup.insert(value.id.clone(), i).is_some() {
                return Err(Error::DuplicateId {
                    table: "city",
                    id: value.id.to_string(),
                });
            }
            cities.push(value);
        }
        atlas.cities = cities.into();
        atlas.city_lookup = city_lookup;

        // Stations
        let mut station_lookup: IdToIndex = HashMap::new();
        let mut city_to_stations: HashMap<Arc<str>, Vec<usize>> = HashMap::new();
        let mut stations: Vec<Station> = Vec::new();
        for (i, row) in set.stations.into_iter().enumerate() {
            let value: Station = row.into();
            if !atlas.city_lookup.contains_key(&value.city_id) {
                return Err(Error::UnknownCity {
                    table: "station",
                    id: value.id.to_string(),
                    city: value.city_id.to_string(),
                });
            }
            if station_lookup.insert(value.id.clone(), i).is_some() {
                return Err(Error::DuplicateId {
                    table: "station",
                    id: value.id.to_string(),
                });
            }
            city_to_stations
                .entry(value.city_id.clone())
                .or_default()
                .push(i);
            stations.push(value);
        }
        atlas.stations = stations.into();
        atlas.station_lookup = station_lookup;
        atlas.city_to_stations = city_to_stations
            .into_iter()
            .map(|(key, value)| (key, value.into()))
            .collect();

        // Lines, and the station -> lines membership map built from them
        let mut line_lookup: IdToIndex = HashMap::new();
        let mut city_to_lines: HashMap<Arc<str>, Vec<usize>> = HashMap::new();
        let mut station_to_lines: HashMap<Arc<str>, Vec<usize>> = HashMap::new();
        let mut lines: Vec<Line> = Vec::new();
        for (i, row) in set.lines.into_iter().enumerate() {
            let Some(mode) = TransitMode::parse(&row.mode) else {
                return Err(Error::UnknownMode {
                    line: row.line_id,
                    mode: row.mode,
                });
            };
            let value = Line {
                id: row.line_id.into(),
                city_id: row.city_id.into(),
                name: row.name.clone().into(),
                normalized_name: row.name.to_lowercase().into(),
                color: row.color.into(),
                mode,
                stations: fixtures::models::split_list(&row.stations)
                    .into_iter()
                    .map(Arc::from)
                    .collect(),
            };
            if !atlas.city_lookup.contains_key(&value.city_id) {
                return Err(Error::UnknownCity {
                    table: "line",
                    id: value.id.to_string(),
                    city: value.city_id.to_string(),
                });
            }
            for station_id in value.stations.iter() {
                let Some(station_idx) = atlas.station_lookup.get(station_id) else {
                    return Err(Error::UnknownStation {
                        line: value.id.to_string(),
                        station: station_id.to_string(),
                    });
                };
                let station_id = atlas.stations[*station_idx].id.clone();
                station_to_lines.entry(station_id).or_default().push(i);
            }
            if line_lookup.insert(value.id.clone(), i).is_some() {
                return Err(Error::DuplicateId {
                    table: "line",
                    id: value.id.to_string(),
                });
            }
            city_to_lines
                .entry(value.city_id.clone())
                .or_default()
                .push(i);
            lines.push(value);
        }
        atlas.lines = lines.into();
        atlas.line_lookup = line_lookup;
        atlas.city_to_lines = city_to_lines
            .into_iter()
            .map(|(key, value)| (key, value.into()))
            .collect();
        atlas.station_to_lines = station_to_lines
            .into_iter()
            .map(|(key, value)| (key, value.into()))
            .collect();

        // Each station names its owning line, check those now that lines exist
        for station in atlas.stations.iter() {
            if !atlas.line_lookup.contains_key(&station.line_id) {
                return Err(Error::UnknownLine {
                    station: station.id.to_string(),
                    line: station.line_id.to_string(),
                });
            }
        }

        // POIs, merged from the three kind tables
        let mut poi_lookup: IdToIndex = HashMap::new();
        let mut city_to_pois: HashMap<Arc<str>, Vec<usize>> = HashMap::new();
        let mut pois: Vec<Poi> = Vec::new();
        let rows = set
            .attractions
            .into_iter()
            .map(Poi::from)
            .chain(set.hotels.into_iter().map(Poi::from))
            .chain(set.restaurants.into_iter().map(Poi::from));
        for (i, value) in rows.enumerate() {
            if !atlas.city_lookup.contains_key(&value.city_id) {
                return Err(Error::UnknownCity {
                    table: "poi",
                    id: value.id.to_string(),
                    city: value.city_id.to_string(),
                });
            }
            if poi_lookup.insert(value.id.clone(), i).is_some() {
                return Err(Error::DuplicateId {
                    table: "poi",
                    id: value.id.to_string(),
                });
            }
            city_to_pois
                .entry(value.city_id.clone())
                .or_default()
                .push(i);
            pois.push(value);
        }
        atlas.pois = pois.into();
        atlas.poi_lookup = poi_lookup;
        atlas.city_to_pois = city_to_pois
            .into_iter()
            .map(|(key, value)| (key, value.into()))
            .collect();

        // Intercity rides
        let mut ride_lookup: IdToIndex = HashMap::new();
        let mut city_pair_to_rides: HashMap<(Arc<str>, Arc<str>), Vec<usize>> = HashMap::new();
        let mut rides: Vec<Ride> = Vec::new();
        for (i, row) in set.intercity.into_iter().enumerate() {
            let value: Ride = row.into();
            for city in [&value.from_city, &value.to_city] {
                if !atlas.city_lookup.contains_key(city) {
                    return Err(Error::UnknownCity {
                        table: "ride",
                        id: value.id.to_string(),
                        city: city.to_string(),
                    });
                }
            }
            if ride_lookup.insert(value.id.clone(), i).is_some() {
                return Err(Error::DuplicateId {
                    table: "ride",
                    id: value.id.to_string(),
                });
            }
            city_pair_to_rides
                .entry((value.from_city.clone(), value.to_city.clone()))
                .or_default()
                .push(i);
            rides.push(value);
        }
        atlas.rides = rides.into();
        atlas.ride_lookup = ride_lookup;
        atlas.city_pair_to_rides = city_pair_to_rides
            .into_iter()
            .map(|(key, value)| (key, value.into()))
            .collect();

        debug!(
            cities = atlas.cities.len(),
            stations = atlas.stations.len(),
            lines = atlas.lines.len(),
            pois = atlas.pois.len(),
            rides = atlas.rides.len(),
            "atlas built"
        );
        Ok(atlas)
    }

    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    pub fn pois(&self) -> &[Poi] {
        &self.pois
    }

    /// Get a city with the given id.
    /// If no city is found with the given id None is returned.
    pub fn city_by_id(&self, id: &str) -> Option<&City> {
        let index = self.city_lookup.get(id)?;
        Some(&self.cities[*index])
    }

    /// Get a station with the given id.
    /// If no station is found with the given id None is returned.
    pub fn station_by_id(&self, id: &str) -> Option<&Station> {
        let index = self.station_lookup.get(id)?;
        Some(&self.stations[*index])
    }

    pub fn line_by_id(&self, id: &str) -> Option<&Line> {
        let index = self.line_lookup.get(id)?;
        Some(&self.lines[*index])
    }

    pub fn poi_by_id(&self, id: &str) -> Option<&Poi> {
        let index = self.poi_lookup.get(id)?;
        Some(&self.pois[*index])
    }

    pub fn ride_by_id(&self, id: &str) -> Option<&Ride> {
        let index = self.ride_lookup.get(id)?;
        Some(&self.rides[*index])
    }

    /// Returns all the stations registered for a city, in fixture order.
    /// None if the city has no stations (or is unknown), which callers must
    /// treat as a legitimate outcome.
    pub fn stations_in_city(&self, city_id: &str) -> Option<Vec<&Station>> {
        let stations = self.city_to_stations.get(city_id)?;
        Some(stations.iter().map(|i| &self.stations[*i]).collect())
    }

    pub fn lines_in_city(&self, city_id: &str) -> Option<Vec<&Line>> {
        let lines = self.city_to_lines.get(city_id)?;
        Some(lines.iter().map(|i| &self.lines[*i]).collect())
    }

    pub fn pois_in_city(&self, city_id: &str) -> Option<Vec<&Poi>> {
        let pois = self.city_to_pois.get(city_id)?;
        Some(pois.iter().map(|i| &self.pois[*i]).collect())
    }

    /// All the lines whose station sequence includes the given station.
    pub fn lines_through_station(&self, station_id: &str) -> Vec<&Line> {
        match self.station_to_lines.get(station_id) {
            Some(lines) => lines.iter().map(|i| &self.lines[*i]).collect(),
            None => Vec::new(),
        }
    }

    /// The station of the city closest to the coordinate by great-circle
    /// distance. Scans the city's station list in order; on an exact
    /// distance tie the first station in fixture order wins, so the result
    /// is deterministic. None when the city has no stations.
    pub fn nearest_station(&self, city_id: &str, coordinate: &Coordinate) -> Option<&Station> {
        let stations = self.city_to_stations.get(city_id)?;
        let mut nearest: Option<(&Station, f64)> = None;
        for index in stations.iter() {
            let station = &self.stations[*index];
            let distance = station.coordinate.distance(coordinate).as_meters();
            match nearest {
                Some((_, best)) if distance >= best => {}
                _ => nearest = Some((station, distance)),
            }
        }
        nearest.map(|(station, _)| station)
    }

    /// Direct intercity rides between two cities, in fixture order.
    pub fn rides_between(&self, from_city: &str, to_city: &str) -> Vec<&Ride> {
        match self
            .city_pair_to_rides
            .get(&(Arc::from(from_city), Arc::from(to_city)))
        {
            Some(rides) => rides.iter().map(|i| &self.rides[*i]).collect(),
            None => Vec::new(),
        }
    }

    /// Does a fuzzy search on all the stations, comparing their name to the needle.
    pub fn search_stations_by_name<'a>(&'a self, needle: &'a str) -> Vec<&'a Station> {
        shared::search(needle, &self.stations)
    }

    /// Does a fuzzy search on all the POIs, comparing their name to the needle.
    pub fn search_pois_by_name<'a>(&'a self, needle: &'a str) -> Vec<&'a Poi> {
        shared::search(needle, &self.pois)
    }
}
