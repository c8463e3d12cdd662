use serde::de::DeserializeOwned;
use std::{
    fs::File,
    io::{self, Read},
    path::PathBuf,
};
use thiserror::Error;
use tracing::warn;
use zip::ZipArchive;

mod config;
pub mod models;
pub use config::*;
use models::*;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Zip error: {0}")]
    Zip(#[from] zip::result::ZipError),
    #[error("Csv error: {0}")]
    Csv(#[from] csv::Error),
}

/// Where the fixture tables come from. The bundled dataset covers the
/// default cities and is compiled into the binary; a directory or zip pack
/// can replace it wholesale.
#[derive(Default)]
pub enum Storage {
    #[default]
    Bundled,
    Dir(PathBuf),
    Zip(PathBuf),
}

#[derive(Default)]
pub struct Fixtures {
    config: Config,
    storage: Storage,
}

/// The raw rows of every fixture table, before validation.
#[derive(Default, Debug)]
pub struct FixtureSet {
    pub cities: Vec<CityRow>,
    pub stations: Vec<StationRow>,
    pub lines: Vec<LineRow>,
    pub attractions: Vec<AttractionRow>,
    pub hotels: Vec<HotelRow>,
    pub restaurants: Vec<RestaurantRow>,
    pub intercity: Vec<IntercityRow>,
}

impl Fixtures {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    pub fn from_dir(mut self, path: PathBuf) -> Self {
        self.storage = Storage::Dir(path);
        self
    }

    pub fn from_zip(mut self, path: PathBuf) -> Self {
        self.storage = Storage::Zip(path);
        self
    }

    /// Reads every table from the configured storage. A missing table is
    /// not an error, it just loads empty; absence of reference data is a
    /// legitimate state for the lookups built on top.
    pub fn load(&self) -> Result<FixtureSet, Error> {
        let mut set = FixtureSet::default();
        match &self.storage {
            Storage::Bundled => {
                parse_csv(&mut set.cities, bundled::CITIES.as_bytes())?;
                parse_csv(&mut set.stations, bundled::STATIONS.as_bytes())?;
                parse_csv(&mut set.lines, bundled::LINES.as_bytes())?;
                parse_csv(&mut set.attractions, bundled::ATTRACTIONS.as_bytes())?;
                parse_csv(&mut set.hotels, bundled::HOTELS.as_bytes())?;
                parse_csv(&mut set.restaurants, bundled::RESTAURANTS.as_bytes())?;
                parse_csv(&mut set.intercity, bundled::INTERCITY.as_bytes())?;
            }
            Storage::Dir(path) => {
                parse_csv_file(&mut set.cities, path.join(&self.config.cities_file_name))?;
                parse_csv_file(&mut set.stations, path.join(&self.config.stations_file_name))?;
                parse_csv_file(&mut set.lines, path.join(&self.config.lines_file_name))?;
                parse_csv_file(
                    &mut set.attractions,
                    path.join(&self.config.attractions_file_name),
                )?;
                parse_csv_file(&mut set.hotels, path.join(&self.config.hotels_file_name))?;
                parse_csv_file(
                    &mut set.restaurants,
                    path.join(&self.config.restaurants_file_name),
                )?;
                parse_csv_file(&mut set.intercity, path.join(&self.config.intercity_file_name))?;
            }
            Storage::Zip(path) => {
                let file = File::open(path)?;
                let mut archive = ZipArchive::new(file)?;
                parse_csv_zip(&mut set.cities, &mut archive, &self.config.cities_file_name)?;
                parse_csv_zip(&mut set.stations, &mut archive, &self.config.stations_file_name)?;
                parse_csv_zip(&mut set.lines, &mut archive, &self.config.lines_file_name)?;
                parse_csv_zip(
                    &mut set.attractions,
                    &mut archive,
                    &self.config.attractions_file_name,
                )?;
                parse_csv_zip(&mut set.hotels, &mut archive, &self.config.hotels_file_name)?;
                parse_csv_zip(
                    &mut set.restaurants,
                    &mut archive,
                    &self.config.restaurants_file_name,
                )?;
                parse_csv_zip(
                    &mut set.intercity,
                    &mut archive,
                    &self.config.intercity_file_name,
                )?;
            }
        }
        Ok(set)
    }
}

fn parse_csv<R, T>(buf: &mut Vec<T>, reader: R) -> Result<(), Error>
where
    R: Read,
    T: DeserializeOwned,
{
    let mut rdr = csv::Reader::from_reader(reader);
    for result in rdr.deserialize() {
        let record: T = result?;
        buf.push(record);
    }
    Ok(())
}

fn parse_csv_file<T>(buf: &mut Vec<T>, path: PathBuf) -> Result<(), Error>
where
    T: DeserializeOwned,
{
    if !path.exists() {
        warn!("Missing fixture table {}", path.display());
        return Ok(());
    }
    let file = File::open(path)?;
    parse_csv(buf, file)
}

fn parse_csv_zip<T>(
    buf: &mut Vec<T>,
    archive: &mut ZipArchive<File>,
    name: &str,
) -> Result<(), Error>
where
    T: DeserializeOwned,
{
    let Some(index) = archive.index_for_name(name) else {
        warn!("Missing fixture table {name}");
        return Ok(());
    };
    let file = archive.by_index(index)?;
    parse_csv(buf, file)
}

mod bundled {
    pub const CITIES: &str = include_str!("bundled/cities.txt");
    pub const STATIONS: &str = include_str!("bundled/stations.txt");
    pub const LINES: &str = include_str!("bundled/lines.txt");
    pub const ATTRACTIONS: &str = include_str!("bundled/attractions.txt");
    pub const HOTELS: &str = include_str!("bundled/hotels.txt");
    pub const RESTAURANTS: &str = include_str!("bundled/restaurants.txt");
    pub const INTERCITY: &str = include_str!("bundled/intercity.txt");
}
