use std::{fmt::Display, sync::Arc};

use crate::{
    fixtures::models::{
        AttractionRow, CityRow, HotelRow, RestaurantRow, StationRow, split_list,
    },
    shared::{Identifiable, geo::Coordinate, time::Duration},
};

#[derive(Debug, Default, Clone)]
pub struct City {
    pub id: Arc<str>,
    pub name: Arc<str>,
    pub local_name: Arc<str>,
    pub normalized_name: Arc<str>,
    pub region: Arc<str>,
    pub coordinate: Coordinate,
}

impl Identifiable for City {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn normalized_name(&self) -> &str {
        &self.normalized_name
    }
}

impl From<CityRow> for City {
    fn from(value: CityRow) -> Self {
        Self {
            id: value.city_id.into(),
            name: value.name.clone().into(),
            local_name: value.local_name.into(),
            normalized_name: value.name.to_lowercase().into(),
            region: value.region.into(),
            coordinate: Coordinate {
                latitude: value.lat,
                longitude: value.lon,
            },
        }
    }
}

#[derive(Debug, Default, Clone)]
pub struct Station {
    pub id: Arc<str>,
    pub name: Arc<str>,
    pub local_name: Arc<str>,
    pub normalized_name: Arc<str>,
    pub city_id: Arc<str>,
    pub line_id: Arc<str>,
    pub line_color: Arc<str>,
    pub coordinate: Coordinate,
    // Free-form interchange labels straight from the fixtures, not resolved
    // line references.
    pub connections: Box<[Arc<str>]>,
}

impl Identifiable for Station {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn normalized_name(&self) -> &str {
        &self.normalized_name
    }
}

impl From<StationRow> for Station {
    fn from(value: StationRow) -> Self {
        Self {
            id: value.station_id.into(),
            name: value.name.clone().into(),
            local_name: value.local_name.into(),
            normalized_name: value.name.to_lowercase().into(),
            city_id: value.city_id.into(),
            line_id: value.line_id.into(),
            line_color: value.line_color.into(),
            coordinate: Coordinate {
                latitude: value.lat,
                longitude: value.lon,
            },
            connections: split_list(&value.connections)
                .into_iter()
                .map(Arc::from)
                .collect(),
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum TransitMode {
    #[default]
    Metro,
    Bus,
    Train,
}

impl TransitMode {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "metro" => Some(Self::Metro),
            "bus" => Some(Self::Bus),
            "train" => Some(Self::Train),
            _ => None,
        }
    }
}

impl Display for TransitMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Metro => f.write_str("Metro"),
            Self::Bus => f.write_str("Bus"),
            Self::Train => f.write_str("Train"),
        }
    }
}

#[derive(Debug, Default, Clone)]
pub struct Line {
    pub id: Arc<str>,
    pub city_id: Arc<str>,
    pub name: Arc<str>,
    pub normalized_name: Arc<str>,
    pub color: Arc<str>,
    pub mode: TransitMode,
    // Station ids in line order.
    pub stations: Box<[Arc<str>]>,
}

impl Identifiable for Line {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn normalized_name(&self) -> &str {
        &self.normalized_name
    }
}

impl Line {
    pub fn serves(&self, station_id: &str) -> bool {
        self.stations.iter().any(|id| id.as_ref() == station_id)
    }
}

/// A point of interest with its kind-specific data behind a single tagged
/// union, so callers never probe for optional fields.
#[derive(Debug, Default, Clone)]
pub struct Poi {
    pub id: Arc<str>,
    pub name: Arc<str>,
    pub local_name: Arc<str>,
    pub normalized_name: Arc<str>,
    pub city_id: Arc<str>,
    pub coordinate: Coordinate,
    pub kind: PoiKind,
}

#[derive(Debug, Clone)]
pub enum PoiKind {
    Attraction {
        category: Arc<str>,
        entry_fee: u32,
        visit_time: Duration,
        rating: f32,
    },
    Hotel {
        price_per_night: u32,
        rating: f32,
        amenities: Box<[Arc<str>]>,
    },
    Restaurant {
        cuisine: Arc<str>,
        price_range: Arc<str>,
        average_cost: u32,
        rating: f32,
    },
}

impl Default for PoiKind {
    fn default() -> Self {
        Self::Attraction {
            category: "".into(),
            entry_fee: 0,
            visit_time: Duration::default(),
            rating: 0.0,
        }
    }
}

impl Poi {
    /// What one visit/night/meal is expected to cost, in yen.
    pub fn price(&self) -> u32 {
        match &self.kind {
            PoiKind::Attraction { entry_fee, .. } => *entry_fee,
            PoiKind::Hotel {
                price_per_night, ..
            } => *price_per_night,
            PoiKind::Restaurant { average_cost, .. } => *average_cost,
        }
    }

    pub fn rating(&self) -> f32 {
        match &self.kind {
            PoiKind::Attraction { rating, .. }
            | PoiKind::Hotel { rating, .. }
            | PoiKind::Restaurant { rating, .. } => *rating,
        }
    }
}

impl Identifiable for Poi {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn normalized_name(&self) -> &str {
        &self.normalized_name
    }
}

impl From<AttractionRow> for Poi {
    fn from(value: AttractionRow) -> Self {
        Self {
            id: value.poi_id.into(),
            name: value.name.clone().into(),
            local_name: value.local_name.into(),
            normalized_name: value.name.to_lowercase().into(),
            city_id: value.city_id.into(),
            coordinate: Coordinate {
                latitude: value.lat,
                longitude: value.lon,
            },
            kind: PoiKind::Attraction {
                category: value.category.into(),
                entry_fee: value.entry_fee,
                visit_time: Duration::from_minutes(value.visit_minutes),
                rating: value.rating,
            },
        }
    }
}

impl From<HotelRow> for Poi {
    fn from(value: HotelRow) -> Self {
        Self {
            id: value.poi_id.into(),
            name: value.name.clone().into(),
            local_name: value.local_name.into(),
            normalized_name: value.name.to_lowercase().into(),
            city_id: value.city_id.into(),
            coordinate: Coordinate {
                latitude: value.lat,
                longitude: value.lon,
            },
            kind: PoiKind::Hotel {
                price_per_night: value.price_per_night,
                rating: value.rating,
                amenities: split_list(&value.amenities)
                    .into_iter()
                    .map(Arc::from)
                    .collect(),
            },
        }
    }
}

impl From<RestaurantRow> for Poi {
    fn from(value: RestaurantRow) -> Self {
        Self {
            id: value.poi_id.into(),
            name: value.name.clone().into(),
            local_name: value.local_name.into(),
            normalized_name: value.name.to_lowercase().into(),
            city_id: value.city_id.into(),
            coordinate: Coordinate {
                latitude: value.lat,
                longitude: value.lon,
            },
            kind: PoiKind::Restaurant {
                cuisine: value.cuisine.into(),
                price_range: value.price_range.into(),
                average_cost: value.average_cost,
                rating: value.rating,
            },
        }
    }
}
