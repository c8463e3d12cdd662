use serde::{Deserialize, Serialize};
use tabiji::{atlas::Station, shared::geo::Coordinate};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StationDto {
    pub id: String,
    pub name: String,
    pub local_name: String,
    pub city: String,
    pub line: String,
    pub line_color: String,
    pub coordinate: Coordinate,
}

impl From<&Station> for StationDto {
    fn from(station: &Station) -> Self {
        Self {
            id: station.id.to_string(),
            name: station.name.to_string(),
            local_name: station.local_name.to_string(),
            city: station.city_id.to_string(),
            line: station.line_id.to_string(),
            line_color: station.line_color.to_string(),
            coordinate: station.coordinate,
        }
    }
}
