use serde::{Deserialize, Serialize};
use tabiji::{
    atlas::{Poi, PoiKind},
    shared::geo::Coordinate,
};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PoiDto {
    pub id: String,
    pub name: String,
    pub local_name: String,
    pub city: String,
    pub kind: String,
    pub price: u32,
    pub rating: f32,
    pub coordinate: Coordinate,
}

impl From<&Poi> for PoiDto {
    fn from(poi: &Poi) -> Self {
        let kind = match &poi.kind {
            PoiKind::Attraction { .. } => "attraction",
            PoiKind::Hotel { .. } => "hotel",
            PoiKind::Restaurant { .. } => "restaurant",
        };
        Self {
            id: poi.id.to_string(),
            name: poi.name.to_string(),
            local_name: poi.local_name.to_string(),
            city: poi.city_id.to_string(),
            kind: kind.to_string(),
            price: poi.price(),
            rating: poi.rating(),
            coordinate: poi.coordinate,
        }
    }
}
