use serde::Deserialize;

/// Raw CSV rows, one struct per fixture table. List-valued columns are
/// semicolon-joined in the files and split with [`split_list`] at load.

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CityRow {
    pub city_id: String,
    pub name: String,
    pub local_name: String,
    pub region: String,
    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StationRow {
    pub station_id: String,
    pub name: String,
    pub local_name: String,
    pub city_id: String,
    pub line_id: String,
    pub line_color: String,
    pub lat: f64,
    pub lon: f64,
    pub connections: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LineRow {
    pub line_id: String,
    pub city_id: String,
    pub name: String,
    pub color: String,
    pub mode: String,
    pub stations: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AttractionRow {
    pub poi_id: String,
    pub name: String,
    pub local_name: String,
    pub city_id: String,
    pub category: String,
    pub lat: f64,
    pub lon: f64,
    pub entry_fee: u32,
    pub visit_minutes: u32,
    pub rating: f32,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HotelRow {
    pub poi_id: String,
    pub name: String,
    pub local_name: String,
    pub city_id: String,
    pub lat: f64,
    pub lon: f64,
    pub price_per_night: u32,
    pub rating: f32,
    pub amenities: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RestaurantRow {
    pub poi_id: String,
    pub name: String,
    pub local_name: String,
    pub city_id: String,
    pub cuisine: String,
    pub price_range: String,
    pub average_cost: u32,
    pub lat: f64,
    pub lon: f64,
    pub rating: f32,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct IntercityRow {
    pub route_id: String,
    pub from_city: String,
    pub to_city: String,
    pub train: String,
    pub duration_minutes: u32,
    pub price: u32,
    pub interval_minutes: u32,
}

pub(crate) fn split_list(value: &str) -> Vec<String> {
    value
        .split(';')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
}

#[test]
fn split_list_test() {
    assert_eq!(split_list("a;b;c"), vec!["a", "b", "c"]);
    assert_eq!(split_list(""), Vec::<String>::new());
    assert_eq!(split_list("a; b ;"), vec!["a", "b"]);
}
