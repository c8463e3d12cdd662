/// File names for each table inside a fixture pack.
pub struct Config {
    pub cities_file_name: String,
    pub stations_file_name: String,
    pub lines_file_name: String,
    pub attractions_file_name: String,
    pub hotels_file_name: String,
    pub restaurants_file_name: String,
    pub intercity_file_name: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cities_file_name: "cities.txt".into(),
            stations_file_name: "stations.txt".into(),
            lines_file_name: "lines.txt".into(),
            attractions_file_name: "attractions.txt".into(),
            hotels_file_name: "hotels.txt".into(),
            restaurants_file_name: "restaurants.txt".into(),
            intercity_file_name: "intercity.txt".into(),
        }
    }
}
