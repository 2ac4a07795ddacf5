pub mod get_city;
pub mod get_locations;
pub mod list_cities;
