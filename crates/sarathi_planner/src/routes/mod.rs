pub mod route_generator;
pub mod route_option;
pub mod route_plan;
pub mod route_query;
pub mod suggestions;
pub mod transport_mode;
