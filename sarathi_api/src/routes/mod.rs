pub mod post_routes;
