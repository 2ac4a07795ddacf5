use std::sync::Arc;

use axum::{
    Router,
    http::Method,
    routing::{get, post},
};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};

use crate::{
    cities::{
        get_city::get_city_handler, get_locations::get_locations_handler,
        list_cities::list_cities_handler,
    },
    dashboard::{
        congestion::congestion_handler, forecast::forecast_handler, insights::insights_handler,
        overview::overview_handler, page::page_handler,
        route_optimization::route_optimization_handler, simulation::simulation_handler,
    },
    routes::post_routes::post_routes_handler,
    session::handlers::{
        change_city_handler, change_datetime_handler, new_session_handler, optimize_handler,
        simulate_handler,
    },
    state::AppState,
};

pub fn build_router(state: Arc<AppState>) -> Router {
    let cors_layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_origin(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(page_handler))
        .route("/cities", get(list_cities_handler))
        .route("/cities/{city}", get(get_city_handler))
        .route("/cities/{city}/locations", get(get_locations_handler))
        .route("/routes", post(post_routes_handler))
        .route("/dashboard/{city}/overview", get(overview_handler))
        .route("/insights", get(insights_handler))
        .route("/forecast", get(forecast_handler))
        .route("/congestion/{city}", get(congestion_handler))
        .route("/route-optimization", post(route_optimization_handler))
        .route("/simulation", post(simulation_handler))
        .route("/session", post(new_session_handler))
        .route("/session/city", post(change_city_handler))
        .route("/session/datetime", post(change_datetime_handler))
        .route("/session/optimize", post(optimize_handler))
        .route("/session/simulate", post(simulate_handler))
        .layer(ServiceBuilder::new().layer(cors_layer))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use axum::{
        body::{Body, to_bytes},
        http::{Request, StatusCode, header},
    };
    use sarathi_planner::catalog::catalog::Catalog;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use super::*;

    fn app() -> Router {
        build_router(Arc::new(AppState {
            catalog: Catalog::embedded().unwrap(),
        }))
    }

    async fn send(request: Request<Body>) -> (StatusCode, Vec<u8>) {
        let response = app().oneshot(request).await.unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, body.to_vec())
    }

    async fn get_json(uri: &str) -> (StatusCode, Value) {
        let (status, body) = send(Request::get(uri).body(Body::empty()).unwrap()).await;
        (status, serde_json::from_slice(&body).unwrap_or(Value::Null))
    }

    async fn post_json(uri: &str, payload: Value) -> (StatusCode, Value) {
        let request = Request::post(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(payload.to_string()))
            .unwrap();
        let (status, body) = send(request).await;
        (status, serde_json::from_slice(&body).unwrap_or(Value::Null))
    }

    #[tokio::test]
    async fn test_dashboard_page() {
        let (status, body) = send(Request::get("/").body(Body::empty()).unwrap()).await;

        assert_eq!(status, StatusCode::OK);
        let page = String::from_utf8(body).unwrap();
        assert!(page.contains("Sarathi"));
        assert!(page.contains("requested_modes"));
        for endpoint in [
            "/overview",
            "/insights",
            "/forecast",
            "/congestion/",
            "/route-optimization",
            "/simulation",
            "/session/city",
            "/session/datetime",
            "/session/optimize",
            "/session/simulate",
        ] {
            assert!(page.contains(endpoint), "page does not call {endpoint}");
        }
    }

    #[tokio::test]
    async fn test_list_cities() {
        let (status, body) = get_json("/cities").await;

        assert_eq!(status, StatusCode::OK);
        let cities = body.as_array().unwrap();
        assert_eq!(cities.len(), 40);
        assert_eq!(cities[0], json!({ "name": "Mumbai", "has_metro": true }));
        assert!(cities.contains(&json!({ "name": "Surat", "has_metro": false })));
    }

    #[tokio::test]
    async fn test_get_city() {
        let (status, body) = get_json("/cities/Mumbai").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["has_metro"], json!(true));
        assert_eq!(body["current_location"], json!("Your Location (19.0760, 72.8777)"));
        assert_eq!(body["infrastructure"]["type"], json!("FeatureCollection"));
        assert_eq!(body["infrastructure"]["features"].as_array().unwrap().len(), 15);
    }

    #[tokio::test]
    async fn test_get_unknown_city() {
        let (status, _) = get_json("/cities/Atlantis").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_locations_for_city_without_data() {
        let (status, body) = get_json("/cities/Surat/locations").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!([
                "Current Location",
                "Airport",
                "Business District",
                "Central Station",
                "Downtown",
                "Mall",
                "University"
            ])
        );
    }

    #[tokio::test]
    async fn test_post_routes() {
        let (status, body) = post_json(
            "/routes",
            json!({ "start_location": "CST", "end_location": "Dadar", "city": "Mumbai" }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total_routes"], json!(4));
        assert_eq!(body["routes"][0]["mode"], json!("metro"));
        assert_eq!(body["message"], json!("Found 4 routes from CST to Dadar"));
    }

    #[tokio::test]
    async fn test_post_routes_without_results() {
        let (status, body) = post_json(
            "/routes",
            json!({
                "start_location": "CST",
                "end_location": "Dadar",
                "city": "Mumbai",
                "requested_modes": ["walking"]
            }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total_routes"], json!(0));
        assert_eq!(
            body["message"],
            json!(
                "No routes found between CST and Dadar. Please try different locations or transport modes."
            )
        );
    }

    #[tokio::test]
    async fn test_post_routes_without_modes() {
        let request = Request::post("/routes")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(
                json!({
                    "start_location": "CST",
                    "end_location": "Dadar",
                    "city": "Mumbai",
                    "requested_modes": []
                })
                .to_string(),
            ))
            .unwrap();
        let (status, body) = send(request).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, b"Please select at least one transport mode.");
    }

    #[tokio::test]
    async fn test_current_location_start() {
        let (status, body) = post_json(
            "/routes",
            json!({ "start_location": "Current Location", "end_location": "Dadar", "city": "Mumbai" }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body["start_location"],
            json!("Your Location (19.0760, 72.8777)")
        );
    }

    #[tokio::test]
    async fn test_dashboard_panels() {
        let (status, overview) = get_json("/dashboard/Mumbai/overview").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(overview["city"], json!("Mumbai"));

        let (status, _) = get_json("/dashboard/Atlantis/overview").await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, insights) = get_json("/insights?date=2025-06-10").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(insights["network_kpis"][0]["points"].as_array().unwrap().len(), 14);

        let (status, forecast) =
            get_json("/forecast?city=Mumbai&area=western_line&date=2025-06-10").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(forecast["area"], json!("western_line"));

        let (status, congestion) = get_json("/congestion/Mumbai").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(congestion["hotspots"].as_array().unwrap().len(), 7);
    }

    #[tokio::test]
    async fn test_route_optimization() {
        let request = json!({
            "city": "Mumbai",
            "transport_type": "both",
            "goal": "minimize_travel_time",
            "time_of_day": "morning_rush",
            "weather": "normal"
        });
        let (status, body) = post_json("/route-optimization", request).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["route"].is_object());

        let request = json!({
            "city": "Pune",
            "transport_type": "bus",
            "goal": "maximize_ridership",
            "time_of_day": "night",
            "weather": "heavy_rain"
        });
        let (status, body) = post_json("/route-optimization", request).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["route"].is_null());
    }

    #[tokio::test]
    async fn test_simulation() {
        let (status, body) = post_json(
            "/simulation",
            json!({
                "city": "Mumbai",
                "params": { "passenger_increase": 30, "traffic_congestion": 1.6, "weather": "Rain" }
            }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["passenger_satisfaction"], json!(54));

        let (status, _) = post_json(
            "/simulation",
            json!({
                "city": "Mumbai",
                "params": { "passenger_increase": 300, "traffic_congestion": 1.0 }
            }),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_session_flow() {
        let (status, session) = post_json("/session", json!(null)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(session["city"], json!("Delhi"));

        let (status, session) = post_json("/session/optimize", session).await;
        assert_eq!(status, StatusCode::OK);
        assert!(session["optimization"].is_object());

        let (status, session) = post_json(
            "/session/city",
            json!({ "session": session, "city": "Mumbai" }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(session["city"], json!("Mumbai"));
        assert!(session["optimization"].is_null());

        let (status, session) = post_json(
            "/session/datetime",
            json!({ "session": session, "date": "2025-06-10", "time": "18:30:00" }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(session["date"], json!("2025-06-10"));

        let (status, session) = post_json(
            "/session/simulate",
            json!({ "session": session, "params": { "passenger_increase": 10, "traffic_congestion": 1.2 } }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(session["show_simulation"], json!(true));
        assert_eq!(session["simulation"]["city"], json!("Mumbai"));

        let (status, _) = post_json(
            "/session/city",
            json!({ "session": session, "city": "Atlantis" }),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
