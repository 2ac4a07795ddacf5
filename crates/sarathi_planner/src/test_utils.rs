pub fn minimal_catalog_json() -> String {
    r#"{
        "default_center": { "lat": 20.5937, "lon": 78.9629 },
        "metro_cities": ["Metropolis"],
        "placeholder_landmarks": [
            { "name": "Central", "lat": 20.0, "lon": 77.0 },
            { "name": "Suburb", "lat": 20.08, "lon": 77.08 }
        ],
        "default_suggestions": ["Downtown", "Airport"],
        "cities": [{ "name": "Metropolis" }]
    }"#
    .to_string()
}
