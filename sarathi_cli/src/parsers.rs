use sarathi_dashboard::panels::simulation::Weather;
use sarathi_planner::routes::transport_mode::TransportMode;

pub fn parse_mode(input: &str) -> Result<TransportMode, String> {
    input
        .parse::<TransportMode>()
        .map_err(|error| error.to_string())
}

pub fn parse_weather(input: &str) -> Result<Weather, String> {
    match input.trim().to_lowercase().replace(['-', '_'], " ").as_str() {
        "clear" => Ok(Weather::Clear),
        "rain" => Ok(Weather::Rain),
        "fog" => Ok(Weather::Fog),
        "extreme heat" | "heat" => Ok(Weather::ExtremeHeat),
        _ => Err(format!(
            "Invalid weather {input:?}, expected one of clear, rain, fog, extreme-heat"
        )),
    }
}
