use clap::Args;
use comfy_table::{Table, presets::UTF8_FULL};
use sarathi_planner::{
    catalog::catalog::Catalog,
    routes::{
        route_generator::SyntheticRouteGenerator, route_plan::RoutePlan, route_query::RouteQuery,
        suggestions::resolve_start_label, transport_mode::TransportMode,
    },
};
use tracing::info;

use crate::parsers;

#[derive(Args)]
pub struct RoutesArgs {
    #[arg(short, long, default_value = "Delhi")]
    city: String,

    /// Starting point, "Current Location" uses the city centre
    #[arg(short, long)]
    from: String,

    #[arg(short, long)]
    to: String,

    /// Comma separated transport modes (default: all)
    #[arg(short, long, value_delimiter = ',', value_parser = parsers::parse_mode)]
    modes: Vec<TransportMode>,

    /// Print the plan as JSON instead of a table
    #[arg(long)]
    json: bool,
}

pub fn run(catalog: &Catalog, args: RoutesArgs) -> Result<(), anyhow::Error> {
    let start = resolve_start_label(catalog, &args.city, &args.from);
    let mut query = RouteQuery::new(start, args.to, args.city);
    if !args.modes.is_empty() {
        query = query.with_modes(args.modes);
    }
    query.validate()?;

    let plan = SyntheticRouteGenerator::new(catalog).generate(&query);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
        return Ok(());
    }

    info!("{}", plan.summary());
    if let Some(fastest) = plan.fastest() {
        info!(
            "Fastest option: {} in {} min",
            fastest.mode.label(),
            fastest.duration_minutes
        );
    }
    if !plan.is_empty() {
        println!("{}", plan_table(&plan));
    }

    Ok(())
}

fn plan_table(plan: &RoutePlan) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(vec![
        "Mode",
        "Duration",
        "Distance",
        "Cost",
        "CO2",
        "Transfers",
        "Congestion",
        "Frequency",
    ]);

    for route in &plan.routes {
        table.add_row(vec![
            format!("{} {}", route.icon, route.mode.label()),
            format!("{} min", route.duration_minutes),
            format!("{} km", route.distance_km),
            format!("₹{}", route.cost),
            format!("{} kg", route.emissions_kg),
            route.transfers.to_string(),
            route.congestion_band().label().to_string(),
            route.departure_frequency.clone(),
        ]);
    }

    table
}

#[cfg(test)]
mod tests {
    use sarathi_planner::routes::route_generator::calculate_routes;

    use super::*;

    #[test]
    fn test_plan_table() {
        let catalog = Catalog::embedded().unwrap();
        let plan = calculate_routes(&catalog, "CST", "Dadar", "Mumbai", None);
        let rendered = plan_table(&plan).to_string();

        assert!(rendered.contains("14 min"));
        assert!(rendered.contains("₹45"));
        assert_eq!(plan_table(&plan).row_iter().count(), 4);
    }
}
