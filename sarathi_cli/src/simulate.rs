use clap::Args;
use comfy_table::{Table, presets::UTF8_FULL};
use jiff::Zoned;
use sarathi_dashboard::panels::simulation::{
    SimulationParams, SimulationReport, Weather, run_simulation,
};
use sarathi_planner::catalog::catalog::Catalog;

use crate::parsers;

#[derive(Args)]
pub struct SimulateArgs {
    #[arg(short, long, default_value = "Delhi")]
    city: String,

    /// Change in passenger numbers, in percent (-50 to 100)
    #[arg(short, long, default_value_t = 0, allow_hyphen_values = true)]
    passenger_increase: i32,

    /// Traffic congestion factor (0.5 to 2.0)
    #[arg(short = 'g', long, default_value_t = 1.0)]
    congestion: f64,

    #[arg(short, long, value_parser = parsers::parse_weather, default_value = "clear")]
    weather: Weather,

    #[arg(long)]
    json: bool,
}

pub fn run(catalog: &Catalog, args: SimulateArgs) -> Result<(), anyhow::Error> {
    if !catalog.is_known_city(&args.city) {
        anyhow::bail!("Unknown city {:?}", args.city);
    }

    let params = SimulationParams {
        passenger_increase: args.passenger_increase,
        traffic_congestion: args.congestion,
        weather: args.weather,
    };
    let report = run_simulation(&args.city, Zoned::now().datetime(), params)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report_table(&report));
        for recommendation in &report.recommendations {
            println!("- {recommendation}");
        }
    }

    Ok(())
}

fn report_table(report: &SimulationReport) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_header(vec!["Metric", "Value", "Change"]);

    for metric in &report.metrics {
        table.add_row(vec![
            metric.label.clone(),
            metric.value.clone(),
            metric.delta.clone().unwrap_or_default(),
        ]);
    }

    table
}
