use std::path::{Path, PathBuf};

use clap::Subcommand;
use sarathi_dashboard::{
    panels::simulation::SimulationParams, session::session_context::SessionContext,
};
use sarathi_planner::{
    catalog::catalog::Catalog,
    routes::{route_plan::RoutePlan, route_query::RouteQuery},
};
use schemars::{JsonSchema, schema_for};
use tracing::info;

#[derive(Subcommand)]
pub enum GenerateSubcommands {
    JsonSchema {
        /// Output folder for the .json schema files
        #[arg(long, short = 'o')]
        out: PathBuf,
    },
}

pub fn run(subcommand: GenerateSubcommands) -> Result<(), anyhow::Error> {
    match subcommand {
        GenerateSubcommands::JsonSchema { out } => {
            std::fs::create_dir_all(&out)?;

            write_schema::<Catalog>(&out, "catalog")?;
            write_schema::<RouteQuery>(&out, "route_query")?;
            write_schema::<RoutePlan>(&out, "route_plan")?;
            write_schema::<SimulationParams>(&out, "simulation_params")?;
            write_schema::<SessionContext>(&out, "session_context")?;
        }
    }

    Ok(())
}

fn write_schema<T: JsonSchema>(out: &Path, name: &str) -> Result<(), anyhow::Error> {
    let path = out.join(format!("{name}.json"));
    std::fs::write(&path, serde_json::to_string_pretty(&schema_for!(T))?)?;
    info!("Wrote {}", path.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_schema_files() {
        let out = std::env::temp_dir().join(format!("sarathi-schemas-{}", std::process::id()));

        run(GenerateSubcommands::JsonSchema { out: out.clone() }).unwrap();

        for name in [
            "catalog",
            "route_query",
            "route_plan",
            "simulation_params",
            "session_context",
        ] {
            let content = std::fs::read_to_string(out.join(format!("{name}.json"))).unwrap();
            let schema: serde_json::Value = serde_json::from_str(&content).unwrap();
            assert!(schema.get("title").is_some(), "{name} schema has no title");
        }

        std::fs::remove_dir_all(&out).unwrap();
    }
}
