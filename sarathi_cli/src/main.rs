use std::path::PathBuf;

use clap::{Parser, Subcommand};
use mimalloc::MiMalloc;
use sarathi_planner::catalog::catalog::Catalog;

use crate::{generate::GenerateSubcommands, routes::RoutesArgs, simulate::SimulateArgs};

mod cities;
mod generate;
mod parsers;
mod routes;
mod simulate;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[arg(short, long)]
    debug: bool,

    /// City catalog to use instead of the embedded one
    #[arg(long, global = true, env = "SARATHI_CATALOG")]
    catalog: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate route options between two places of a city
    #[command(visible_alias = "r")]
    Routes {
        #[command(flatten)]
        args: RoutesArgs,
    },
    /// Run a what-if simulation of the transport network
    Simulate {
        #[command(flatten)]
        args: SimulateArgs,
    },
    /// List the cities of the catalog
    Cities,
    #[command(visible_alias = "g")]
    Generate {
        #[command(subcommand)]
        commands: GenerateSubcommands,
    },
}

fn main() -> Result<(), anyhow::Error> {
    dotenvy::from_filename("./.env.local").ok();

    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(if cli.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .init();

    let load_catalog = || Catalog::load(cli.catalog.as_deref());

    match cli.command {
        Some(Commands::Routes { args }) => routes::run(&load_catalog()?, args)?,
        Some(Commands::Simulate { args }) => simulate::run(&load_catalog()?, args)?,
        Some(Commands::Cities) => cities::run(&load_catalog()?)?,
        Some(Commands::Generate { commands }) => generate::run(commands)?,
        None => {}
    }

    Ok(())
}
