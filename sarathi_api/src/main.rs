mod app;
mod cities;
mod config;
mod dashboard;
mod error;
mod routes;
mod session;
mod state;

use std::sync::Arc;

use axum::serve;
use mimalloc::MiMalloc;
use sarathi_planner::catalog::catalog::Catalog;
use tracing::{Level, info};

use crate::app::build_router;
use crate::config::ServerConfig;
use crate::state::AppState;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenvy::from_filename("./.env.local").ok();
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    let config = ServerConfig::from_env()?;
    let catalog = Catalog::load(config.catalog_path.as_deref())?;
    info!("Loaded catalog with {} cities", catalog.cities().len());

    let state = Arc::new(AppState { catalog });
    let app = build_router(state);

    let address = config.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(address).await?;
    info!("Sarathi dashboard listening on http://{}", address);

    serve(listener, app).await?;

    Ok(())
}
