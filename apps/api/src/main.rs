mod advisor;
mod catalog;
mod config;
mod errors;
mod interview;
mod llm_client;
mod models;
mod resume;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::catalog::loader::load_catalog;
use crate::config::Config;
use crate::llm_client::Gateway;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Pathwise API v{}", env!("CARGO_PKG_VERSION"));

    // The dataset is re-read per request; this only reports its state at boot.
    match load_catalog(&config.skills_dataset_path) {
        Ok(entries) => info!(
            "Skills dataset {} has {} rows",
            config.skills_dataset_path,
            entries.len()
        ),
        Err(e) => warn!("Skills dataset unavailable, gap analysis will use default skills: {e}"),
    }

    let gateway = Gateway::from_config(&config);
    match &gateway {
        Gateway::Available(handle) => info!("LLM gateway available (model: {})", handle.model()),
        Gateway::Unavailable(reason) => warn!("LLM gateway unavailable, running offline: {reason}"),
    }

    let state = AppState::new(config.clone(), gateway);

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins once the frontend host is fixed

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
