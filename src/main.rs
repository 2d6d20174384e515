mod aggregate;
mod config;
mod error;
mod exercise;
mod harness;
mod runner;
mod server;
mod service;
mod workspace;

use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use crate::config::RunnerConfig;
use crate::exercise::TomlExerciseStore;
use crate::service::ExecutionService;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("dojo_runner=info".parse()?),
        )
        .init();

    dotenvy::dotenv().ok();

    info!("Starting Execution Worker...");

    let config = RunnerConfig::from_env();
    info!(
        "Runner config: interpreter={}, time_limit={:?}, max_code_bytes={}, scratch_dir={:?}",
        config.interpreter, config.time_limit, config.max_code_bytes, config.scratch_dir
    );

    // Load exercise registry
    let exercises_path =
        std::env::var("EXERCISES_CONFIG").unwrap_or_else(|_| "./files/exercises.toml".into());
    let store = TomlExerciseStore::load(std::path::Path::new(&exercises_path))?;
    info!("Loaded {} exercises from {}", store.count(), exercises_path);

    let service = Arc::new(ExecutionService::new(config, Arc::new(store)));

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".into());
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    info!("Execution worker listening on {}", bind_addr);

    axum::serve(listener, server::router(service)).await?;

    Ok(())
}
