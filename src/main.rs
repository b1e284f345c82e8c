mod api_doc;
mod config;
mod error;
mod handlers;
mod models;
mod routes;
mod state;
mod store;

use anyhow::Context;
use config::Config;
use state::AppState;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    tracing::info!("items-api starting");

    let config = Config::from_env()?;
    config.log_startup();

    let store = store::from_config(&config).await?;

    let addr = format!("{}:{}", config.service_host, config.service_port);
    let state = AppState {
        store,
        config: Arc::new(config),
    };

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    tracing::info!("Listening on {}", addr);
    axum::serve(listener, routes::router(state))
        .await
        .context("Server error")?;

    Ok(())
}
