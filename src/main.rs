use anyhow::{Context, Result};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use translate_gateway::config::Config;
use translate_gateway::engine::{HttpEngine, TranslationEngine};
use translate_gateway::routing::TranslationRouter;
use translate_gateway::server::{self, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("translate_gateway=info".parse()?),
        )
        .init();

    // Load configuration from environment
    let config = Config::from_env()?;

    info!(
        "Starting translation gateway on http://{}:{}",
        config.host, config.port
    );
    info!("Language packages will be installed by the engine on first use");

    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.engine_timeout_secs))
        .build()
        .context("Failed to build engine HTTP client")?;
    let engine: Arc<dyn TranslationEngine> =
        Arc::new(HttpEngine::new(client, config.engine_url.clone()));

    let router = TranslationRouter::new(engine, config.pivot_language.clone());
    let state = Arc::new(AppState::new(router, config.clone()));

    let listener = tokio::net::TcpListener::bind((config.host.as_str(), config.port))
        .await
        .with_context(|| format!("Failed to bind {}:{}", config.host, config.port))?;

    axum::serve(listener, server::app(state))
        .await
        .context("Server error")?;

    Ok(())
}
