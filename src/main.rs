use search_gateway::config::Config;
use search_gateway::engine::index::{ensure_index_exists, log_index_status};
use search_gateway::engine::types::{DEFAULT_INDEX, IndexMapping};
use search_gateway::engine::{ElasticsearchClient, SharedEngine};
use search_gateway::gateway;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;
    tracing::info!("Using Elasticsearch at {}", config.elasticsearch_url);

    // 1. Engine client:
    let engine: SharedEngine = Arc::new(ElasticsearchClient::from_config(&config)?);

    // 2. Index initializer (best-effort, the server does not wait for it):
    let init_engine = engine.clone();
    tokio::spawn(async move {
        let result = ensure_index_exists(
            init_engine.as_ref(),
            DEFAULT_INDEX,
            &IndexMapping::default_schema(),
        )
        .await;
        log_index_status(DEFAULT_INDEX, &result);
    });

    // 3. HTTP Router:
    let app = gateway::router(engine);

    // 4. Start HTTP server:
    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    tracing::info!("Server is running on port {}", config.port);
    tracing::info!("Press Ctrl+C to shutdown");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
