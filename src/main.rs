use anyhow::Result;
use product_catalog_rust::catalog::AppState;
use product_catalog_rust::router::create_app_router;
use product_catalog_rust::Config;
use std::sync::Arc;
use tracing::{info, Level};
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration from environment
    let config = Config::from_env()?;

    init_logging(&config.logging.level);

    // Initialize application state
    let state = Arc::new(AppState::new());
    info!("Catalog loaded with {} product(s)", state.store.len());

    // Build application router with all routes and middleware
    let app = create_app_router(state);

    let addr = config.server.address();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(product_catalog_rust::Error::from)?;
    info!("Server running on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Initialize the logging subsystem.
fn init_logging(level: &str) {
    let level = match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}
