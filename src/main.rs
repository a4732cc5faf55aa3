use anyhow::Context;
use tracing::info;

use name_catalog::api::{create_router, AppState};
use name_catalog::config::AppConfig;
use name_catalog::store;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "name_catalog=info,tower_http=debug".to_string()),
        )
        .init();

    // Load environment variables
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env();

    // Connect to the configured backend and create the schema if needed
    let store = store::connect(&config.database)
        .await
        .context("failed to connect to the database")?;

    let state = AppState::new(store, config.page_size);
    let app = create_router(state);

    let addr = format!("0.0.0.0:{}", config.port);
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    axum::serve(listener, app).await?;

    Ok(())
}
