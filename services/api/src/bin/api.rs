//! services/api/src/bin/api.rs

use api_lib::{
    adapters::{GeminiConfig, GeminiTextClient, SqliteUserStore},
    config::Config,
    error::ApiError,
    startup::build_router,
    web::state::AppState,
};
use listing_insights_core::ports::TextGenerationService;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), ApiError> {
    // --- 1. Load Configuration & Set Up Logging ---
    let config = Arc::new(Config::from_env()?);
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(config.log_level.to_string()))
        .with(tracing_subscriber::fmt::layer())
        .init();
    info!("Configuration loaded. Starting server...");

    // --- 2. Initialize Service Adapters ---
    // The user store opens its SQLite file lazily, one connection per request,
    // so nothing is touched on disk until the first login arrives.
    let store = Arc::new(SqliteUserStore::new(config.auth_db_path.clone()));
    info!("User store backed by {}", config.auth_db_path.display());

    let text_adapter = config.gemini_api_key.as_ref().map(|key| {
        Arc::new(GeminiTextClient::new(GeminiConfig {
            api_key: key.clone(),
            model: config.analysis_model.clone(),
        })) as Arc<dyn TextGenerationService>
    });
    if text_adapter.is_none() {
        info!("GEMINI_API_KEY not set; /analyze will report the missing credential");
    }

    // --- 3. Build the Shared AppState & Router ---
    let app_state = Arc::new(AppState {
        store,
        config: config.clone(),
        text_adapter,
    });
    let app = build_router(app_state)?;

    // --- 4. Start the Server ---
    info!("Starting server on {}", config.bind_address);
    info!(
        "Swagger UI available at http://{}/swagger-ui",
        config.bind_address
    );
    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
