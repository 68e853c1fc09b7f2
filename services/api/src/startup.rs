//! services/api/src/startup.rs
//!
//! Builds the complete application router. Lives in the library crate so
//! integration tests can drive the exact router the binary serves.

use axum::{
    extract::DefaultBodyLimit,
    http::{
        header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE},
        HeaderValue, Method,
    },
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::ConfigError;
use crate::error::ApiError;
use crate::web::{
    analysis::analyze_handler,
    auth::login_handler,
    rest::{health_handler, method_not_allowed, ApiDoc},
    state::AppState,
};

/// Assembles the router: the three API routes (wrong methods fall through to
/// the shared 405 handler), CORS, a body limit, and the Swagger UI mount.
pub fn build_router(app_state: Arc<AppState>) -> Result<Router, ApiError> {
    let origin = app_state
        .config
        .cors_origin
        .parse::<HeaderValue>()
        .map_err(|e| {
            ApiError::Config(ConfigError::InvalidValue(
                "CORS_ORIGIN".to_string(),
                e.to_string(),
            ))
        })?;

    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_credentials(true)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE, ACCEPT]);

    let api_router = Router::new()
        .route("/login", post(login_handler).fallback(method_not_allowed))
        .route("/analyze", post(analyze_handler).fallback(method_not_allowed))
        .route("/health", get(health_handler))
        .layer(DefaultBodyLimit::max(1024 * 1024))
        .layer(cors)
        .with_state(app_state);

    Ok(Router::new()
        .merge(api_router)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi())))
}
