//! services/api/src/web/rest.rs
//!
//! Contains the health handler, the shared error-body plumbing, and the
//! master definition for the OpenAPI specification.

use axum::{http::StatusCode, response::Json};
use serde::Serialize;
use utoipa::{OpenApi, ToSchema};

//=========================================================================================
// OpenAPI Master Definition
//=========================================================================================

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::web::auth::login_handler,
        crate::web::analysis::analyze_handler,
        health_handler,
    ),
    components(
        schemas(
            crate::web::auth::LoginRequest,
            crate::web::auth::LoginResponse,
            crate::web::analysis::AnalyzeRequest,
            crate::web::analysis::AnalyzeResponse,
            HealthResponse,
            ErrorBody,
        )
    ),
    tags(
        (name = "Listing Insights API", description = "API endpoints for credential login and product listing analysis.")
    )
)]
pub struct ApiDoc;

//=========================================================================================
// Shared Response Plumbing
//=========================================================================================

/// The structured body carried by every failure response.
#[derive(Serialize, ToSchema)]
pub struct ErrorBody {
    pub error: String,
}

/// Convenience constructor for a failure response.
pub fn error_response(status: StatusCode, error: String) -> (StatusCode, Json<ErrorBody>) {
    (status, Json(ErrorBody { error }))
}

/// Fallback for unsupported HTTP methods on the POST endpoints.
pub async fn method_not_allowed() -> (StatusCode, Json<ErrorBody>) {
    error_response(
        StatusCode::METHOD_NOT_ALLOWED,
        "Method not allowed. Use POST.".to_string(),
    )
}

//=========================================================================================
// Health Handler
//=========================================================================================

#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

/// GET /health - Fixed liveness payload. No failure modes.
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is up", body = HealthResponse)
    )
)]
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}
