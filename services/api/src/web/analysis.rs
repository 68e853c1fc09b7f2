//! services/api/src/web/analysis.rs
//!
//! Listing-analysis endpoint: builds a prompt from the request and forwards
//! it to the text-generation adapter.

use axum::{body::Bytes, extract::State, http::StatusCode, response::IntoResponse, Json};
use listing_insights_core::{build_prompt, domain::ListingItem};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use tracing::error;
use utoipa::ToSchema;

use crate::web::rest::{error_response, ErrorBody};
use crate::web::state::AppState;

//=========================================================================================
// Request/Response Types
//=========================================================================================

#[derive(Deserialize, Default, ToSchema)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub query: String,
    /// Loose JSON on purpose: anything that is not an array is ignored.
    #[serde(default)]
    #[schema(value_type = Object)]
    pub items: Value,
}

#[derive(Serialize, ToSchema)]
pub struct AnalyzeResponse {
    pub analysis: String,
}

//=========================================================================================
// Handler
//=========================================================================================

/// POST /analyze - Summarize product listings with the generative model.
#[utoipa::path(
    post,
    path = "/analyze",
    request_body = AnalyzeRequest,
    responses(
        (status = 200, description = "Model output", body = AnalyzeResponse),
        (status = 400, description = "Malformed payload or missing query", body = ErrorBody),
        (status = 405, description = "Method not allowed", body = ErrorBody),
        (status = 500, description = "Missing credential or model failure", body = ErrorBody)
    )
)]
pub async fn analyze_handler(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<impl IntoResponse, (StatusCode, Json<ErrorBody>)> {
    // 1. The credential is checked before the body is even parsed, matching
    // the endpoint's published failure order.
    let Some(text_adapter) = state.text_adapter.as_ref() else {
        return Err(error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            "GEMINI_API_KEY is not set.".to_string(),
        ));
    };

    // 2. Parse the payload. An empty body is treated as an empty object.
    let request: AnalyzeRequest = if body.is_empty() {
        AnalyzeRequest::default()
    } else {
        serde_json::from_slice(&body).map_err(|_| {
            error_response(StatusCode::BAD_REQUEST, "Invalid JSON payload.".to_string())
        })?
    };

    // 3. The query is required after trimming.
    let query = request.query.trim();
    if query.is_empty() {
        return Err(error_response(
            StatusCode::BAD_REQUEST,
            "Missing 'query' in request body.".to_string(),
        ));
    }

    // 4. Items are used verbatim when a sequence, otherwise treated as empty.
    let items: Vec<ListingItem> = request
        .items
        .as_array()
        .map(|entries| entries.iter().map(ListingItem::from_value).collect())
        .unwrap_or_default();

    // 5-6. Build the prompt and submit it.
    let prompt = build_prompt(query, &items);
    let output = text_adapter.generate_text(&prompt).await.map_err(|e| {
        error!("Model call failed: {e}");
        error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Model call failed: {e}"),
        )
    })?;

    // 7. Trim the model output, with a placeholder for empty responses.
    let output = output.trim();
    let analysis = if output.is_empty() {
        "No content returned.".to_string()
    } else {
        output.to_string()
    };

    Ok((StatusCode::OK, Json(AnalyzeResponse { analysis })))
}
