//! services/api/src/web/auth.rs
//!
//! Authentication endpoint for credential login.

use axum::{body::Bytes, extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::sync::Arc;
use tracing::error;
use utoipa::ToSchema;

use crate::web::rest::{error_response, ErrorBody};
use crate::web::state::AppState;

//=========================================================================================
// Request/Response Types
//=========================================================================================

#[derive(Deserialize, Default, ToSchema)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Serialize, ToSchema)]
pub struct LoginResponse {
    pub ok: bool,
    pub user: String,
}

//=========================================================================================
// Credential Hashing
//=========================================================================================

/// Computes the lowercase hex SHA-256 digest of a password.
///
/// Fixed, non-salted scheme: equal digests imply equal plaintexts, and the
/// scheme offers no protection against precomputed tables. That weakness is
/// inherited from the stored data format, not a goal.
pub fn hash_password(password: &str) -> String {
    hex::encode(Sha256::digest(password.as_bytes()))
}

//=========================================================================================
// Handler
//=========================================================================================

/// POST /login - Check credentials against the user store.
#[utoipa::path(
    post,
    path = "/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Credentials accepted", body = LoginResponse),
        (status = 400, description = "Malformed payload or missing fields", body = ErrorBody),
        (status = 401, description = "Invalid credentials", body = ErrorBody),
        (status = 405, description = "Method not allowed", body = ErrorBody),
        (status = 500, description = "Store failure", body = ErrorBody)
    )
)]
pub async fn login_handler(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<impl IntoResponse, (StatusCode, Json<ErrorBody>)> {
    // 1. Seed the administrative record before anything else. This runs on
    // every request, whatever the outcome, so an empty or corrupted store
    // heals itself. It also resets that one account's hash to the
    // configured value.
    let admin_hash = hash_password(&state.config.admin_password);
    if let Err(e) = state
        .store
        .upsert_user(&state.config.admin_username, &admin_hash)
        .await
    {
        error!("Failed to seed admin user: {e}");
        return Err(error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Database error: {e}"),
        ));
    }

    // 2. Parse the payload. An empty body is treated as an empty object.
    let request: LoginRequest = if body.is_empty() {
        LoginRequest::default()
    } else {
        serde_json::from_slice(&body).map_err(|_| {
            error_response(StatusCode::BAD_REQUEST, "Invalid JSON payload.".to_string())
        })?
    };

    // 3. Both fields are required after trimming.
    let username = request.username.trim();
    let password = request.password.trim();
    if username.is_empty() || password.is_empty() {
        return Err(error_response(
            StatusCode::BAD_REQUEST,
            "Username and password are required.".to_string(),
        ));
    }

    // 4. Look up the stored hash.
    let stored = state.store.find_user(username).await.map_err(|e| {
        error!("Failed to read user record: {e}");
        error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Database read error: {e}"),
        )
    })?;

    // 5. Unknown user and wrong password must produce the same body, so the
    // response never reveals which usernames exist.
    let valid = stored
        .map(|credentials| credentials.password_hash == hash_password(password))
        .unwrap_or(false);
    if !valid {
        return Err(error_response(
            StatusCode::UNAUTHORIZED,
            "Invalid credentials.".to_string(),
        ));
    }

    // 6. Echo the username on success.
    Ok((
        StatusCode::OK,
        Json(LoginResponse {
            ok: true,
            user: username.to_string(),
        }),
    ))
}
