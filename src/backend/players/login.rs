/**
 * Login Handler
 *
 * This module implements the login-or-register handler for POST /api/login.
 *
 * # Login Process
 *
 * 1. Trim and validate phone and name
 * 2. Register the phone, or bump `lastSeenAt` if already known
 * 3. Create the player's unplayed attempt if it does not exist yet
 * 4. Return the identity together with whether the player has played
 *
 * There are no passwords or tokens: the phone number is the identity.
 */
use axum::{extract::State, response::Json};
use chrono::Utc;

use crate::backend::error::BackendError;
use crate::backend::extract::AppJson;
use crate::backend::players::types::{LoginRequest, LoginResponse};
use crate::backend::store::{IdentityUpsert, SharedStore};
use crate::shared::game::{normalize_name, normalize_phone};

/// Login handler
///
/// # Arguments
///
/// * `State(store)` - Injected game store
/// * `AppJson(request)` - Login request containing phone and optional name
///
/// # Errors
///
/// * `400 Bad Request` - If the phone is missing or invalid, or the name too long
/// * `500 Internal Server Error` - If the store fails
///
/// # Example Request
///
/// ```http
/// POST /api/login HTTP/1.1
/// Content-Type: application/json
///
/// { "name": "Ada", "phone": "555" }
/// ```
///
/// # Example Response
///
/// ```json
/// {
///   "message": "Registration successful",
///   "user": {
///     "name": "Ada",
///     "phone": "555",
///     "firstSeenAt": "2026-10-18T09:00:00Z",
///     "lastSeenAt": "2026-10-18T09:00:00Z"
///   },
///   "hasPlayed": false,
///   "status": null
/// }
/// ```
pub async fn login(
    State(store): State<SharedStore>,
    AppJson(request): AppJson<LoginRequest>,
) -> Result<Json<LoginResponse>, BackendError> {
    let phone = normalize_phone(request.phone.as_deref()).map_err(|e| {
        tracing::warn!("Login rejected: {}", e);
        e
    })?;
    let name = normalize_name(request.name.as_deref())?;
    let now = Utc::now();

    let IdentityUpsert { identity, created } = store.upsert_identity(&name, &phone, now).await?;
    let attempt = store.ensure_attempt(&identity.name, &phone, now).await?;

    let message = if created {
        tracing::info!("Registered new player: {} ({})", identity.name, phone);
        "Registration successful"
    } else {
        tracing::info!("Player logged in: {} ({})", identity.name, phone);
        "Login successful"
    };

    Ok(Json(LoginResponse {
        message: message.to_string(),
        user: identity,
        has_played: attempt.has_played(),
        status: attempt.outcome,
    }))
}
