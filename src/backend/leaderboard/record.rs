/**
 * Record Result Handler
 *
 * This module implements POST /api/leaderboard/record, the one-shot write of
 * a player's game result.
 *
 * # Process
 *
 * 1. Validate phone, result and time used
 * 2. Ask the store to set the outcome only if it is still unset
 * 3. Map the store's answer to 200, 403 or 404
 *
 * The check and the write happen in the store as one step, so concurrent
 * submissions for the same phone cannot both succeed.
 */
use axum::{extract::State, response::Json};
use chrono::Utc;

use crate::backend::error::BackendError;
use crate::backend::extract::AppJson;
use crate::backend::leaderboard::types::{RecordRequest, RecordResponse};
use crate::backend::store::{RecordOutcome, SharedStore};
use crate::shared::game::{normalize_name, normalize_phone, validate_time_used};
use crate::shared::Outcome;

/// Record result handler
///
/// # Errors
///
/// * `400 Bad Request` - Missing/invalid phone, result other than `"win"` or
///   `"draw"`, or a time outside `0..=86400` seconds
/// * `404 Not Found` - The phone has never logged in
/// * `403 Forbidden` - A result is already recorded for the phone
/// * `500 Internal Server Error` - The store failed
///
/// # Example Request
///
/// ```http
/// POST /api/leaderboard/record HTTP/1.1
/// Content-Type: application/json
///
/// { "phone": "555", "result": "win", "timeUsed": 42 }
/// ```
pub async fn record_result(
    State(store): State<SharedStore>,
    AppJson(request): AppJson<RecordRequest>,
) -> Result<Json<RecordResponse>, BackendError> {
    let validated = normalize_phone(request.phone.as_deref()).and_then(|phone| {
        normalize_name(request.name.as_deref())?;
        let outcome = Outcome::from_result(request.result.as_deref())?;
        let elapsed = validate_time_used(request.time_used)?;
        Ok((phone, outcome, elapsed))
    });
    let (phone, outcome, elapsed) = validated.map_err(|e| {
        tracing::warn!("Record rejected: {}", e);
        e
    })?;

    match store.record_outcome(&phone, outcome, elapsed, Utc::now()).await? {
        RecordOutcome::Recorded(entry) => {
            tracing::info!(
                "Recorded {} for {} in {:?}s",
                outcome,
                phone,
                entry.elapsed_seconds
            );
            Ok(Json(RecordResponse {
                message: "Result recorded".to_string(),
                entry,
            }))
        }
        RecordOutcome::AlreadyPlayed(existing) => {
            tracing::warn!(
                "Duplicate result for {} ignored (already {:?})",
                phone,
                existing.outcome
            );
            Err(BackendError::conflict("You have already played"))
        }
        RecordOutcome::NotFound => {
            tracing::warn!("Result submitted for unknown phone {}", phone);
            Err(BackendError::not_found(
                "No player found for this phone number, log in first",
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::store::testing::FailingStore;
    use crate::backend::store::{GameStore, MemoryStore};
    use assert_matches::assert_matches;
    use axum::http::StatusCode;
    use std::sync::Arc;

    fn request(phone: &str, result: &str, time_used: Option<f64>) -> AppJson<RecordRequest> {
        AppJson(RecordRequest {
            name: None,
            phone: Some(phone.to_string()),
            result: Some(result.to_string()),
            time_used,
        })
    }

    async fn logged_in(phone: &str) -> SharedStore {
        let store = MemoryStore::new();
        store.upsert_identity("Ada", phone, Utc::now()).await.unwrap();
        store.ensure_attempt("Ada", phone, Utc::now()).await.unwrap();
        Arc::new(store)
    }

    #[tokio::test]
    async fn test_record_win() {
        let store = logged_in("555").await;

        let Json(response) = record_result(State(store), request("555", "win", Some(42.0)))
            .await
            .unwrap();

        assert_eq!(response.message, "Result recorded");
        assert_eq!(response.entry.outcome, Some(Outcome::Win));
        assert_eq!(response.entry.elapsed_seconds, Some(42.0));
    }

    #[tokio::test]
    async fn test_record_draw() {
        let store = logged_in("555").await;
        let Json(response) = record_result(State(store), request("555", "draw", Some(5.0)))
            .await
            .unwrap();
        assert_eq!(response.entry.outcome, Some(Outcome::Draw));
    }

    #[tokio::test]
    async fn test_second_record_is_forbidden() {
        let store = logged_in("555").await;
        record_result(State(store.clone()), request("555", "win", Some(42.0)))
            .await
            .unwrap();

        let err = record_result(State(store.clone()), request("555", "draw", Some(10.0)))
            .await
            .unwrap_err();
        assert_matches!(err, BackendError::Conflict { .. });
        assert_eq!(err.status_code(), StatusCode::FORBIDDEN);

        let attempt = store.find_attempt("555").await.unwrap().unwrap();
        assert_eq!(attempt.outcome, Some(Outcome::Win));
        assert_eq!(attempt.elapsed_seconds, Some(42.0));
    }

    #[tokio::test]
    async fn test_record_before_login() {
        let store: SharedStore = Arc::new(MemoryStore::new());
        let err = record_result(State(store.clone()), request("555", "win", Some(1.0)))
            .await
            .unwrap_err();
        assert_matches!(err, BackendError::NotFound { .. });
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert!(store.find_attempt("555").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_invalid_result_leaves_attempt_untouched() {
        let store = logged_in("555").await;

        for result in ["lose", "WIN", ""] {
            let err = record_result(State(store.clone()), request("555", result, Some(1.0)))
                .await
                .unwrap_err();
            assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        }

        let attempt = store.find_attempt("555").await.unwrap().unwrap();
        assert!(!attempt.has_played());
    }

    #[tokio::test]
    async fn test_invalid_time_used() {
        let store = logged_in("555").await;
        for time_used in [-1.0, 1.0e9] {
            let err = record_result(State(store.clone()), request("555", "win", Some(time_used)))
                .await
                .unwrap_err();
            assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        }
    }

    #[tokio::test]
    async fn test_missing_phone() {
        let store = logged_in("555").await;
        let err = record_result(
            State(store),
            AppJson(RecordRequest {
                result: Some("win".to_string()),
                ..Default::default()
            }),
        )
        .await
        .unwrap_err();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_store_failure() {
        let store: SharedStore = Arc::new(FailingStore);
        let err = record_result(State(store), request("555", "win", Some(1.0)))
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
