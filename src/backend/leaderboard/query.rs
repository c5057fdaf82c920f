/**
 * Leaderboard Queries
 *
 * - GET /api/leaderboard - top winners, fastest first
 * - GET /api/admin/leaderboard - every attempt, most recent first
 */
use axum::{extract::State, response::Json};

use crate::backend::error::BackendError;
use crate::backend::store::SharedStore;
use crate::shared::{Attempt, LEADERBOARD_SIZE};

/// Public leaderboard
///
/// Winning attempts ordered by `elapsedSeconds` ascending, at most
/// `LEADERBOARD_SIZE` entries. Equal times are ordered by earliest
/// `lastPlayedAt`, then by phone.
pub async fn leaderboard(
    State(store): State<SharedStore>,
) -> Result<Json<Vec<Attempt>>, BackendError> {
    let winners = store.top_winners(LEADERBOARD_SIZE).await?;
    Ok(Json(winners))
}

/// Every attempt, played or not, most recently played first
pub async fn list_all_attempts(
    State(store): State<SharedStore>,
) -> Result<Json<Vec<Attempt>>, BackendError> {
    let attempts = store.list_attempts().await?;
    tracing::debug!("Listing {} attempts", attempts.len());
    Ok(Json(attempts))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::store::testing::FailingStore;
    use crate::backend::store::{GameStore, MemoryStore};
    use crate::shared::Outcome;
    use axum::http::StatusCode;
    use chrono::{Duration, Utc};
    use std::sync::Arc;

    #[tokio::test]
    async fn test_leaderboard_limit_and_order() {
        let store = Arc::new(MemoryStore::new());
        let now = Utc::now();
        for i in 0..12 {
            let phone = format!("555-{:02}", i);
            store.ensure_attempt("p", &phone, now).await.unwrap();
            let result = if i % 4 == 0 { Outcome::Draw } else { Outcome::Win };
            store
                .record_outcome(&phone, result, Some((20 - i) as f64), now)
                .await
                .unwrap();
        }

        let Json(winners) = leaderboard(State(store as SharedStore)).await.unwrap();
        assert!(winners.len() <= LEADERBOARD_SIZE);
        assert_eq!(winners.len(), 9);
        assert!(winners.iter().all(|a| a.outcome == Some(Outcome::Win)));
        assert!(winners
            .windows(2)
            .all(|w| w[0].elapsed_seconds <= w[1].elapsed_seconds));
    }

    #[tokio::test]
    async fn test_admin_listing_most_recent_first() {
        let store = Arc::new(MemoryStore::new());
        let now = Utc::now();
        store.ensure_attempt("a", "1", now).await.unwrap();
        store.ensure_attempt("b", "2", now + Duration::seconds(1)).await.unwrap();
        store
            .record_outcome("1", Outcome::Win, Some(3.0), now + Duration::seconds(2))
            .await
            .unwrap();

        let Json(attempts) = list_all_attempts(State(store as SharedStore)).await.unwrap();
        let phones: Vec<&str> = attempts.iter().map(|a| a.phone.as_str()).collect();
        assert_eq!(phones, vec!["1", "2"]);
    }

    #[tokio::test]
    async fn test_store_failure() {
        let store: SharedStore = Arc::new(FailingStore);
        let err = leaderboard(State(store.clone())).await.unwrap_err();
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        let err = list_all_attempts(State(store)).await.unwrap_err();
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
