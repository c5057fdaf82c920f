/**
 * Player Admin Listing
 *
 * GET /api/admin/credentials returns every registered identity sorted by
 * name. The route is unauthenticated.
 */
use axum::{extract::State, response::Json};

use crate::backend::error::BackendError;
use crate::backend::store::SharedStore;
use crate::shared::Identity;

/// List every identity, by name ascending
pub async fn list_credentials(
    State(store): State<SharedStore>,
) -> Result<Json<Vec<Identity>>, BackendError> {
    let identities = store.list_identities().await?;
    tracing::debug!("Listing {} identities", identities.len());
    Ok(Json(identities))
}
