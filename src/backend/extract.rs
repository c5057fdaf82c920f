/**
 * Request Extractors
 *
 * `AppJson` is `axum::Json` with the rejection swapped for `BackendError`,
 * so a missing content type or an undecodable body produces the same
 * `400 {"error": ...}` response as any other validation failure.
 */

use axum::{
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};

use crate::backend::error::BackendError;
use crate::shared::SharedError;

/// JSON body extractor with `BackendError` rejections
#[derive(Debug, Clone)]
pub struct AppJson<T>(pub T);

impl<S, T> FromRequest<S> for AppJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => {
                tracing::warn!("Rejected request body: {}", rejection.body_text());
                Err(SharedError::malformed(rejection.body_text()).into())
            }
        }
    }
}
