/**
 * Store Selection
 *
 * Chooses the game store from the server configuration.
 *
 * # Configuration Sources
 *
 * - `DATABASE_URL` set: connect to Postgres and run migrations. A failure
 *   here is returned to the caller and aborts startup.
 * - `DATABASE_URL` unset: run on the in-memory store and warn that nothing
 *   is persisted.
 */

use std::sync::Arc;

use crate::backend::store::{MemoryStore, PgStore, SharedStore, StoreError};
use crate::shared::ServerConfig;

/// Build the store described by `config`
///
/// # Errors
///
/// Returns `StoreError` if a database is configured but cannot be reached or
/// migrated.
pub async fn load_store(config: &ServerConfig) -> Result<SharedStore, StoreError> {
    match &config.database_url {
        Some(database_url) => {
            let store = PgStore::connect(database_url).await.map_err(|e| {
                tracing::error!("Failed to initialise database: {}", e);
                e
            })?;
            Ok(Arc::new(store))
        }
        None => {
            tracing::warn!("DATABASE_URL not set. Results are kept in memory and lost on restart.");
            Ok(Arc::new(MemoryStore::new()))
        }
    }
}
