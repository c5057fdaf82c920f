/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the `FromRef` traits used for Axum state extraction.
 *
 * # Architecture
 *
 * `AppState` holds the injected store handle and the configuration the
 * router was built from. There is no other shared mutable state between
 * requests; all persistence goes through the store.
 *
 * # Example
 *
 * ```rust
 * use triviaboard::backend::server::state::AppState;
 * use triviaboard::backend::store::SharedStore;
 * use axum::extract::State;
 *
 * async fn handler(State(store): State<SharedStore>) {
 *     let winners = store.top_winners(10).await;
 *     // ...
 * }
 * ```
 */

use std::sync::Arc;

use axum::extract::FromRef;

use crate::backend::store::{MemoryStore, SharedStore};
use crate::shared::ServerConfig;

/// Application state shared by every route
#[derive(Clone)]
pub struct AppState {
    /// Game store handle
    ///
    /// Postgres when `DATABASE_URL` is configured, otherwise in-memory.
    pub store: SharedStore,

    /// Configuration the server was started with
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(store: SharedStore, config: ServerConfig) -> Self {
        Self {
            store,
            config: Arc::new(config),
        }
    }

    /// State backed by a fresh `MemoryStore` and default configuration
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::new()), ServerConfig::default())
    }
}

/// Implement FromRef for SharedStore
///
/// This allows Axum handlers to extract the store directly from `AppState`
/// using `State(SharedStore)`.
impl FromRef<AppState> for SharedStore {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.store.clone()
    }
}
