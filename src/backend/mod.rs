//! Backend Module
//!
//! All server-side code: an Axum HTTP server exposing the login, result and
//! leaderboard API over an injected game store.
//!
//! # Architecture
//!
//! - **`server`** - Application state, store selection, app creation
//! - **`routes`** - Route table, CORS/trace layers, static fallback
//! - **`players`** - Login-or-register and the identity listing
//! - **`leaderboard`** - One-shot result recording and rankings
//! - **`store`** - `GameStore` trait with Postgres and in-memory backends
//! - **`extract`** - JSON extractor with uniform error bodies
//! - **`error`** - `BackendError` and its HTTP mapping
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Server binary
//! ├── server/         - Server initialization and state
//! ├── routes/         - Route configuration
//! ├── players/        - Identity handlers
//! ├── leaderboard/    - Attempt handlers
//! ├── store/          - Persistence
//! ├── extract.rs      - Request extractors
//! └── error/          - Error types
//! ```
//!
//! # State Management
//!
//! `AppState` carries an `Arc<dyn GameStore>`; handlers extract it with
//! `State<SharedStore>`. Nothing else is shared between requests.
//!
//! # Error Handling
//!
//! Every handler returns `Result<_, BackendError>`. Errors become
//! `{"error": "..."}` bodies with 400, 403, 404 or 500.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Identity handlers
pub mod players;

/// Attempt handlers
pub mod leaderboard;

/// Game store trait and backends
pub mod store;

/// Request extractors
pub mod extract;

/// Backend error types
pub mod error;

/// Re-export commonly used types
pub use server::{create_app, AppState};
pub use routes::create_router;
pub use error::BackendError;
pub use store::{GameStore, MemoryStore, PgStore, SharedStore};
