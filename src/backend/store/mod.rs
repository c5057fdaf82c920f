//! Store Module
//!
//! Persistence for the two collections the game keeps, both keyed by phone
//! number:
//!
//! - **identities** - who has logged in and when
//! - **attempts** - the single result each player may submit
//!
//! Handlers never talk to a database directly. They receive a
//! [`SharedStore`] from the router state and call the [`GameStore`] methods,
//! so the same handler code runs against Postgres in production and against
//! the in-memory store in tests or when no database is configured.
//!
//! # Module Structure
//!
//! ```text
//! store/
//! ├── mod.rs       - GameStore trait, StoreError
//! ├── memory.rs    - MemoryStore (tokio RwLock over ordered maps)
//! └── postgres.rs  - PgStore (sqlx, migrations in ./migrations)
//! ```
//!
//! # Exactly-once results
//!
//! [`GameStore::record_outcome`] must set the outcome only if it is still
//! unset, as one atomic step. Two concurrent calls for the same phone yield
//! one [`RecordOutcome::Recorded`] and one [`RecordOutcome::AlreadyPlayed`].

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::shared::{Attempt, Identity, Outcome};

/// In-memory store
pub mod memory;

/// Postgres store
pub mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgStore;

/// Store handle shared by every handler
pub type SharedStore = Arc<dyn GameStore>;

/// Errors raised by a store backend
#[derive(Debug, Error)]
pub enum StoreError {
    /// Query or connection failure
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Schema migration failure at startup
    #[error("migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// A stored row could not be turned back into a record
    #[error("corrupt record for phone {phone}: {message}")]
    Corrupt {
        phone: String,
        message: String,
    },
}

/// Result of [`GameStore::upsert_identity`]
#[derive(Debug, Clone, PartialEq)]
pub struct IdentityUpsert {
    pub identity: Identity,
    /// `true` when this call registered the phone number
    pub created: bool,
}

/// Result of [`GameStore::record_outcome`]
#[derive(Debug, Clone, PartialEq)]
pub enum RecordOutcome {
    /// The outcome was unset and has now been written
    Recorded(Attempt),
    /// An outcome was already present; the stored attempt is returned as-is
    AlreadyPlayed(Attempt),
    /// No attempt exists for the phone number
    NotFound,
}

/// Persistence operations needed by the handlers
#[async_trait]
pub trait GameStore: Send + Sync {
    /// Register `phone` or bump its `last_seen_at` to `now`.
    ///
    /// `name` is only used when the identity is created.
    async fn upsert_identity(
        &self,
        name: &str,
        phone: &str,
        now: DateTime<Utc>,
    ) -> Result<IdentityUpsert, StoreError>;

    /// Return the attempt for `phone`, creating an unplayed one if missing
    async fn ensure_attempt(
        &self,
        name: &str,
        phone: &str,
        now: DateTime<Utc>,
    ) -> Result<Attempt, StoreError>;

    async fn find_attempt(&self, phone: &str) -> Result<Option<Attempt>, StoreError>;

    /// Set the outcome only if it is currently unset
    async fn record_outcome(
        &self,
        phone: &str,
        outcome: Outcome,
        elapsed_seconds: Option<f64>,
        now: DateTime<Utc>,
    ) -> Result<RecordOutcome, StoreError>;

    /// Winning attempts in leaderboard order, at most `limit`
    async fn top_winners(&self, limit: usize) -> Result<Vec<Attempt>, StoreError>;

    /// Every identity, by name ascending
    async fn list_identities(&self) -> Result<Vec<Identity>, StoreError>;

    /// Every attempt, most recently played first
    async fn list_attempts(&self) -> Result<Vec<Attempt>, StoreError>;
}
