/**
 * Postgres Store
 *
 * `GameStore` backed by PostgreSQL through sqlx. The schema lives in
 * `./migrations` and is applied by `PgStore::connect`.
 *
 * # Atomicity
 *
 * - Identity upserts are a single `INSERT ... ON CONFLICT DO UPDATE`.
 * - Outcome writes are a conditional `UPDATE ... WHERE outcome IS NULL`, so
 *   the database decides which of two racing requests wins.
 */

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::backend::store::{GameStore, IdentityUpsert, RecordOutcome, StoreError};
use crate::shared::{Attempt, Identity, Outcome};

/// Row shape of the `identities` table
#[derive(Debug, sqlx::FromRow)]
struct IdentityRow {
    phone: String,
    name: String,
    first_seen_at: DateTime<Utc>,
    last_seen_at: DateTime<Utc>,
}

impl From<IdentityRow> for Identity {
    fn from(row: IdentityRow) -> Self {
        Identity {
            name: row.name,
            phone: row.phone,
            first_seen_at: row.first_seen_at,
            last_seen_at: row.last_seen_at,
        }
    }
}

/// Identity row plus whether the upsert inserted it
#[derive(Debug, sqlx::FromRow)]
struct UpsertRow {
    #[sqlx(flatten)]
    identity: IdentityRow,
    created: bool,
}

/// Row shape of the `attempts` table
#[derive(Debug, sqlx::FromRow)]
struct AttemptRow {
    phone: String,
    name: String,
    outcome: Option<String>,
    elapsed_seconds: Option<f64>,
    last_played_at: DateTime<Utc>,
}

impl TryFrom<AttemptRow> for Attempt {
    type Error = StoreError;

    fn try_from(row: AttemptRow) -> Result<Self, Self::Error> {
        let outcome = row
            .outcome
            .as_deref()
            .map(str::parse::<Outcome>)
            .transpose()
            .map_err(|e| StoreError::Corrupt {
                phone: row.phone.clone(),
                message: e.to_string(),
            })?;

        Ok(Attempt {
            name: row.name,
            phone: row.phone,
            outcome,
            elapsed_seconds: row.elapsed_seconds,
            last_played_at: row.last_played_at,
        })
    }
}

fn into_attempts(rows: Vec<AttemptRow>) -> Result<Vec<Attempt>, StoreError> {
    rows.into_iter().map(Attempt::try_from).collect()
}

/// Postgres-backed store
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    /// Wrap an existing pool. The schema must already be migrated.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Connect to `database_url` and run pending migrations
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Database` if the pool cannot be created and
    /// `StoreError::Migration` if the schema cannot be brought up to date.
    pub async fn connect(database_url: &str) -> Result<Self, StoreError> {
        tracing::info!("Connecting to database...");
        let pool = PgPool::connect(database_url).await?;
        tracing::info!("Database connection pool created successfully");

        tracing::info!("Running database migrations...");
        sqlx::migrate!().run(&pool).await?;
        tracing::info!("Database migrations completed successfully");

        Ok(Self::new(pool))
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl GameStore for PgStore {
    async fn upsert_identity(
        &self,
        name: &str,
        phone: &str,
        now: DateTime<Utc>,
    ) -> Result<IdentityUpsert, StoreError> {
        // xmax is 0 only for a freshly inserted tuple
        let row = sqlx::query_as::<_, UpsertRow>(
            r#"
            INSERT INTO identities (phone, name, first_seen_at, last_seen_at)
            VALUES ($1, $2, $3, $3)
            ON CONFLICT (phone) DO UPDATE SET
                last_seen_at = GREATEST(identities.last_seen_at, EXCLUDED.last_seen_at)
            RETURNING phone, name, first_seen_at, last_seen_at, (xmax = 0) AS created
            "#
        )
        .bind(phone)
        .bind(name)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        Ok(IdentityUpsert {
            identity: row.identity.into(),
            created: row.created,
        })
    }

    async fn ensure_attempt(
        &self,
        name: &str,
        phone: &str,
        now: DateTime<Utc>,
    ) -> Result<Attempt, StoreError> {
        sqlx::query(
            r#"
            INSERT INTO attempts (phone, name, outcome, elapsed_seconds, last_played_at)
            VALUES ($1, $2, NULL, NULL, $3)
            ON CONFLICT (phone) DO NOTHING
            "#
        )
        .bind(phone)
        .bind(name)
        .bind(now)
        .execute(&self.pool)
        .await?;

        // Attempts are never deleted, so the row exists at this point
        let row = sqlx::query_as::<_, AttemptRow>(
            r#"
            SELECT phone, name, outcome, elapsed_seconds, last_played_at
            FROM attempts
            WHERE phone = $1
            "#
        )
        .bind(phone)
        .fetch_one(&self.pool)
        .await?;

        row.try_into()
    }

    async fn find_attempt(&self, phone: &str) -> Result<Option<Attempt>, StoreError> {
        let row = sqlx::query_as::<_, AttemptRow>(
            r#"
            SELECT phone, name, outcome, elapsed_seconds, last_played_at
            FROM attempts
            WHERE phone = $1
            "#
        )
        .bind(phone)
        .fetch_optional(&self.pool)
        .await?;

        row.map(Attempt::try_from).transpose()
    }

    async fn record_outcome(
        &self,
        phone: &str,
        outcome: Outcome,
        elapsed_seconds: Option<f64>,
        now: DateTime<Utc>,
    ) -> Result<RecordOutcome, StoreError> {
        let updated = sqlx::query_as::<_, AttemptRow>(
            r#"
            UPDATE attempts
            SET outcome = $2, elapsed_seconds = $3, last_played_at = $4
            WHERE phone = $1 AND outcome IS NULL
            RETURNING phone, name, outcome, elapsed_seconds, last_played_at
            "#
        )
        .bind(phone)
        .bind(outcome.as_str())
        .bind(elapsed_seconds)
        .bind(now)
        .fetch_optional(&self.pool)
        .await?;

        if let Some(row) = updated {
            return Ok(RecordOutcome::Recorded(row.try_into()?));
        }

        // Nothing updated: either the phone never logged in or it already played
        Ok(match self.find_attempt(phone).await? {
            Some(existing) => RecordOutcome::AlreadyPlayed(existing),
            None => RecordOutcome::NotFound,
        })
    }

    async fn top_winners(&self, limit: usize) -> Result<Vec<Attempt>, StoreError> {
        let rows = sqlx::query_as::<_, AttemptRow>(
            r#"
            SELECT phone, name, outcome, elapsed_seconds, last_played_at
            FROM attempts
            WHERE outcome = 'WIN'
            ORDER BY elapsed_seconds ASC NULLS LAST, last_played_at ASC, phone ASC
            LIMIT $1
            "#
        )
        .bind(i64::try_from(limit).unwrap_or(i64::MAX))
        .fetch_all(&self.pool)
        .await?;

        into_attempts(rows)
    }

    async fn list_identities(&self) -> Result<Vec<Identity>, StoreError> {
        let rows = sqlx::query_as::<_, IdentityRow>(
            r#"
            SELECT phone, name, first_seen_at, last_seen_at
            FROM identities
            ORDER BY name ASC, phone ASC
            "#
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Identity::from).collect())
    }

    async fn list_attempts(&self) -> Result<Vec<Attempt>, StoreError> {
        let rows = sqlx::query_as::<_, AttemptRow>(
            r#"
            SELECT phone, name, outcome, elapsed_seconds, last_played_at
            FROM attempts
            ORDER BY last_played_at DESC, phone ASC
            "#
        )
        .fetch_all(&self.pool)
        .await?;

        into_attempts(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(outcome: Option<&str>) -> AttemptRow {
        AttemptRow {
            phone: "555".to_string(),
            name: "Ada".to_string(),
            outcome: outcome.map(str::to_string),
            elapsed_seconds: Some(42.0),
            last_played_at: Utc::now(),
        }
    }

    #[test]
    fn test_attempt_row_conversion() {
        let attempt = Attempt::try_from(row(Some("WIN"))).unwrap();
        assert_eq!(attempt.outcome, Some(Outcome::Win));
        assert_eq!(attempt.elapsed_seconds, Some(42.0));

        let unplayed = Attempt::try_from(row(None)).unwrap();
        assert!(!unplayed.has_played());
    }

    #[test]
    fn test_attempt_row_with_unknown_outcome_is_corrupt() {
        let err = Attempt::try_from(row(Some("LOSS"))).unwrap_err();
        assert!(matches!(err, StoreError::Corrupt { ref phone, .. } if phone == "555"));
    }
}
