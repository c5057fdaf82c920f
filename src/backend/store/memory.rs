/**
 * In-Memory Store
 *
 * A `GameStore` kept entirely in process memory. Used when `DATABASE_URL`
 * is not configured and by the test suites.
 *
 * Both collections sit behind a single `tokio::sync::RwLock`, so every
 * operation, including the conditional outcome write, runs as one critical
 * section. Data is lost when the process exits.
 */

use std::cmp::Reverse;
use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use crate::backend::store::{GameStore, IdentityUpsert, RecordOutcome, StoreError};
use crate::shared::game::rank_winners;
use crate::shared::{Attempt, Identity, Outcome};

#[derive(Debug, Default)]
struct Collections {
    identities: BTreeMap<String, Identity>,
    attempts: BTreeMap<String, Attempt>,
}

/// Process-local store
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<Collections>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of attempts held, played or not
    pub async fn attempt_count(&self) -> usize {
        self.inner.read().await.attempts.len()
    }
}

#[async_trait]
impl GameStore for MemoryStore {
    async fn upsert_identity(
        &self,
        name: &str,
        phone: &str,
        now: DateTime<Utc>,
    ) -> Result<IdentityUpsert, StoreError> {
        let mut inner = self.inner.write().await;

        if let Some(identity) = inner.identities.get_mut(phone) {
            identity.touch(now);
            return Ok(IdentityUpsert {
                identity: identity.clone(),
                created: false,
            });
        }

        let identity = Identity::new(name.to_string(), phone.to_string(), now);
        inner.identities.insert(phone.to_string(), identity.clone());

        Ok(IdentityUpsert {
            identity,
            created: true,
        })
    }

    async fn ensure_attempt(
        &self,
        name: &str,
        phone: &str,
        now: DateTime<Utc>,
    ) -> Result<Attempt, StoreError> {
        let mut inner = self.inner.write().await;
        let attempt = inner
            .attempts
            .entry(phone.to_string())
            .or_insert_with(|| Attempt::unplayed(name.to_string(), phone.to_string(), now));
        Ok(attempt.clone())
    }

    async fn find_attempt(&self, phone: &str) -> Result<Option<Attempt>, StoreError> {
        Ok(self.inner.read().await.attempts.get(phone).cloned())
    }

    async fn record_outcome(
        &self,
        phone: &str,
        outcome: Outcome,
        elapsed_seconds: Option<f64>,
        now: DateTime<Utc>,
    ) -> Result<RecordOutcome, StoreError> {
        let mut inner = self.inner.write().await;

        let Some(attempt) = inner.attempts.get_mut(phone) else {
            return Ok(RecordOutcome::NotFound);
        };

        if attempt.record(outcome, elapsed_seconds, now) {
            Ok(RecordOutcome::Recorded(attempt.clone()))
        } else {
            Ok(RecordOutcome::AlreadyPlayed(attempt.clone()))
        }
    }

    async fn top_winners(&self, limit: usize) -> Result<Vec<Attempt>, StoreError> {
        let inner = self.inner.read().await;
        Ok(rank_winners(inner.attempts.values().cloned(), limit))
    }

    async fn list_identities(&self) -> Result<Vec<Identity>, StoreError> {
        let inner = self.inner.read().await;
        // BTreeMap iteration is already phone-ordered, stable sort keeps that for equal names
        let mut identities: Vec<Identity> = inner.identities.values().cloned().collect();
        identities.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(identities)
    }

    async fn list_attempts(&self) -> Result<Vec<Attempt>, StoreError> {
        let inner = self.inner.read().await;
        let mut attempts: Vec<Attempt> = inner.attempts.values().cloned().collect();
        attempts.sort_by_key(|a| Reverse(a.last_played_at));
        Ok(attempts)
    }
}
