//! Game Records
//!
//! Types for the two collections the service keeps, plus the input
//! normalisation and ranking rules that apply to them regardless of which
//! store backs the data.
//!
//! # Records
//!
//! - [`Identity`] - one per phone number, created on first login
//! - [`Attempt`] - one per phone number, holds at most one [`Outcome`]
//!
//! Both serialise in camelCase with RFC 3339 timestamps, e.g.
//!
//! ```json
//! {
//!   "name": "Ada",
//!   "phone": "555",
//!   "outcome": "WIN",
//!   "elapsedSeconds": 42.0,
//!   "lastPlayedAt": "2026-10-18T09:00:00Z"
//! }
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::error::SharedError;

/// Number of entries returned by the public leaderboard
pub const LEADERBOARD_SIZE: usize = 10;

/// Longest accepted phone number, after trimming
pub const MAX_PHONE_LEN: usize = 32;

/// Longest accepted display name, after trimming
pub const MAX_NAME_LEN: usize = 64;

/// Upper bound for a reported game duration (one day)
pub const MAX_TIME_USED_SECS: f64 = 86_400.0;

/// Result of a finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Outcome {
    Win,
    Draw,
}

impl Outcome {
    /// Stored representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Win => "WIN",
            Self::Draw => "DRAW",
        }
    }

    /// Map the `result` field of a record request.
    ///
    /// Only the exact strings `"win"` and `"draw"` are accepted.
    pub fn from_result(result: Option<&str>) -> Result<Self, SharedError> {
        match result {
            Some("win") => Ok(Self::Win),
            Some("draw") => Ok(Self::Draw),
            Some(other) => Err(SharedError::validation(
                "result",
                format!("expected \"win\" or \"draw\", got \"{}\"", other),
            )),
            None => Err(SharedError::validation("result", "is required")),
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Outcome {
    type Err = SharedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "WIN" => Ok(Self::Win),
            "DRAW" => Ok(Self::Draw),
            other => Err(SharedError::validation(
                "outcome",
                format!("unknown stored outcome \"{}\"", other),
            )),
        }
    }
}

/// A registered player
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    pub name: String,
    /// Unique key
    pub phone: String,
    pub first_seen_at: DateTime<Utc>,
    pub last_seen_at: DateTime<Utc>,
}

impl Identity {
    /// A brand new identity seen for the first time at `now`
    pub fn new(name: String, phone: String, now: DateTime<Utc>) -> Self {
        Self {
            name,
            phone,
            first_seen_at: now,
            last_seen_at: now,
        }
    }

    /// Record another login. `last_seen_at` never moves backwards.
    pub fn touch(&mut self, now: DateTime<Utc>) {
        if now > self.last_seen_at {
            self.last_seen_at = now;
        }
    }
}

/// The single game result a player may submit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attempt {
    pub name: String,
    /// Unique key, same domain as [`Identity::phone`]
    pub phone: String,
    /// `None` until the game is recorded
    pub outcome: Option<Outcome>,
    pub elapsed_seconds: Option<f64>,
    pub last_played_at: DateTime<Utc>,
}

impl Attempt {
    /// The placeholder created at first login
    pub fn unplayed(name: String, phone: String, now: DateTime<Utc>) -> Self {
        Self {
            name,
            phone,
            outcome: None,
            elapsed_seconds: None,
            last_played_at: now,
        }
    }

    pub fn has_played(&self) -> bool {
        self.outcome.is_some()
    }

    /// Apply the one-shot result. Returns `false` and leaves the attempt
    /// untouched when an outcome is already present.
    pub fn record(
        &mut self,
        outcome: Outcome,
        elapsed_seconds: Option<f64>,
        now: DateTime<Utc>,
    ) -> bool {
        if self.has_played() {
            return false;
        }
        self.outcome = Some(outcome);
        self.elapsed_seconds = elapsed_seconds;
        self.last_played_at = now;
        true
    }
}

/// Leaderboard order for two winning attempts.
///
/// Lower `elapsed_seconds` ranks first and attempts without a time rank after
/// every timed one. Ties fall back to the earliest `last_played_at`, then to
/// the phone number so the order never depends on storage layout.
pub fn compare_rank(a: &Attempt, b: &Attempt) -> Ordering {
    let by_time = match (a.elapsed_seconds, b.elapsed_seconds) {
        (Some(x), Some(y)) => x.total_cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    };

    by_time
        .then_with(|| a.last_played_at.cmp(&b.last_played_at))
        .then_with(|| a.phone.cmp(&b.phone))
}

/// Keep only winners, sort them by [`compare_rank`] and truncate to `limit`
pub fn rank_winners<I>(attempts: I, limit: usize) -> Vec<Attempt>
where
    I: IntoIterator<Item = Attempt>,
{
    let mut winners: Vec<Attempt> = attempts
        .into_iter()
        .filter(|a| a.outcome == Some(Outcome::Win))
        .collect();
    winners.sort_by(compare_rank);
    winners.truncate(limit);
    winners
}

/// Trim and validate a phone number
///
/// Phone numbers must:
/// - be present and non-empty after trimming
/// - be at most [`MAX_PHONE_LEN`] characters
/// - contain only digits, spaces and `+-()`, with at least one digit
pub fn normalize_phone(raw: Option<&str>) -> Result<String, SharedError> {
    let phone = raw.map(str::trim).unwrap_or_default();

    if phone.is_empty() {
        return Err(SharedError::validation("phone", "is required"));
    }
    if phone.chars().count() > MAX_PHONE_LEN {
        return Err(SharedError::validation(
            "phone",
            format!("must be at most {} characters", MAX_PHONE_LEN),
        ));
    }
    if !phone
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, ' ' | '+' | '-' | '(' | ')'))
    {
        return Err(SharedError::validation(
            "phone",
            "may only contain digits, spaces and +-()",
        ));
    }
    if !phone.chars().any(|c| c.is_ascii_digit()) {
        return Err(SharedError::validation("phone", "must contain a digit"));
    }

    Ok(phone.to_string())
}

/// Trim a display name. Missing names become empty strings.
pub fn normalize_name(raw: Option<&str>) -> Result<String, SharedError> {
    let name = raw.map(str::trim).unwrap_or_default();

    if name.chars().count() > MAX_NAME_LEN {
        return Err(SharedError::validation(
            "name",
            format!("must be at most {} characters", MAX_NAME_LEN),
        ));
    }

    Ok(name.to_string())
}

/// Check a reported game duration in seconds
pub fn validate_time_used(raw: Option<f64>) -> Result<Option<f64>, SharedError> {
    match raw {
        None => Ok(None),
        Some(secs) if !secs.is_finite() => {
            Err(SharedError::validation("timeUsed", "must be a finite number"))
        }
        Some(secs) if !(0.0..=MAX_TIME_USED_SECS).contains(&secs) => Err(SharedError::validation(
            "timeUsed",
            format!("must be between 0 and {} seconds", MAX_TIME_USED_SECS),
        )),
        Some(secs) => Ok(Some(secs)),
    }
}
