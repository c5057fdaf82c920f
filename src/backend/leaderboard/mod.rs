//! Leaderboard Module
//!
//! The attempt ledger's HTTP surface: recording the single permitted result
//! and reading the rankings.
//!
//! # Handlers
//!
//! - **`record_result`** - POST /api/leaderboard/record - one-shot result write
//! - **`leaderboard`** - GET /api/leaderboard - top winners by time
//! - **`list_all_attempts`** - GET /api/admin/leaderboard - every attempt

/// Request and response types
pub mod types;

/// Record result handler
pub mod record;

/// Ranking and listing handlers
pub mod query;

pub use types::{RecordRequest, RecordResponse};
pub use record::record_result;
pub use query::{leaderboard, list_all_attempts};
