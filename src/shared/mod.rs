//! Shared Module
//!
//! Types and rules that do not depend on the HTTP layer or on a particular
//! store: the game records, input normalisation, ranking, configuration and
//! the validation error type.

/// Identity and attempt records, validation and ranking
pub mod game;

/// Shared error types
pub mod error;

/// Server configuration
pub mod config;

/// Re-export commonly used types for convenience
pub use game::{Attempt, Identity, Outcome, LEADERBOARD_SIZE};
pub use error::SharedError;
pub use config::{ConfigError, ServerConfig, ServerConfigBuilder};
