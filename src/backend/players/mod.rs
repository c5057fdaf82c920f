//! Players Module
//!
//! Phone-number identity: the login-or-register handler and the admin
//! listing of every registered player.
//!
//! # Handlers
//!
//! - **`login`** - POST /api/login - register or log in by phone number
//! - **`list_credentials`** - GET /api/admin/credentials - all identities
//!
//! # Login Flow
//!
//! 1. First login for a phone → identity created, unplayed attempt created
//! 2. Later logins → `lastSeenAt` bumped, stored name kept
//! 3. Every login reports `hasPlayed` and the recorded outcome, if any

/// Request and response types
pub mod types;

/// Login handler
pub mod login;

/// Admin listing handler
pub mod admin;

pub use types::{LoginRequest, LoginResponse};
pub use login::login;
pub use admin::list_credentials;
