//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports and documentation
//! ├── router.rs       - Main router creation, layers and fallback
//! └── api_routes.rs   - API endpoint table
//! ```
//!
//! # Route Types
//!
//! ## API Routes
//!
//! - `POST /api/login` - Login or register
//! - `POST /api/leaderboard/record` - Record a result once
//! - `GET /api/leaderboard` - Top 10 winners
//! - `GET /api/admin/credentials` - All identities
//! - `GET /api/admin/leaderboard` - All attempts
//!
//! ## Fallback
//!
//! Everything else is served from `STATIC_DIR` if configured, or answered
//! with `404 {"error": "Not found"}`.

/// Main router creation
pub mod router;

/// API endpoint handlers
pub mod api_routes;

// Re-export commonly used functions
pub use router::create_router;
