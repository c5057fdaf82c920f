//! triviaboard - One-Shot Trivia Leaderboard
//!
//! A small HTTP backend for a one-time trivia game. Players identify
//! themselves by phone number, submit exactly one game result, and the
//! fastest winners are ranked on a public leaderboard.
//!
//! # Overview
//!
//! - Login-or-register by phone number, no passwords or tokens
//! - One result per player, enforced atomically by the store
//! - Top 10 winners by elapsed time, with a deterministic tie-break
//! - Unauthenticated admin listings of every identity and attempt
//!
//! # Module Structure
//!
//! - **`shared`** - Records, validation, ranking, configuration
//!   - `Identity`, `Attempt`, `Outcome`
//!   - `SharedError`, `ServerConfig`
//!
//! - **`backend`** - Axum server
//!   - Handlers, routes, store backends (Postgres, in-memory)
//!   - `BackendError` and its HTTP mapping
//!
//! # Usage
//!
//! ```rust,no_run
//! use triviaboard::backend::server::create_app;
//! use triviaboard::shared::ServerConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let app = create_app(ServerConfig::from_env()?).await?;
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! - `shared::SharedError` for input validation
//! - `backend::store::StoreError` for persistence failures
//! - `backend::BackendError` at the HTTP boundary, rendered as
//!   `{"error": "..."}`

/// Shared types and rules
pub mod shared;

/// Backend server-side code
pub mod backend;
