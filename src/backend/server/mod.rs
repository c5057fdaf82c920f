//! Server Module
//!
//! Server-side setup: application state, store selection and app creation.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs          - Module exports and documentation
//! ├── state.rs        - AppState and FromRef implementations
//! ├── config.rs       - Store selection (Postgres or in-memory)
//! └── init.rs         - App creation and shutdown signal
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Configuration Loading**: `ServerConfig::from_env()` in the binary
//! 2. **Store Selection**: Postgres with migrations, or in-memory
//! 3. **Router Creation**: API routes, CORS, request tracing, static fallback

/// Application state management
pub mod state;

/// Store selection from configuration
pub mod config;

/// Server initialization
pub mod init;

// Re-export commonly used types
pub use state::AppState;
pub use init::{create_app, shutdown_signal};
