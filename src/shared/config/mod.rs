//! Server configuration module
//!
//! Provides the configuration the server binary reads at startup. Values come
//! from environment variables (a `.env` file is honoured by the binary) and
//! are assembled through [`ServerConfigBuilder`].
//!
//! | Variable       | Default | Meaning                                    |
//! |----------------|---------|--------------------------------------------|
//! | `SERVER_PORT`  | `3000`  | Listening port                             |
//! | `DATABASE_URL` | unset   | Postgres URL; unset means in-memory store  |
//! | `STATIC_DIR`   | unset   | Front-end directory served for other paths |

use std::path::PathBuf;

use thiserror::Error;

/// Port used when `SERVER_PORT` is not set
pub const DEFAULT_PORT: u16 = 3000;

/// Server configuration
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    /// Listening port
    pub port: u16,
    /// Postgres connection string
    pub database_url: Option<String>,
    /// Directory of static front-end assets
    pub static_dir: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            database_url: None,
            static_dir: None,
        }
    }
}

impl ServerConfig {
    /// Create a new ServerConfigBuilder
    pub fn builder() -> ServerConfigBuilder {
        ServerConfigBuilder::default()
    }

    /// Read the configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read the configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut builder = Self::builder();

        if let Some(port) = lookup("SERVER_PORT") {
            builder = builder.port_str(&port)?;
        }
        if let Some(url) = lookup("DATABASE_URL") {
            builder = builder.database_url(url);
        }
        if let Some(dir) = lookup("STATIC_DIR") {
            builder = builder.static_dir(dir);
        }

        builder.build()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.port == 0 {
            return Err(ConfigError::InvalidPort("0".to_string()));
        }
        if let Some(url) = &self.database_url {
            if !(url.starts_with("postgres://") || url.starts_with("postgresql://")) {
                return Err(ConfigError::InvalidDatabaseUrl(url.clone()));
            }
        }
        Ok(())
    }
}

/// Builder for ServerConfig
#[derive(Debug, Default)]
pub struct ServerConfigBuilder {
    port: Option<u16>,
    database_url: Option<String>,
    static_dir: Option<PathBuf>,
}

impl ServerConfigBuilder {
    /// Set the listening port
    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Set the listening port from its textual form
    pub fn port_str(self, port: &str) -> Result<Self, ConfigError> {
        let port = port
            .trim()
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort(port.to_string()))?;
        Ok(self.port(port))
    }

    /// Set the database URL. Blank values are treated as unset.
    pub fn database_url(mut self, url: impl Into<String>) -> Self {
        let url = url.into();
        let url = url.trim();
        self.database_url = (!url.is_empty()).then(|| url.to_string());
        self
    }

    /// Set the static asset directory. Blank values are treated as unset.
    pub fn static_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        self.static_dir = (!dir.as_os_str().is_empty()).then_some(dir);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<ServerConfig, ConfigError> {
        let config = ServerConfig {
            port: self.port.unwrap_or(DEFAULT_PORT),
            database_url: self.database_url,
            static_dir: self.static_dir,
        };
        config.validate()?;
        Ok(config)
    }
}

/// Configuration errors
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("invalid port: {0}")]
    InvalidPort(String),
    #[error("invalid database URL (expected postgres://...): {0}")]
    InvalidDatabaseUrl(String),
}
