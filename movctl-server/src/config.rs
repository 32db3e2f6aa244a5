//! Database configuration - environment loading
//!
//! Configuration is loaded once at startup from environment variables:
//! - `DB_HOST`: database host (driver default: localhost)
//! - `DB_PORT`: database port (default: 3306, also used when not numeric)
//! - `DB_USER`: user name (driver default: root)
//! - `DB_PASSWORD`: password
//! - `DB_NAME`: default schema

use std::fmt;

/// Port used when `DB_PORT` is unset or not a number
pub const DEFAULT_DB_PORT: u16 = 3306;

/// Connection settings for the movement store
#[derive(Clone, Default, PartialEq, Eq)]
pub struct DbConfig {
    pub host: Option<String>,
    pub port: u16,
    pub user: Option<String>,
    pub password: Option<String>,
    pub database: Option<String>,
}

impl DbConfig {
    /// Create config from the process environment
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Create config from an arbitrary variable lookup (for testing)
    pub fn from_vars<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = lookup("DB_PORT")
            .and_then(|raw| raw.trim().parse::<u16>().ok())
            .unwrap_or(DEFAULT_DB_PORT);

        Self {
            host: lookup("DB_HOST"),
            port,
            user: lookup("DB_USER"),
            password: lookup("DB_PASSWORD"),
            database: lookup("DB_NAME"),
        }
    }

    /// Host to connect to, falling back to the driver default
    pub fn host_or_default(&self) -> &str {
        self.host.as_deref().unwrap_or("localhost")
    }
}

impl fmt::Debug for DbConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DbConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &self.password.as_ref().map(|_| "***"))
            .field("database", &self.database)
            .finish()
    }
}

/// Whether 500 responses carry the underlying error text
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ErrorDetail {
    /// Only the contextual message is sent; detail goes to the log
    #[default]
    Hidden,
    /// Driver error text is appended to the message
    Exposed,
}
