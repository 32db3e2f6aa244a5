//! Connection provider
//!
//! Opens one MySQL connection per request from a `DbConfig` read at
//! startup. Connections are wrapped in [`ScopedConnection`]: handlers
//! call [`ScopedConnection::release`] on the normal path, and an early
//! return drops the connection, which closes its socket.

use std::ops::{Deref, DerefMut};

use sqlx::mysql::{MySqlConnectOptions, MySqlConnection};
use sqlx::Connection;

use super::DbError;
use crate::config::DbConfig;

/// Produces fresh connections to the movement store
///
/// Not `Debug`: the connect options hold the password.
#[derive(Clone)]
pub struct ConnectionProvider {
    options: MySqlConnectOptions,
}

impl ConnectionProvider {
    /// Build connect options once from the startup configuration.
    pub fn new(config: &DbConfig) -> Self {
        let mut options = MySqlConnectOptions::new().port(config.port);
        if let Some(host) = &config.host {
            options = options.host(host);
        }
        if let Some(user) = &config.user {
            options = options.username(user);
        }
        if let Some(password) = &config.password {
            options = options.password(password);
        }
        if let Some(database) = &config.database {
            options = options.database(database);
        }

        Self { options }
    }

    /// Open a new connection.
    ///
    /// # Errors
    ///
    /// Returns `DbError::Connect` if the handshake fails. No retry is
    /// attempted.
    pub async fn acquire(&self) -> Result<ScopedConnection, DbError> {
        let conn = MySqlConnection::connect_with(&self.options)
            .await
            .map_err(DbError::Connect)?;
        tracing::debug!("database connection acquired");
        Ok(ScopedConnection { conn })
    }

    /// Acquire a connection and release it without running a query.
    pub async fn ping(&self) -> Result<(), DbError> {
        self.acquire().await?.release().await;
        Ok(())
    }
}

/// A connection owned by one request
#[derive(Debug)]
pub struct ScopedConnection {
    conn: MySqlConnection,
}

impl ScopedConnection {
    /// Close the connection gracefully.
    ///
    /// A failed close is logged only; the socket is gone either way.
    pub async fn release(self) {
        match self.conn.close().await {
            Ok(()) => tracing::debug!("database connection released"),
            Err(e) => tracing::warn!(error = %e, "error closing database connection"),
        }
    }
}

impl Deref for ScopedConnection {
    type Target = MySqlConnection;

    fn deref(&self) -> &Self::Target {
        &self.conn
    }
}

impl DerefMut for ScopedConnection {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.conn
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unreachable_config() -> DbConfig {
        DbConfig {
            host: Some("127.0.0.1".into()),
            port: 1,
            user: Some("nobody".into()),
            ..DbConfig::default()
        }
    }

    #[tokio::test]
    async fn unreachable_host_is_connect_error() {
        let provider = ConnectionProvider::new(&unreachable_config());
        let err = provider.acquire().await.unwrap_err();
        assert!(err.is_unavailable());
    }

    #[tokio::test]
    async fn ping_reports_failure() {
        let provider = ConnectionProvider::new(&unreachable_config());
        assert!(provider.ping().await.is_err());
    }

    // Integration tests require a real database
    // Run with: DB_HOST=... DB_USER=... cargo test -p movctl-server -- --ignored

    #[tokio::test]
    #[ignore = "requires database"]
    async fn acquires_and_releases() {
        let provider = ConnectionProvider::new(&DbConfig::from_env());
        let mut conn = provider.acquire().await.expect("connect failed");

        let one: i64 = sqlx::query_scalar("SELECT 1")
            .fetch_one(&mut *conn)
            .await
            .expect("query failed");
        assert_eq!(one, 1);

        conn.release().await;
    }
}
