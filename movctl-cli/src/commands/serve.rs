//! HTTP server command
//!
//! Loads the database configuration, checks the database once and
//! runs the API until Ctrl+C / SIGTERM.

use anyhow::{Context, Result};
use clap::Parser;
use std::net::SocketAddr;

use movctl_server::db::schema;
use movctl_server::{run_server, ConnectionProvider, DbConfig, ErrorDetail, ServerConfig};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', default_value = "0.0.0.0:5000", env = "MOVCTL_BIND")]
    pub bind: SocketAddr,

    /// Append database error text to 500 responses
    #[arg(long)]
    pub expose_errors: bool,

    /// Do not create the movimientos table at startup
    #[arg(long)]
    pub no_init_schema: bool,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let db_config = DbConfig::from_env();
    tracing::info!(config = ?db_config, "Database configuration loaded");

    let provider = ConnectionProvider::new(&db_config);
    startup_check(&provider, !args.no_init_schema).await;

    let config = ServerConfig {
        bind_addr: args.bind,
        error_detail: if args.expose_errors {
            ErrorDetail::Exposed
        } else {
            ErrorDetail::Hidden
        },
    };

    tracing::info!("Starting movctl server on {}", args.bind);

    // Run server (blocks until shutdown)
    run_server(provider, config)
        .await
        .context("Server error")?;

    Ok(())
}

/// Try one connection before serving. Failures are logged, not fatal:
/// the health endpoint keeps reporting the database state.
async fn startup_check(provider: &ConnectionProvider, init_schema: bool) {
    let mut conn = match provider.acquire().await {
        Ok(conn) => conn,
        Err(e) => {
            tracing::warn!(error = %e, "Database connection failed at startup");
            return;
        }
    };
    tracing::info!("Database connection successful");

    if init_schema {
        if let Err(e) = schema::ensure(&mut conn).await {
            tracing::warn!(error = %e, "Could not create movimientos table");
        }
    }

    conn.release().await;
}
