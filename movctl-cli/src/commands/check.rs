//! Database connectivity check

use anyhow::{Context, Result};

use movctl_server::{ConnectionProvider, DbConfig};

/// Open and close one connection, failing if the database is unreachable
pub async fn run_check() -> Result<()> {
    let db_config = DbConfig::from_env();
    let target = format!("{}:{}", db_config.host_or_default(), db_config.port);

    ConnectionProvider::new(&db_config)
        .ping()
        .await
        .with_context(|| format!("Cannot connect to database at {}", target))?;

    println!("Database reachable at {}", target);
    Ok(())
}
