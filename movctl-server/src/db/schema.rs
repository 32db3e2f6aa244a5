//! Schema bootstrap for the movement table

use sqlx::mysql::MySqlConnection;

use super::DbError;

/// Table layout expected by the repository
const CREATE_MOVEMENTS: &str = r#"
    CREATE TABLE IF NOT EXISTS movimientos (
        id BIGINT NOT NULL AUTO_INCREMENT PRIMARY KEY,
        descripcion VARCHAR(255) NOT NULL,
        fecha_hora DATETIME NOT NULL,
        INDEX idx_movimientos_fecha_hora (fecha_hora)
    )
"#;

/// Create the `movimientos` table if it does not exist yet.
pub async fn ensure(conn: &mut MySqlConnection) -> Result<(), DbError> {
    tracing::info!("Ensuring movimientos table exists...");
    sqlx::query(CREATE_MOVEMENTS).execute(&mut *conn).await?;
    Ok(())
}
