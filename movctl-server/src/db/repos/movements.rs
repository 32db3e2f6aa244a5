//! Movement repository
//!
//! Handles the append-only movement table:
//! - create: INSERT in a transaction, returns the store-assigned id
//! - list: newest first, LIMIT/OFFSET
//! - stats: four aggregates on one connection, null-safe counts

use chrono::NaiveDateTime;
use sqlx::mysql::{MySqlConnection, MySqlRow};
use sqlx::{Connection, Row};

use crate::db::DbError;
use crate::models::{Movement, MovementStats, Pagination};

const COUNT_ALL: &str = "SELECT COUNT(*) AS total FROM movimientos";

const COUNT_TODAY: &str =
    "SELECT COUNT(*) AS hoy FROM movimientos WHERE DATE(fecha_hora) = CURDATE()";

// Mode 1: ISO-8601 weeks, Monday start
const COUNT_THIS_WEEK: &str = "SELECT COUNT(*) AS semana FROM movimientos \
     WHERE YEARWEEK(fecha_hora, 1) = YEARWEEK(CURDATE(), 1)";

/// Movement repository over a caller-owned connection
pub struct MovementRepo<'c> {
    conn: &'c mut MySqlConnection,
}

impl<'c> MovementRepo<'c> {
    pub fn new(conn: &'c mut MySqlConnection) -> Self {
        Self { conn }
    }

    /// Insert a movement stamped with the store's current time.
    ///
    /// Returns the id assigned by the store.
    pub async fn create(&mut self, description: &str) -> Result<u64, DbError> {
        let mut tx = self.conn.begin().await?;

        let result = sqlx::query("INSERT INTO movimientos (descripcion, fecha_hora) VALUES (?, NOW())")
            .bind(description)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        let id = result.last_insert_id();
        tracing::debug!(id, "movement recorded");
        Ok(id)
    }

    /// One page of movements, newest first.
    pub async fn list(&mut self, page: Pagination) -> Result<Vec<Movement>, DbError> {
        let movements = sqlx::query_as::<_, Movement>(
            r#"
            SELECT id, descripcion, fecha_hora
            FROM movimientos
            ORDER BY fecha_hora DESC, id DESC
            LIMIT ? OFFSET ?
            "#,
        )
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&mut *self.conn)
        .await?;

        Ok(movements)
    }

    /// Total number of stored movements.
    pub async fn count(&mut self) -> Result<i64, DbError> {
        self.fetch_count(COUNT_ALL, "total").await
    }

    /// Get a single movement by id.
    pub async fn get(&mut self, id: i64) -> Result<Option<Movement>, DbError> {
        let movement = sqlx::query_as::<_, Movement>(
            "SELECT id, descripcion, fecha_hora FROM movimientos WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&mut *self.conn)
        .await?;

        Ok(movement)
    }

    /// Compute the statistics rollup.
    pub async fn stats(&mut self) -> Result<MovementStats, DbError> {
        let total = self.fetch_count(COUNT_ALL, "total").await?;
        let today = self.fetch_count(COUNT_TODAY, "hoy").await?;
        let this_week = self.fetch_count(COUNT_THIS_WEEK, "semana").await?;

        let last_movement = sqlx::query_scalar::<_, NaiveDateTime>(
            "SELECT fecha_hora FROM movimientos ORDER BY fecha_hora DESC LIMIT 1",
        )
        .fetch_optional(&mut *self.conn)
        .await?;

        Ok(MovementStats {
            total,
            today,
            this_week,
            last_movement,
        })
    }

    async fn fetch_count(&mut self, sql: &'static str, column: &'static str) -> Result<i64, DbError> {
        let row = sqlx::query(sql).fetch_optional(&mut *self.conn).await?;
        Ok(count_or_zero(row.as_ref(), column))
    }
}

/// Read a count column, treating a missing row, NULL or an
/// undecodable value as zero.
fn count_or_zero(row: Option<&MySqlRow>, column: &str) -> i64 {
    let Some(row) = row else {
        return 0;
    };

    match row.try_get::<Option<i64>, _>(column) {
        Ok(count) => count.unwrap_or(0),
        Err(e) => {
            tracing::warn!(column, error = %e, "unexpected count result, using 0");
            0
        }
    }
}
