//! Statistics rollup

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Aggregate counts over the movement table
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovementStats {
    /// All stored movements
    pub total: i64,
    /// Movements stored on the current calendar date
    #[serde(rename = "hoy")]
    pub today: i64,
    /// Movements stored in the current ISO-8601 week
    #[serde(rename = "semana")]
    pub this_week: i64,
    /// Timestamp of the latest movement, `None` on an empty table
    #[serde(rename = "ultimo_movimiento")]
    pub last_movement: Option<NaiveDateTime>,
}
