//! Movement records

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;

use super::ValidationError;

/// Description stored when the caller does not supply one
pub const DEFAULT_DESCRIPTION: &str = "Movimiento detectado";

/// A stored movement event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Movement {
    pub id: i64,
    #[serde(rename = "descripcion")]
    #[sqlx(rename = "descripcion")]
    pub description: String,
    #[serde(rename = "fecha_hora")]
    #[sqlx(rename = "fecha_hora")]
    pub recorded_at: NaiveDateTime,
}

/// Body of `POST /api/movimiento`
///
/// Unknown fields are ignored; only `descripcion` is read.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewMovement {
    #[serde(default, rename = "descripcion")]
    pub description: Option<String>,
}

impl NewMovement {
    /// Parse a request body. An empty body counts as `{}`; anything
    /// other than a JSON object is rejected.
    pub fn from_body(body: &[u8]) -> Result<Self, ValidationError> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }
        let invalid = |e: serde_json::Error| ValidationError::InvalidBody {
            reason: e.to_string(),
        };

        let value: Value = serde_json::from_slice(body).map_err(invalid)?;
        if !value.is_object() {
            return Err(ValidationError::InvalidBody {
                reason: "se esperaba un objeto JSON".to_owned(),
            });
        }
        serde_json::from_value(value).map_err(invalid)
    }

    /// Description to store, defaulting when absent or null.
    pub fn description(&self) -> &str {
        self.description.as_deref().unwrap_or(DEFAULT_DESCRIPTION)
    }
}
