//! Statistics endpoint
//!
//! Failures here never expose error detail, whatever the server's
//! detail policy is.

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::config::ErrorDetail;
use crate::db::MovementRepo;
use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::models::MovementStats;

const STATS_ERROR: &str = "Error interno del servidor al obtener estadísticas.";

/// Statistics response
#[derive(Serialize)]
pub struct StatsResponse {
    pub success: bool,
    pub data: MovementStats,
}

/// GET /api/estadisticas - counts and latest timestamp
async fn statistics(State(state): State<Arc<AppState>>) -> Result<Json<StatsResponse>, ApiError> {
    let mut conn = state
        .provider
        .acquire()
        .await
        .map_err(|e| ApiError::from_db(STATS_ERROR, e, ErrorDetail::Hidden))?;

    let result = MovementRepo::new(&mut conn).stats().await;
    conn.release().await;
    let data = result.map_err(|e| ApiError::from_db(STATS_ERROR, e, ErrorDetail::Hidden))?;

    Ok(Json(StatsResponse {
        success: true,
        data,
    }))
}

/// Statistics routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/estadisticas", get(statistics))
}
