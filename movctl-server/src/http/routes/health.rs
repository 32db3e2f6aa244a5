//! Health check endpoint
//!
//! Checks the database dependency: a connection is opened and closed,
//! no query is run.

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::http::error::ApiError;
use crate::http::server::AppState;

const HEALTHY_MESSAGE: &str = "API y base de datos funcionando correctamente";
const HEALTH_ERROR: &str = "Error de conexión";

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub success: bool,
    pub message: &'static str,
}

/// GET /api/health
async fn health(State(state): State<Arc<AppState>>) -> Result<Json<HealthResponse>, ApiError> {
    state
        .provider
        .ping()
        .await
        .map_err(|e| state.db_error(HEALTH_ERROR, e))?;

    Ok(Json(HealthResponse {
        success: true,
        message: HEALTHY_MESSAGE,
    }))
}

/// Health routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/health", get(health))
}
