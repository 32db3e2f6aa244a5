//! Route handlers organized by resource

pub mod health;
pub mod movements;
pub mod stats;

use std::sync::Arc;

use axum::Router;

use super::error::ApiError;
use super::server::AppState;

/// All `/api` routes
pub fn api_router() -> Router<Arc<AppState>> {
    Router::new()
        .merge(movements::router())
        .merge(stats::router())
        .merge(health::router())
        .method_not_allowed_fallback(method_not_allowed)
}

/// Fallback for paths no route matches
pub async fn not_found() -> ApiError {
    ApiError::NotFound {
        message: "Ruta no encontrada",
    }
}

/// Fallback for known paths hit with an unsupported method
pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}
