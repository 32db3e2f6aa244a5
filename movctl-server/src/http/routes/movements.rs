//! Movement endpoints

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, routing::post, Json, Router};
use serde::Serialize;
use sqlx::mysql::MySqlConnection;

use crate::db::{DbError, MovementRepo};
use crate::http::error::ApiError;
use crate::http::extractors::{ListQuery, MovementBody, MovementId, MOVEMENT_NOT_FOUND};
use crate::http::server::AppState;
use crate::models::{Movement, PageInfo, Pagination};

const CREATED_MESSAGE: &str = "Movimiento registrado correctamente";
const CREATE_ERROR: &str = "Error al registrar movimiento";
const LIST_ERROR: &str = "Error al obtener movimientos";
const GET_ERROR: &str = "Error al obtener movimiento";

/// Create movement response
#[derive(Serialize)]
pub struct CreatedResponse {
    pub success: bool,
    pub message: &'static str,
    pub id: u64,
}

/// Movement listing response
#[derive(Serialize)]
pub struct ListResponse {
    pub success: bool,
    pub data: Vec<Movement>,
    pub pagination: PageInfo,
}

/// Single movement response
#[derive(Serialize)]
pub struct MovementResponse {
    pub success: bool,
    pub data: Movement,
}

/// POST /api/movimiento - record a movement
async fn create_movement(
    State(state): State<Arc<AppState>>,
    MovementBody(body): MovementBody,
) -> Result<(StatusCode, Json<CreatedResponse>), ApiError> {
    let mut conn = state
        .provider
        .acquire()
        .await
        .map_err(|e| state.db_error(CREATE_ERROR, e))?;

    let result = MovementRepo::new(&mut conn).create(body.description()).await;
    conn.release().await;
    let id = result.map_err(|e| state.db_error(CREATE_ERROR, e))?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            success: true,
            message: CREATED_MESSAGE,
            id,
        }),
    ))
}

/// GET /api/movimientos - list movements, newest first
async fn list_movements(
    State(state): State<Arc<AppState>>,
    ListQuery(page): ListQuery,
) -> Result<Json<ListResponse>, ApiError> {
    let mut conn = state
        .provider
        .acquire()
        .await
        .map_err(|e| state.db_error(LIST_ERROR, e))?;

    let result = fetch_page(&mut conn, page).await;
    conn.release().await;
    let (data, total) = result.map_err(|e| state.db_error(LIST_ERROR, e))?;

    Ok(Json(ListResponse {
        success: true,
        data,
        pagination: PageInfo::new(total, page),
    }))
}

async fn fetch_page(
    conn: &mut MySqlConnection,
    page: Pagination,
) -> Result<(Vec<Movement>, i64), DbError> {
    let mut repo = MovementRepo::new(conn);
    let data = repo.list(page).await?;
    let total = repo.count().await?;
    Ok((data, total))
}

/// GET /api/movimiento/{id} - get a single movement
async fn get_movement(
    State(state): State<Arc<AppState>>,
    MovementId(id): MovementId,
) -> Result<Json<MovementResponse>, ApiError> {
    let mut conn = state
        .provider
        .acquire()
        .await
        .map_err(|e| state.db_error(GET_ERROR, e))?;

    let result = MovementRepo::new(&mut conn).get(id).await;
    conn.release().await;

    let movement = result
        .map_err(|e| state.db_error(GET_ERROR, e))?
        .ok_or(ApiError::NotFound {
            message: MOVEMENT_NOT_FOUND,
        })?;

    Ok(Json(MovementResponse {
        success: true,
        data: movement,
    }))
}

/// Movement routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/movimiento", post(create_movement))
        .route("/movimiento/{id}", get(get_movement))
        .route("/movimientos", get(list_movements))
}
