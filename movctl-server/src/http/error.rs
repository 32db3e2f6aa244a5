//! API error types with IntoResponse
//!
//! Every failure becomes `{"success": false, "message": ...}` with a
//! status chosen by error kind.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::config::ErrorDetail;
use crate::db::DbError;
use crate::models::ValidationError;

/// API error type with deterministic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Request input rejected (400)
    Validation(ValidationError),

    /// Resource not found (404)
    NotFound { message: &'static str },

    /// Path exists but not for this method (405)
    MethodNotAllowed,

    /// Database could not be reached (500)
    StoreUnavailable { message: String },

    /// Query or other server-side failure (500)
    Internal { message: String },
}

/// JSON body of every error response
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub success: bool,
    pub message: String,
}

impl ApiError {
    /// Convert a database failure, logging the full detail.
    ///
    /// `context` is always sent to the client; the driver text is only
    /// appended when `detail` is `ErrorDetail::Exposed`.
    pub fn from_db(context: &'static str, err: DbError, detail: ErrorDetail) -> Self {
        tracing::error!(error = %err, "{}", context);

        let message = match detail {
            ErrorDetail::Hidden => context.to_owned(),
            ErrorDetail::Exposed => format!("{}: {}", context, err),
        };

        if err.is_unavailable() {
            Self::StoreUnavailable { message }
        } else {
            Self::Internal { message }
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::StoreUnavailable { .. } | Self::Internal { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn message(self) -> String {
        match self {
            Self::Validation(e) => e.to_string(),
            Self::NotFound { message } => message.to_owned(),
            Self::MethodNotAllowed => "Método no permitido".to_owned(),
            Self::StoreUnavailable { message } | Self::Internal { message } => message,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorBody {
            success: false,
            message: self.message(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use serde_json::{json, Value};

    async fn body_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn validation_error_is_400() {
        let err = ApiError::Validation(ValidationError::Zero { field: "limit" });
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            json!({"success": false, "message": "limit debe ser distinto de cero"})
        );
    }

    #[tokio::test]
    async fn not_found_is_404() {
        let err = ApiError::NotFound {
            message: "Movimiento no encontrado",
        };
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await["success"], json!(false));
    }

    #[tokio::test]
    async fn method_not_allowed_is_405() {
        let response = ApiError::MethodNotAllowed.into_response();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(
            body_json(response).await,
            json!({"success": false, "message": "Método no permitido"})
        );
    }

    #[tokio::test]
    async fn connect_failure_is_500() {
        let err = ApiError::from_db(
            "Error de conexión",
            DbError::Connect(sqlx::Error::PoolClosed),
            ErrorDetail::Hidden,
        );
        assert!(matches!(err, ApiError::StoreUnavailable { .. }));
        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn hidden_detail_sends_context_only() {
        let err = ApiError::from_db(
            "Error al obtener movimientos",
            DbError::Query(sqlx::Error::RowNotFound),
            ErrorDetail::Hidden,
        );
        assert!(matches!(err, ApiError::Internal { .. }));
        let body = body_json(err.into_response()).await;
        assert_eq!(body["message"], json!("Error al obtener movimientos"));
    }

    #[tokio::test]
    async fn exposed_detail_appends_driver_text() {
        let err = ApiError::from_db(
            "Error al obtener movimientos",
            DbError::Query(sqlx::Error::RowNotFound),
            ErrorDetail::Exposed,
        );
        let body = body_json(err.into_response()).await;
        let expected = format!(
            "Error al obtener movimientos: {}",
            sqlx::Error::RowNotFound
        );
        assert_eq!(body["message"], json!(expected));
    }
}
