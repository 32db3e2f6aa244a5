//! Custom Axum extractors
//!
//! Rejections are turned into `ApiError` so malformed input still gets
//! a JSON envelope.

use axum::body::Bytes;
use axum::extract::{FromRequest, FromRequestParts, Path, Query, Request};
use axum::http::request::Parts;

use super::error::ApiError;
use crate::models::{ListParams, NewMovement, Pagination, ValidationError};

/// Message for ids that do not name a movement
pub const MOVEMENT_NOT_FOUND: &str = "Movimiento no encontrado";

/// Parse the create-movement body, tolerating an empty body
pub struct MovementBody(pub NewMovement);

impl<S> FromRequest<S> for MovementBody
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await.map_err(|e| {
            ApiError::Validation(ValidationError::InvalidBody {
                reason: e.body_text(),
            })
        })?;

        Ok(Self(NewMovement::from_body(&bytes)?))
    }
}

/// Extract a movement id made only of ASCII digits
///
/// Anything else cannot name a stored movement and answers 404.
pub struct MovementId(pub i64);

impl<S> FromRequestParts<S> for MovementId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let not_found = || ApiError::NotFound {
            message: MOVEMENT_NOT_FOUND,
        };

        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| not_found())?;

        if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return Err(not_found());
        }

        raw.parse::<i64>().map(Self).map_err(|_| not_found())
    }
}

/// Extract `page`/`limit` for the movement listing
pub struct ListQuery(pub Pagination);

impl<S> FromRequestParts<S> for ListQuery
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(pairs): Query<Vec<(String, String)>> = Query::from_request_parts(parts, state)
            .await
            .map_err(|e| {
                ApiError::Validation(ValidationError::InvalidQuery {
                    reason: e.body_text(),
                })
            })?;

        Ok(Self(Pagination::try_from(ListParams::from_pairs(pairs))?))
    }
}
