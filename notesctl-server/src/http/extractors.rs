//! Custom Axum extractors

use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::Json;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use crate::models::{ItemId, ValidationError};

/// Extract and validate an item id from path.
///
/// A malformed id cannot name any stored item, so it is rejected as
/// not found rather than as a bad request.
pub struct ValidItemId(pub ItemId);

impl<S> FromRequestParts<S> for ValidItemId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::Validation(ValidationError::Empty { field: "id" }))?;

        let item_id = ItemId::parse(&id).map_err(|_| ApiError::NotFound {
            resource: "item",
            id,
        })?;

        Ok(Self(item_id))
    }
}

/// JSON body extractor whose rejections use the API error body.
///
/// Malformed JSON, a wrong content type, or fields of the wrong type all
/// answer 400 `validation_error` instead of axum's plain-text rejection.
pub struct ValidJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await.map_err(|rejection| {
            tracing::debug!("Rejected JSON body: {}", rejection.body_text());
            ApiError::Validation(ValidationError::InvalidForm)
        })?;

        Ok(Self(value))
    }
}
