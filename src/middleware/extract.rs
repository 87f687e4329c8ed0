/**
 * Validated JSON Extractor
 *
 * `ValidJson<T>` wraps Axum's JSON extractor and fails closed: any decode
 * problem (missing body, wrong content type, malformed JSON, mismatched
 * schema) becomes a 400 `InvalidInput` with a JSON error body, instead of
 * Axum's default plain-text rejection.
 */

use axum::extract::{FromRequest, Json, Request};
use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// JSON body extractor that rejects with `ApiError::InvalidInput`
pub struct ValidJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await.map_err(|rejection| {
            tracing::warn!("request body rejected: {}", rejection.body_text());
            ApiError::invalid_input(rejection.body_text())
        })?;

        Ok(ValidJson(value))
    }
}
