use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;

use crate::errors::{ApiError, UPDATE_FAILED};

/// JSON body parsed from raw bytes regardless of `Content-Type`.
///
/// Unreadable or malformed bodies are rejected as internal errors (500) rather
/// than the 4xx rejections of `axum::Json`.
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| ApiError::internal(UPDATE_FAILED, e))?;
        serde_json::from_slice(&bytes)
            .map(JsonBody)
            .map_err(|e| ApiError::internal(UPDATE_FAILED, format!("malformed JSON body: {e}")))
    }
}
