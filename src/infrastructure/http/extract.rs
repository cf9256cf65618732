use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;

use crate::error::AppError;

pub const INVALID_JSON: &str = "request body must be JSON";

/// JSON body extractor whose rejections use the API's error envelope.
///
/// The Content-Type header is not checked; any body that parses as the
/// target type is accepted.
pub struct JsonPayload<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonPayload<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = AppError;

    async fn from_request(request: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(request, state).await.map_err(|e| {
            tracing::debug!(error = %e, "Failed to read request body");
            AppError::BadRequest(format!("failed to read request body: {}", e.body_text()))
        })?;

        serde_json::from_slice::<T>(&bytes)
            .map(JsonPayload)
            .map_err(|e| {
                tracing::debug!(error = %e, "Failed to parse request body");
                if e.is_data() {
                    AppError::BadRequest(format!("invalid request body: {}", e))
                } else {
                    AppError::BadRequest(INVALID_JSON.to_string())
                }
            })
    }
}
