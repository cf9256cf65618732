use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::domain::shared::error_dto::{ErrorResponse, SynthesisErrorDetail, SynthesisErrorResponse};

/// Code embedded in synthesis error bodies. Existing clients of this API
/// read it, so it stays 400 even though the response status is 500.
pub const SYNTHESIS_ERROR_CODE: u16 = 400;

/// Main application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    BadRequest(String),

    #[error("Synthesis failed ({kind}): {message}")]
    Synthesis {
        message: String,
        kind: &'static str,
        param: String,
    },
}

impl AppError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Synthesis { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Implement IntoResponse for automatic conversion in handlers
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        tracing::error!(
            error = %self,
            status = %status.as_u16(),
            "Request failed"
        );

        match self {
            Self::BadRequest(message) => {
                (status, Json(ErrorResponse { error: message })).into_response()
            }
            Self::Synthesis {
                message,
                kind,
                param,
            } => (
                status,
                Json(SynthesisErrorResponse {
                    error: SynthesisErrorDetail {
                        message,
                        error_type: kind.to_string(),
                        param,
                        code: SYNTHESIS_ERROR_CODE,
                    },
                }),
            )
                .into_response(),
        }
    }
}

/// Custom result type for the application
pub type AppResult<T> = Result<T, AppError>;
