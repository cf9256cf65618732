use crate::error::AppError;
use crate::infrastructure::repositories::SynthesisError;

#[derive(Debug, thiserror::Error)]
pub enum SpeechServiceError {
    #[error("{0}")]
    InvalidRequest(String),
    #[error("{source}")]
    Synthesis {
        #[source]
        source: SynthesisError,
        /// Effective rate/voice/input, echoed back for diagnostics
        param: String,
    },
}

impl From<SpeechServiceError> for AppError {
    fn from(err: SpeechServiceError) -> Self {
        match err {
            SpeechServiceError::InvalidRequest(msg) => AppError::BadRequest(msg),
            SpeechServiceError::Synthesis { source, param } => AppError::Synthesis {
                message: source.to_string(),
                kind: source.kind(),
                param,
            },
        }
    }
}
