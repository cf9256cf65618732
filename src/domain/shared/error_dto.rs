use serde::{Deserialize, Serialize};

/// `{"error": "<message>"}` for rejected requests
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// OpenAI-style envelope for synthesis failures
#[derive(Debug, Serialize, Deserialize)]
pub struct SynthesisErrorResponse {
    pub error: SynthesisErrorDetail,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SynthesisErrorDetail {
    pub message: String,
    #[serde(rename = "type")]
    pub error_type: String,
    pub param: String,
    pub code: u16,
}
