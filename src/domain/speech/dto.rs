use serde::{Deserialize, Deserializer, Serialize};

use super::error::SpeechServiceError;
use super::prosody::Prosody;

pub const MISSING_PARAMETERS: &str = "missing required parameters: input, voice";

/// Request for POST /v1/audio/speech
///
/// Mirrors the OpenAI speech contract. Fields this service does not use
/// (`model`, `response_format`, ...) are accepted and ignored.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct SpeechRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voice: Option<String>,
    #[serde(default, deserialize_with = "multiplier", skip_serializing_if = "Option::is_none")]
    pub speed: Option<f64>,
    #[serde(default, deserialize_with = "multiplier", skip_serializing_if = "Option::is_none")]
    pub volume: Option<f64>,
    #[serde(default, deserialize_with = "multiplier", skip_serializing_if = "Option::is_none")]
    pub pitch: Option<f64>,
}

/// A validated request with prosody already mapped to the provider encoding
#[derive(Debug, Clone, PartialEq)]
pub struct SynthesisParams {
    pub text: String,
    pub voice: String,
    pub prosody: Prosody,
}

impl SynthesisParams {
    /// Diagnostic echo included in synthesis error responses
    pub fn describe(&self) -> String {
        format!(
            "speed={},voice={},input={}",
            self.prosody.rate, self.voice, self.text
        )
    }
}

impl SpeechRequest {
    /// Check required fields and map multipliers. Values are otherwise
    /// passed through untouched; the provider decides what it accepts.
    pub fn validate(self) -> Result<SynthesisParams, SpeechServiceError> {
        let (Some(text), Some(voice)) = (self.input, self.voice) else {
            return Err(SpeechServiceError::InvalidRequest(
                MISSING_PARAMETERS.to_string(),
            ));
        };

        let prosody = Prosody::from_multipliers(
            self.speed.unwrap_or(1.0),
            self.volume.unwrap_or(1.0),
            self.pitch.unwrap_or(1.0),
        );

        Ok(SynthesisParams {
            text,
            voice,
            prosody,
        })
    }
}

/// Accepts `1.25`, `"1.25"` or `null`
fn multiplier<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
    }

    let (value, raw) = match Option::<Raw>::deserialize(deserializer)? {
        None => return Ok(None),
        Some(Raw::Number(value)) => (Some(value), value.to_string()),
        Some(Raw::Text(text)) => (text.trim().parse::<f64>().ok(), text),
    };

    // "NaN" and "inf" parse as f64 but have no percentage offset
    match value {
        Some(value) if value.is_finite() => Ok(Some(value)),
        _ => Err(serde::de::Error::custom(format!("invalid multiplier: {raw:?}"))),
    }
}
