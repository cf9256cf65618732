use crate::domain::speech::SynthesisParams;
use async_trait::async_trait;
use std::path::Path;

pub const TRANSPORT_FAILURE_MESSAGE: &str =
    "client connection error, the speech provider may be rate limiting requests";

#[derive(Debug, thiserror::Error)]
pub enum SynthesisError {
    /// Connection or handshake with the provider failed. The provider
    /// answers throttled clients this way, hence the fixed message.
    #[error("{}", TRANSPORT_FAILURE_MESSAGE)]
    Transport(String),
    #[error("{0}")]
    Provider(String),
    #[error("{0}")]
    Io(#[from] std::io::Error),
    #[error("speech provider returned no audio")]
    EmptyAudio,
}

impl SynthesisError {
    /// Value of the `type` field in error responses
    pub fn kind(&self) -> &'static str {
        match self {
            SynthesisError::Transport(_) => "transport_error",
            SynthesisError::Provider(_) => "provider_error",
            SynthesisError::Io(_) => "io_error",
            SynthesisError::EmptyAudio => "empty_audio",
        }
    }
}

/// Repository for TTS synthesis operations.
/// Abstracts the underlying TTS provider and its client library.
#[async_trait]
pub trait TtsRepository: Send + Sync {
    /// Synthesize `params` and write the audio to `destination`
    ///
    /// Exactly one attempt is made; failures are returned as-is.
    async fn synthesize(
        &self,
        params: &SynthesisParams,
        destination: &Path,
    ) -> Result<(), SynthesisError>;
}
