use super::dto::{SpeechRequest, SynthesisParams};
use super::error::SpeechServiceError;
use crate::infrastructure::repositories::{SynthesisError, TtsRepository};
use crate::infrastructure::storage::TempAudioFile;
use async_trait::async_trait;
use std::path::PathBuf;
use std::sync::Arc;

/// Synthesized audio ready to be streamed back
#[derive(Debug)]
pub struct SpeechAudio {
    pub file: tokio::fs::File,
    pub len: u64,
    /// Must live as long as `file` is being read
    pub guard: TempAudioFile,
}

pub struct SpeechService {
    tts_repo: Arc<dyn TtsRepository>,
    audio_dir: PathBuf,
}

impl SpeechService {
    pub fn new(tts_repo: Arc<dyn TtsRepository>, audio_dir: PathBuf) -> Self {
        Self {
            tts_repo,
            audio_dir,
        }
    }
}

#[async_trait]
pub trait SpeechServiceApi: Send + Sync {
    /// Synthesize a speech request
    ///
    /// This operation:
    /// - Validates required fields and maps prosody multipliers
    /// - Reserves a unique temporary file
    /// - Calls the TTS repository once, without retries
    ///
    /// Returns an open handle to the produced audio
    async fn synthesize(&self, request: SpeechRequest) -> Result<SpeechAudio, SpeechServiceError>;
}

#[async_trait]
impl SpeechServiceApi for SpeechService {
    async fn synthesize(&self, request: SpeechRequest) -> Result<SpeechAudio, SpeechServiceError> {
        let params = request.validate()?;
        let guard = TempAudioFile::allocate(&self.audio_dir, params.text.chars().count(), &params.voice);

        tracing::info!(
            text_length = params.text.len(),
            voice = %params.voice,
            rate = %params.prosody.rate,
            volume = %params.prosody.volume,
            pitch = %params.prosody.pitch,
            destination = %guard.path().display(),
            "Speech synthesis request"
        );

        self.tts_repo
            .synthesize(&params, guard.path())
            .await
            .map_err(|e| synthesis_failed(e, &params))?;

        let (file, len) = guard
            .open()
            .await
            .map_err(|e| synthesis_failed(SynthesisError::Io(e), &params))?;

        if len == 0 {
            return Err(synthesis_failed(SynthesisError::EmptyAudio, &params));
        }

        tracing::debug!(audio_size_bytes = len, "Speech audio ready");

        Ok(SpeechAudio { file, len, guard })
    }
}

fn synthesis_failed(source: SynthesisError, params: &SynthesisParams) -> SpeechServiceError {
    tracing::warn!(
        error = %source,
        kind = source.kind(),
        voice = %params.voice,
        "Speech synthesis failed"
    );
    SpeechServiceError::Synthesis {
        source,
        param: params.describe(),
    }
}
