use super::ssml_text::{escape_text, escape_voice, split_escaped, MAX_CHUNK_BYTES};
use super::tts_repository::{SynthesisError, TtsRepository};
use crate::domain::speech::SynthesisParams;
use async_trait::async_trait;
use msedge_tts::tts::{client::connect, SpeechConfig};
use std::path::{Path, PathBuf};

pub const DEFAULT_AUDIO_FORMAT: &str = "audio-24khz-48kbitrate-mono-mp3";

/// Microsoft Edge read-aloud implementation of TTS repository.
///
/// The `msedge-tts` client is blocking, so every synthesis runs on Tokio's
/// blocking pool with its own websocket connection. The client embeds text
/// and voice into SSML verbatim, so both are escaped here, and long text is
/// sent as several messages over that one connection.
pub struct EdgeTtsRepository {
    audio_format: String,
}

impl EdgeTtsRepository {
    pub fn new(audio_format: String) -> Self {
        Self { audio_format }
    }

    fn speech_config(&self, params: &SynthesisParams) -> SpeechConfig {
        SpeechConfig {
            voice_name: escape_voice(&params.voice),
            audio_format: self.audio_format.clone(),
            pitch: params.prosody.pitch.0,
            rate: params.prosody.rate.0,
            volume: params.prosody.volume.0,
        }
    }
}

/// SSML-safe text chunks, in order
fn text_chunks(text: &str) -> Vec<String> {
    split_escaped(&escape_text(text), MAX_CHUNK_BYTES)
}

fn synthesize_blocking(
    chunks: Vec<String>,
    config: SpeechConfig,
    destination: PathBuf,
) -> Result<usize, SynthesisError> {
    if chunks.is_empty() {
        return Err(SynthesisError::EmptyAudio);
    }

    let mut client = connect().map_err(|e| {
        tracing::error!(error = %e, "Edge TTS connection failed");
        SynthesisError::Transport(e.to_string())
    })?;

    let mut merged_audio = Vec::new();
    for (index, chunk) in chunks.iter().enumerate() {
        let audio = client.synthesize(chunk, &config).map_err(|e| {
            tracing::error!(
                error = %e,
                voice = %config.voice_name,
                chunk_index = index,
                chunk_length = chunk.len(),
                "Edge TTS synthesis failed"
            );
            SynthesisError::Provider(e.to_string())
        })?;

        tracing::debug!(
            chunk_index = index,
            audio_size = audio.audio_bytes.len(),
            "Chunk synthesized"
        );
        merged_audio.extend(audio.audio_bytes);
    }

    if merged_audio.is_empty() {
        return Err(SynthesisError::EmptyAudio);
    }

    std::fs::write(&destination, &merged_audio)?;
    Ok(merged_audio.len())
}

#[async_trait]
impl TtsRepository for EdgeTtsRepository {
    async fn synthesize(
        &self,
        params: &SynthesisParams,
        destination: &Path,
    ) -> Result<(), SynthesisError> {
        let start_time = std::time::Instant::now();
        let config = self.speech_config(params);

        tracing::info!(
            voice = %params.voice,
            rate = %params.prosody.rate,
            volume = %params.prosody.volume,
            pitch = %params.prosody.pitch,
            audio_format = %self.audio_format,
            text_length = params.text.len(),
            "Calling Edge TTS"
        );

        let chunks = text_chunks(&params.text);
        let chunk_count = chunks.len();
        let path = destination.to_path_buf();
        let audio_size = tokio::task::spawn_blocking(move || synthesize_blocking(chunks, config, path))
            .await
            .map_err(|e| SynthesisError::Provider(format!("synthesis task failed: {}", e)))??;

        let duration = start_time.elapsed();
        tracing::info!(
            provider = "edge",
            voice = %params.voice,
            latency_ms = duration.as_millis(),
            characters_count = params.text.len(),
            chunk_count = chunk_count,
            audio_size_bytes = audio_size,
            "TTS synthesis completed"
        );

        Ok(())
    }
}
