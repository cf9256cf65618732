pub mod edge_tts_repository;
pub mod ssml_text;
pub mod tts_repository;

pub use edge_tts_repository::{EdgeTtsRepository, DEFAULT_AUDIO_FORMAT};
pub use tts_repository::{SynthesisError, TtsRepository, TRANSPORT_FAILURE_MESSAGE};
