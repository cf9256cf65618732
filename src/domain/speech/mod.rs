pub mod dto;
pub mod error;
pub mod prosody;
pub mod service;

pub use dto::{SpeechRequest, SynthesisParams};
pub use error::SpeechServiceError;
pub use prosody::{Hertz, Percent, Prosody};
pub use service::{SpeechService, SpeechServiceApi};
