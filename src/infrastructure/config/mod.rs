use serde::Deserialize;
use std::env;
use std::path::PathBuf;

use crate::infrastructure::repositories::DEFAULT_AUDIO_FORMAT;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub log_format: LogFormat,
    /// Directory holding per-request audio files
    pub audio_dir: PathBuf,
    /// Output format requested from the Edge TTS provider
    pub audio_format: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

impl Config {
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        dotenvy::dotenv().ok();

        let config = Config {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "7899".to_string())
                .parse()?,
            log_format: match env::var("LOG_FORMAT").as_deref() {
                Ok("json") => LogFormat::Json,
                _ => LogFormat::Pretty,
            },
            audio_dir: env::var_os("AUDIO_TMP_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(env::temp_dir),
            audio_format: env::var("EDGE_TTS_AUDIO_FORMAT")
                .unwrap_or_else(|_| DEFAULT_AUDIO_FORMAT.to_string()),
        };

        Ok(config)
    }
}
