use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use edge_speech_gateway::controllers::speech::SpeechController;
use edge_speech_gateway::domain::speech::SpeechService;
use edge_speech_gateway::infrastructure::config::{Config, LogFormat};
use edge_speech_gateway::infrastructure::http::start_http_server;
use edge_speech_gateway::infrastructure::repositories::EdgeTtsRepository;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    init_logging(&config);

    tracing::info!(
        "Starting Edge Speech Gateway on {}:{}",
        config.host,
        config.port
    );

    tokio::fs::create_dir_all(&config.audio_dir).await?;
    tracing::info!(
        audio_dir = %config.audio_dir.display(),
        audio_format = %config.audio_format,
        "Audio storage ready"
    );

    let config = Arc::new(config);

    // === DEPENDENCY INJECTION SETUP ===
    let tts_repo = Arc::new(EdgeTtsRepository::new(config.audio_format.clone()));
    let speech_service = Arc::new(SpeechService::new(tts_repo, config.audio_dir.clone()));
    let speech_controller = Arc::new(SpeechController::new(speech_service));

    start_http_server(config, speech_controller).await?;

    Ok(())
}

fn init_logging(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "edge_speech_gateway=debug,tower_http=debug".into());

    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
