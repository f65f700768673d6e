use async_openai::{config::OpenAIConfig, Client};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cultula_backend::controllers::{
    avatar::AvatarController, chat::ChatController, listen::ListenController, tts::TtsController,
};
use cultula_backend::domain::avatar::{PollPolicy, TalkPipeline};
use cultula_backend::domain::chat::ChatService;
use cultula_backend::domain::transcription::TranscriptionService;
use cultula_backend::domain::tts::TtsService;
use cultula_backend::infrastructure::config::{Config, LogFormat};
use cultula_backend::infrastructure::http::{build_router, start_http_server};
use cultula_backend::infrastructure::providers::{
    CloudinaryPublisher, DidVideoGenerator, GoogleTokenProvider, GoogleTtsSynthesizer,
    OpenAiChatProvider, OpenAiTranscriber, VideoGenerator,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    init_logging(&config);

    tracing::info!(
        "Starting CultuLa Backend on {}:{}",
        config.host,
        config.port
    );

    // === DEPENDENCY INJECTION SETUP ===
    // 1. Instantiate provider clients (one per external service)
    tracing::info!("Instantiating provider clients...");
    let openai_client = Arc::new(Client::with_config(
        OpenAIConfig::new().with_api_key(config.openai_api_key.clone()),
    ));
    let chat_provider = Arc::new(OpenAiChatProvider::new(
        openai_client.clone(),
        config.openai_chat_model.clone(),
    ));
    let transcriber = Arc::new(OpenAiTranscriber::new(
        openai_client,
        config.openai_transcribe_model.clone(),
    ));

    // Decoded at startup so a malformed service account fails fast
    let google_token_provider = Arc::new(GoogleTokenProvider::new(
        &config.google_tts_credentials_base64,
    )?);
    let synthesizer = Arc::new(GoogleTtsSynthesizer::new(google_token_provider));

    let publisher = Arc::new(CloudinaryPublisher::new(
        config.cloudinary_cloud_name.clone(),
        config.cloudinary_api_key.clone(),
        config.cloudinary_api_secret.clone(),
    ));

    // D-ID credentials are optional: without them the server still runs and
    // avatar requests fail with a configuration error before any network call
    let video_generator: Option<Arc<dyn VideoGenerator>> = match &config.did_api_key {
        Some(key) => Some(Arc::new(DidVideoGenerator::new(
            key.clone(),
            config.did_api_url.clone(),
        ))),
        None => {
            tracing::warn!("DID_API_KEY not set; /avatar/talk_from_tts will be unavailable");
            None
        }
    };

    // 2. Instantiate services (inject providers)
    tracing::info!("Instantiating services...");
    let chat_service = Arc::new(ChatService::new(chat_provider));
    let transcription_service = Arc::new(TranscriptionService::new(transcriber));
    let tts_service = Arc::new(TtsService::new(synthesizer.clone(), publisher.clone()));
    let pipeline = Arc::new(TalkPipeline::new(
        synthesizer,
        publisher,
        video_generator,
        PollPolicy::default(),
    ));

    // Shutdown token: cancelled on ctrl-c, stops the server and any
    // in-flight polling
    let shutdown = CancellationToken::new();
    let signal = shutdown.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("Shutdown signal received");
            signal.cancel();
        }
    });

    // 3. Instantiate controllers (inject services)
    tracing::info!("Instantiating controllers...");
    let chat_controller = Arc::new(ChatController::new(chat_service));
    let listen_controller = Arc::new(ListenController::new(transcription_service));
    let tts_controller = Arc::new(TtsController::new(tts_service));
    let avatar_controller = Arc::new(AvatarController::new(pipeline, shutdown.clone()));

    // Start HTTP server with all routes
    let app = build_router(
        chat_controller,
        listen_controller,
        tts_controller,
        avatar_controller,
    );
    start_http_server(Arc::new(config), app, shutdown).await?;

    Ok(())
}

fn init_logging(config: &Config) {
    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "cultula_backend=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "cultula_backend=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
