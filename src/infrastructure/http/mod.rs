pub mod request_id;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::controllers::{
    avatar::AvatarController, chat::ChatController, listen::ListenController, ping,
    tts::TtsController,
};
use crate::infrastructure::config::Config;
use request_id::request_id_middleware;

/// Build the application router with all routes configured.
///
/// Kept separate from server startup so tests can run the exact same app
/// in-process with mocked providers.
pub fn build_router(
    chat_controller: Arc<ChatController>,
    listen_controller: Arc<ListenController>,
    tts_controller: Arc<TtsController>,
    avatar_controller: Arc<AvatarController>,
) -> Router {
    let chat_routes = Router::new()
        .route("/chat", post(ChatController::chat))
        .with_state(chat_controller);

    let listen_routes = Router::new()
        .route("/listen", post(ListenController::listen))
        .with_state(listen_controller);

    let tts_routes = Router::new()
        .route("/tts", post(TtsController::synthesize))
        .with_state(tts_controller);

    let avatar_routes = Router::new()
        .route("/avatar/talk_from_tts", post(AvatarController::talk_from_tts))
        .with_state(avatar_controller);

    Router::new()
        .route("/ping", get(ping::ping))
        .merge(chat_routes)
        .merge(listen_routes)
        .merge(tts_routes)
        .merge(avatar_routes)
        .layer(middleware::from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

/// Start the HTTP server, serving until the shutdown token fires.
pub async fn start_http_server(
    config: Arc<Config>,
    app: Router,
    shutdown: CancellationToken,
) -> Result<(), Box<dyn std::error::Error>> {
    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.host, config.port)).await?;

    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(async move { shutdown.cancelled().await })
        .await?;

    tracing::info!("Server stopped");

    Ok(())
}
