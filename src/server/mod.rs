//! HTTP server - Axum router and shared state

pub mod error;
pub mod routes;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::routing::post;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::application::{RunAnalysisUseCase, TranscribeAudioUseCase};

/// Application state shared across handlers.
/// The worker use cases hold the process-wide provider clients.
#[derive(Clone)]
pub struct AppState {
    pub transcribe: Arc<TranscribeAudioUseCase>,
    pub analyze: Arc<RunAnalysisUseCase>,
}

impl AppState {
    pub fn new(transcribe: TranscribeAudioUseCase, analyze: RunAnalysisUseCase) -> Self {
        Self {
            transcribe: Arc::new(transcribe),
            analyze: Arc::new(analyze),
        }
    }
}

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api_transcribe", post(routes::transcribe::api_transcribe))
        .route("/api_analyze", post(routes::analyze::api_analyze))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Run the web server.
pub async fn run_server(state: AppState, addr: SocketAddr) -> anyhow::Result<()> {
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("listening on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
