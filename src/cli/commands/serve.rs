//! HTTP server exposing the tools for integration with other systems.
//!
//! A thin facade over the same tool implementations the MCP server uses.
//! Every tool call answers HTTP 200 with a text result; failures are
//! reported through the content of that result, not through status codes.

use crate::cli::Output;
use crate::config::Settings;
use crate::tools::YoutubeTools;
use crate::transcript::{TranscriptSource, YoutubeTranscriptClient};
use axum::{
    extract::State,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

/// Run the HTTP server.
pub async fn run_serve(
    host: Option<&str>,
    port: Option<u16>,
    settings: Settings,
) -> anyhow::Result<()> {
    let host = host.unwrap_or(&settings.server.host).to_string();
    let port = port.unwrap_or(settings.server.port);

    let tools = Arc::new(YoutubeTools::new(YoutubeTranscriptClient::from_settings(
        &settings,
    )?));

    let app = router(tools);

    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    Output::header("Tekst Server");
    println!();
    Output::success(&format!("Listening on http://{}", addr));
    println!();
    println!("Endpoints:");
    Output::kv("Health", "GET  /health");
    Output::kv("Video ID", "POST /tools/video-id");
    Output::kv("Transcript", "POST /tools/transcript");
    println!();
    Output::info("Press Ctrl+C to stop the server.");

    axum::serve(listener, app).await?;

    Ok(())
}

fn router<S: TranscriptSource + 'static>(tools: Arc<YoutubeTools<S>>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health))
        .route("/tools/video-id", post(video_id::<S>))
        .route("/tools/transcript", post(transcript::<S>))
        .layer(cors)
        .with_state(tools)
}

// === Request/Response Types ===

#[derive(Deserialize)]
struct VideoIdRequest {
    /// YouTube URL
    url: String,
}

#[derive(Deserialize)]
struct TranscriptRequest {
    /// 11-character video ID
    video_id: String,
}

#[derive(Serialize)]
struct ToolResponse {
    result: String,
}

// === Handlers ===

async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

async fn video_id<S: TranscriptSource>(
    State(tools): State<Arc<YoutubeTools<S>>>,
    Json(req): Json<VideoIdRequest>,
) -> impl IntoResponse {
    Json(ToolResponse {
        result: tools.get_video_id(&req.url),
    })
}

async fn transcript<S: TranscriptSource>(
    State(tools): State<Arc<YoutubeTools<S>>>,
    Json(req): Json<TranscriptRequest>,
) -> impl IntoResponse {
    Json(ToolResponse {
        result: tools.get_transcript(&req.video_id).await,
    })
}
