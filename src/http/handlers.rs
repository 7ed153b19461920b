use super::state::AppState;
use crate::submit::SaveTranscriptResponse;
use crate::topics::{self, TopicDetails};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde::{Deserialize, Serialize};
use std::path::Path as FsPath;
use tracing::{error, info};

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Body of `POST /save_transcript`; a missing `transcript` field is treated
/// the same as an empty one
#[derive(Debug, Deserialize)]
pub struct SaveTranscriptBody {
    #[serde(default)]
    pub transcript: String,
}

#[derive(Debug, Deserialize)]
pub struct TopicsQuery {
    /// Optional title search query
    pub q: Option<String>,
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /save_transcript
/// Save a finished transcript as the next numbered file
pub async fn save_transcript(
    State(state): State<AppState>,
    Json(req): Json<SaveTranscriptBody>,
) -> impl IntoResponse {
    if req.transcript.trim().is_empty() {
        info!("No transcript provided");
        return (
            StatusCode::BAD_REQUEST,
            Json(SaveTranscriptResponse {
                message: None,
                error: Some("No transcript provided".to_string()),
            }),
        )
            .into_response();
    }

    // Number files by how many transcripts are already saved
    let next = match count_saved(&state.transcripts_dir).await {
        Ok(count) => count + 1,
        Err(e) => {
            error!("Failed to inspect transcripts directory: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(SaveTranscriptResponse {
                    message: None,
                    error: Some(format!("Failed to inspect transcripts directory: {}", e)),
                }),
            )
                .into_response();
        }
    };

    let file_path = state.transcripts_dir.join(format!("script{}.txt", next));

    match tokio::fs::write(&file_path, &req.transcript).await {
        Ok(()) => {
            info!("Transcript saved successfully to {}", file_path.display());
            (
                StatusCode::OK,
                Json(SaveTranscriptResponse {
                    message: Some(format!("Transcript saved as {}", file_path.display())),
                    error: None,
                }),
            )
                .into_response()
        }
        Err(e) => {
            error!("Error saving transcript: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(SaveTranscriptResponse {
                    message: None,
                    error: Some(format!("Error saving transcript: {}", e)),
                }),
            )
                .into_response()
        }
    }
}

/// GET /topics
/// List the topic catalog, optionally filtered by ?q= title search
pub async fn list_topics(Query(params): Query<TopicsQuery>) -> impl IntoResponse {
    let results: Vec<&'static TopicDetails> = match &params.q {
        Some(q) => topics::search(q),
        None => topics::all(),
    };

    Json(results)
}

/// GET /topics/:name
/// Look up one topic's detail card assets
pub async fn get_topic(Path(name): Path<String>) -> impl IntoResponse {
    match topics::lookup(&name) {
        Some(details) => (StatusCode::OK, Json(details)).into_response(),
        None => {
            info!("Topic not found: {}", name);
            (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse {
                    error: format!("Topic {} not found", name),
                }),
            )
                .into_response()
        }
    }
}

/// GET /health
/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

async fn count_saved(dir: &FsPath) -> std::io::Result<usize> {
    tokio::fs::create_dir_all(dir).await?;

    let mut entries = tokio::fs::read_dir(dir).await?;
    let mut count = 0;
    while entries.next_entry().await?.is_some() {
        count += 1;
    }

    Ok(count)
}
