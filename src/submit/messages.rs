use serde::{Deserialize, Serialize};

/// Body of `POST /save_transcript`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveTranscriptRequest {
    pub transcript: String,
}

/// Response from the transcript backend
///
/// A non-empty `message` is the user-visible save confirmation; `error`
/// carries the rejection reason on failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SaveTranscriptResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
