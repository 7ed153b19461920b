use serde::{Deserialize, Serialize};

/// A single update from the speech recognition source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
pub enum RecognitionEvent {
    /// The recognizer has begun producing results
    Started,

    /// Interim transcript that may still be revised
    Partial(String),

    /// Transcript segment the recognizer will not revise further
    Final(String),

    /// Recoverable recognition error (e.g. "network", "no-speech")
    Error(String),

    /// The recognizer has stopped delivering results for this session
    Ended,
}

/// Configuration for the recognition source
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecognitionConfig {
    /// BCP-47 language tag
    pub language: String,

    /// Deliver interim (partial) results for live display
    pub interim_results: bool,

    /// Keep listening across pauses instead of ending after the first result
    pub continuous: bool,
}

impl Default for RecognitionConfig {
    fn default() -> Self {
        Self {
            language: "en-US".to_string(),
            interim_results: true,
            continuous: true,
        }
    }
}
