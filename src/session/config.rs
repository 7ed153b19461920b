use crate::recognition::RecognitionConfig;
use serde::{Deserialize, Serialize};

/// Configuration for a capture session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Unique session identifier (e.g. "capture-2025-...")
    pub session_id: String,

    /// Recognition source configuration
    pub recognition: RecognitionConfig,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            session_id: format!("capture-{}", uuid::Uuid::new_v4()),
            recognition: RecognitionConfig::default(),
        }
    }
}
