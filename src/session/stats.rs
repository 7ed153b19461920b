use super::session::SessionState;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Statistics about a capture session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionStats {
    /// Current lifecycle state
    pub state: SessionState,

    /// When listening started
    pub started_at: DateTime<Utc>,

    /// Total duration in seconds
    pub duration_secs: f64,

    /// Number of recognition events handled
    pub events_received: usize,

    /// Length of the accumulated transcript in characters
    pub transcript_chars: usize,
}
