use std::path::PathBuf;
use std::sync::Arc;

/// Shared application state for HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Directory where numbered transcript files are written
    pub transcripts_dir: Arc<PathBuf>,
}

impl AppState {
    pub fn new(transcripts_dir: PathBuf) -> Self {
        Self {
            transcripts_dir: Arc::new(transcripts_dir),
        }
    }
}
