pub mod config;
pub mod http;
pub mod normalize;
pub mod recognition;
pub mod session;
pub mod submit;
pub mod topics;

pub use config::Config;
pub use http::{create_router, AppState};
pub use normalize::normalize;
pub use recognition::{
    RecognitionBackend, RecognitionBackendFactory, RecognitionConfig, RecognitionEvent,
    RecognitionSource, ScriptedBackend,
};
pub use session::{SessionConfig, SessionState, SessionStats, TranscriptSession};
pub use submit::{HttpSubmitter, SaveTranscriptRequest, SaveTranscriptResponse, TranscriptSubmitter};
pub use topics::TopicDetails;
