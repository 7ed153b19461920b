//! Transcript submission
//!
//! The `TranscriptSubmitter` trait is the session's outbound seam; the
//! default implementation POSTs to the backend's `/save_transcript` route.
//! Wire types here are shared with the HTTP server.

mod client;
mod messages;

pub use client::{HttpSubmitter, TranscriptSubmitter};
pub use messages::{SaveTranscriptRequest, SaveTranscriptResponse};
