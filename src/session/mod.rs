//! Capture session management
//!
//! This module provides the `TranscriptSession` state machine that owns the
//! listening lifecycle:
//! - Idle → Listening on start()
//! - live transcript normalization while Listening
//! - Listening → Processing on the recognizer's `Ended` event
//! - Processing → Done after the (best-effort) submission attempt

mod config;
mod session;
mod stats;

pub use config::SessionConfig;
pub use session::{SessionState, TranscriptSession};
pub use stats::SessionStats;
