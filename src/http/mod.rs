//! HTTP API server for the community topics backend
//!
//! This module provides the REST API the capture page talks to:
//! - POST /save_transcript - Save a finished transcript to disk
//! - GET /topics - List topics (optional ?q= title search)
//! - GET /topics/:name - Topic detail card lookup
//! - GET /health - Health check

mod handlers;
mod routes;
mod state;

pub use routes::create_router;
pub use state::AppState;
