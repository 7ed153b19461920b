//! Speech recognition event source
//!
//! Defines the event vocabulary a recognition source produces and the
//! `RecognitionBackend` trait the capture session consumes events through.
//! Events arrive on a single channel in delivery order.

mod backend;
mod events;

pub use backend::{
    RecognitionBackend, RecognitionBackendFactory, RecognitionSource, ScriptedBackend,
};
pub use events::{RecognitionConfig, RecognitionEvent};
