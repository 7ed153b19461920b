use super::config::SessionConfig;
use super::stats::SessionStats;
use crate::normalize::normalize;
use crate::recognition::{
    RecognitionBackend, RecognitionBackendFactory, RecognitionEvent, RecognitionSource,
};
use crate::submit::TranscriptSubmitter;
use anyhow::{Context, Result};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{error, info, warn};

/// Lifecycle state of a capture session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionState {
    /// Created, not yet listening
    Idle,
    /// Consuming recognition events; transcript is live
    Listening,
    /// Recognition ended; transcript frozen, submission in flight
    Processing,
    /// Submission attempted (successfully or not)
    Done,
}

/// A capture session that owns the listening lifecycle
///
/// Consumes recognition events from a single inbound channel, normalizes the
/// live transcript while listening, and hands the frozen text to the
/// submission collaborator when recognition ends. Display strings ("live
/// transcript", "Listening...", "Error: ...") are emitted on a status
/// channel; the session never renders anything itself.
pub struct TranscriptSession {
    /// Session configuration
    config: SessionConfig,

    /// Current lifecycle state
    state: SessionState,

    /// Normalized transcript; mutated only while Listening
    accumulated_text: String,

    /// Guards against re-entrant start while the backend is spinning up
    busy: bool,

    /// Recognition source
    backend: Box<dyn RecognitionBackend>,

    /// Submission collaborator for the finished transcript
    submitter: Arc<dyn TranscriptSubmitter>,

    /// Inbound event channel, populated by start()
    events: Option<mpsc::Receiver<RecognitionEvent>>,

    /// Display surface: plain text updates for rendering
    status_tx: mpsc::UnboundedSender<String>,

    /// When listening started
    started_at: chrono::DateTime<Utc>,

    /// Number of recognition events handled
    events_received: usize,
}

impl TranscriptSession {
    /// Create a new capture session
    ///
    /// Builds the recognition backend from `source` using the session's
    /// recognition configuration, and returns the session together with the
    /// receiving end of its status channel. Fails when the source is not
    /// available in this environment; that is reported once, to the caller.
    pub fn new(
        config: SessionConfig,
        source: RecognitionSource,
        submitter: Arc<dyn TranscriptSubmitter>,
    ) -> Result<(Self, mpsc::UnboundedReceiver<String>)> {
        let backend = RecognitionBackendFactory::create(source, config.recognition.clone())?;
        let (status_tx, status_rx) = mpsc::unbounded_channel();

        let session = Self {
            config,
            state: SessionState::Idle,
            accumulated_text: String::new(),
            busy: false,
            backend,
            submitter,
            events: None,
            status_tx,
            started_at: Utc::now(),
            events_received: 0,
        };

        Ok((session, status_rx))
    }

    /// Current lifecycle state
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// The accumulated (normalized) transcript
    pub fn transcript(&self) -> &str {
        &self.accumulated_text
    }

    /// Begin listening
    ///
    /// No-op unless the session is Idle, so a double start cannot overlap two
    /// recognition runs.
    pub async fn start(&mut self) -> Result<()> {
        if self.state != SessionState::Idle || self.busy {
            warn!("Session {} already started", self.config.session_id);
            return Ok(());
        }

        self.busy = true;
        info!("Starting capture session: {}", self.config.session_id);

        self.accumulated_text.clear();

        let result = self
            .backend
            .start()
            .await
            .context("Failed to start recognition");

        match result {
            Ok(rx) => {
                self.events = Some(rx);
                self.state = SessionState::Listening;
                self.started_at = Utc::now();
                self.busy = false;
                self.emit_status("Listening...");
                Ok(())
            }
            Err(e) => {
                self.busy = false;
                Err(e)
            }
        }
    }

    /// Request that listening end
    ///
    /// The state changes on the subsequent `Ended` event, not here, so a
    /// user-initiated stop cannot race an in-flight final result.
    pub async fn stop(&mut self) -> Result<()> {
        if self.state != SessionState::Listening {
            warn!("Session {} is not listening", self.config.session_id);
            return Ok(());
        }

        info!("Stop requested for session: {}", self.config.session_id);
        self.backend
            .stop()
            .await
            .context("Failed to stop recognition")
    }

    /// Handle one recognition event
    pub async fn handle_event(&mut self, event: RecognitionEvent) -> Result<()> {
        self.events_received += 1;

        match event {
            RecognitionEvent::Started => {
                info!("Recognition started for session: {}", self.config.session_id);
            }

            RecognitionEvent::Partial(text) | RecognitionEvent::Final(text) => {
                if self.state != SessionState::Listening {
                    warn!(
                        "Ignoring recognition result in state {:?} for session {}",
                        self.state, self.config.session_id
                    );
                    return Ok(());
                }

                // Last writer wins: each result replaces the running text
                self.accumulated_text = normalize(&text);
                self.emit_status(self.accumulated_text.clone());
            }

            RecognitionEvent::Error(reason) => {
                // Recoverable: surface it and keep listening
                warn!(
                    "Recognition error in session {}: {}",
                    self.config.session_id, reason
                );
                self.emit_status(format!("Error: {}", reason));
            }

            RecognitionEvent::Ended => {
                if self.state == SessionState::Listening {
                    self.state = SessionState::Processing;
                    self.emit_status("Processing...");
                    self.submit().await;
                }
            }
        }

        Ok(())
    }

    /// Drain recognition events until the stream closes or the session
    /// finishes; returns the final transcript
    pub async fn run(&mut self) -> Result<String> {
        let mut rx = self
            .events
            .take()
            .context("Session has no event stream; call start() first")?;

        while let Some(event) = rx.recv().await {
            self.handle_event(event).await?;
            if self.state == SessionState::Done {
                break;
            }
        }

        Ok(self.accumulated_text.clone())
    }

    /// Return the session to Idle, clearing the transcript
    ///
    /// The recognition source is consumed by start(), so the next capture
    /// gets a fresh session; reset covers the dismissal path, where the
    /// transcript is discarded without submitting.
    pub fn reset(&mut self) {
        info!("Resetting session: {}", self.config.session_id);
        self.state = SessionState::Idle;
        self.accumulated_text.clear();
        self.events = None;
        self.events_received = 0;
    }

    /// Get current session statistics
    pub fn stats(&self) -> SessionStats {
        let duration = Utc::now().signed_duration_since(self.started_at);

        SessionStats {
            state: self.state,
            started_at: self.started_at,
            duration_secs: duration.num_milliseconds() as f64 / 1000.0,
            events_received: self.events_received,
            transcript_chars: self.accumulated_text.chars().count(),
        }
    }

    /// Submit the frozen transcript, best-effort
    ///
    /// A failed save is logged and the session still completes; the user is
    /// never blocked on the backend.
    async fn submit(&mut self) {
        info!(
            "Submitting transcript for session {} ({} chars)",
            self.config.session_id,
            self.accumulated_text.chars().count()
        );

        match self.submitter.submit(&self.accumulated_text).await {
            Ok(response) => {
                if let Some(message) = response.message {
                    info!("Transcript saved: {}", message);
                    self.emit_status("Transcript saved successfully!");
                }
            }
            Err(e) => {
                error!(
                    "Failed to save transcript for session {}: {}",
                    self.config.session_id, e
                );
            }
        }

        self.state = SessionState::Done;
        self.emit_status(format!("Final Transcript: \"{}\"", self.accumulated_text));
    }

    fn emit_status(&self, text: impl Into<String>) {
        // The display surface may already be gone (UI dismissed); not an error
        self.status_tx.send(text.into()).ok();
    }
}
