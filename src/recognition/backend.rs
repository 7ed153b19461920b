use super::events::{RecognitionConfig, RecognitionEvent};
use anyhow::Result;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::info;

/// Speech recognition backend trait
///
/// Implementations deliver `RecognitionEvent`s over a single channel, in
/// order and non-overlapping. `stop()` only requests termination; the stream
/// always finishes with an `Ended` event so consumers observe a single
/// shutdown path.
#[async_trait::async_trait]
pub trait RecognitionBackend: Send + Sync {
    /// Start recognizing
    ///
    /// Returns a channel receiver that will receive recognition events
    async fn start(&mut self) -> Result<mpsc::Receiver<RecognitionEvent>>;

    /// Request that recognition end; `Ended` follows on the event stream
    async fn stop(&mut self) -> Result<()>;

    /// Check if the backend is currently listening
    fn is_listening(&self) -> bool;

    /// Get backend name for logging
    fn name(&self) -> &str;
}

/// Recognition source type
#[derive(Debug, Clone)]
pub enum RecognitionSource {
    /// Live capture from a host speech recognizer
    Live,
    /// Scripted replay of a fixed event sequence (testing/batch processing)
    Scripted(Vec<RecognitionEvent>),
}

/// Recognition backend factory
pub struct RecognitionBackendFactory;

impl RecognitionBackendFactory {
    /// Create a recognition backend for the given source
    pub fn create(
        source: RecognitionSource,
        config: RecognitionConfig,
    ) -> Result<Box<dyn RecognitionBackend>> {
        match source {
            RecognitionSource::Live => {
                anyhow::bail!("Speech recognition is not supported in this environment")
            }

            RecognitionSource::Scripted(events) => {
                Ok(Box::new(ScriptedBackend::new(events, config)))
            }
        }
    }
}

/// Replays a fixed sequence of recognition events
///
/// Honors `stop()` by cutting the remainder of the script; events already in
/// the channel when the stop lands are still delivered, matching the race a
/// user-initiated stop has with in-flight results from a live recognizer.
pub struct ScriptedBackend {
    config: RecognitionConfig,
    script: Option<Vec<RecognitionEvent>>,
    stop_requested: Arc<AtomicBool>,
    listening: Arc<AtomicBool>,
}

impl ScriptedBackend {
    pub fn new(script: Vec<RecognitionEvent>, config: RecognitionConfig) -> Self {
        Self {
            config,
            script: Some(script),
            stop_requested: Arc::new(AtomicBool::new(false)),
            listening: Arc::new(AtomicBool::new(false)),
        }
    }
}

#[async_trait::async_trait]
impl RecognitionBackend for ScriptedBackend {
    async fn start(&mut self) -> Result<mpsc::Receiver<RecognitionEvent>> {
        let script = match self.script.take() {
            Some(script) => script,
            None => anyhow::bail!("Scripted recognition already started"),
        };

        info!(
            "Starting scripted recognition ({} events, language {})",
            script.len(),
            self.config.language
        );

        let (tx, rx) = mpsc::channel(32);
        let stop_requested = Arc::clone(&self.stop_requested);
        let listening = Arc::clone(&self.listening);
        listening.store(true, Ordering::SeqCst);

        tokio::spawn(async move {
            let mut sent_ended = false;

            for event in script {
                if stop_requested.load(Ordering::SeqCst) {
                    break;
                }

                let is_ended = matches!(event, RecognitionEvent::Ended);
                if tx.send(event).await.is_err() {
                    // Receiver dropped; session is gone
                    break;
                }

                if is_ended {
                    sent_ended = true;
                    break;
                }
            }

            // The stream always terminates with Ended
            if !sent_ended {
                tx.send(RecognitionEvent::Ended).await.ok();
            }

            listening.store(false, Ordering::SeqCst);
        });

        Ok(rx)
    }

    async fn stop(&mut self) -> Result<()> {
        info!("Stop requested for scripted recognition");
        self.stop_requested.store(true, Ordering::SeqCst);
        Ok(())
    }

    fn is_listening(&self) -> bool {
        self.listening.load(Ordering::SeqCst)
    }

    fn name(&self) -> &str {
        "scripted"
    }
}
