use super::messages::{SaveTranscriptRequest, SaveTranscriptResponse};
use anyhow::{Context, Result};
use tracing::info;

/// Destination for finished transcripts
///
/// The session submits best-effort: a failure is logged by the caller, never
/// retried.
#[async_trait::async_trait]
pub trait TranscriptSubmitter: Send + Sync {
    /// Submit a finished transcript
    ///
    /// The response carries the user-visible confirmation message on success.
    async fn submit(&self, transcript: &str) -> Result<SaveTranscriptResponse>;
}

/// Submits transcripts to the backend over HTTP
pub struct HttpSubmitter {
    client: reqwest::Client,
    url: String,
}

impl HttpSubmitter {
    /// Create a submitter for the backend at `base_url`
    /// (e.g. "http://localhost:5000")
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: format!("{}/save_transcript", base_url.trim_end_matches('/')),
        }
    }
}

#[async_trait::async_trait]
impl TranscriptSubmitter for HttpSubmitter {
    async fn submit(&self, transcript: &str) -> Result<SaveTranscriptResponse> {
        info!("Submitting transcript to {}", self.url);

        let response = self
            .client
            .post(&self.url)
            .json(&SaveTranscriptRequest {
                transcript: transcript.to_string(),
            })
            .send()
            .await
            .context("Failed to reach transcript backend")?;

        let status = response.status();
        let body: SaveTranscriptResponse = response
            .json()
            .await
            .context("Failed to parse transcript backend response")?;

        if let Some(error) = &body.error {
            anyhow::bail!("Transcript backend rejected save ({}): {}", status, error);
        }

        if !status.is_success() {
            anyhow::bail!("Transcript backend returned {}", status);
        }

        Ok(body)
    }
}
