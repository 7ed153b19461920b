// Integration tests for the HTTP backend
//
// These tests run the real router on an ephemeral port and exercise it with
// the HTTP submitter and a plain client, verifying the transcript save
// semantics and the topic catalog routes.

use anyhow::Result;
use axum::{routing::post, Router};
use std::net::SocketAddr;
use std::sync::Arc;
use tempfile::TempDir;
use voice_topics::{
    create_router, AppState, HttpSubmitter, RecognitionEvent, RecognitionSource, SessionConfig,
    SessionState, TranscriptSession, TranscriptSubmitter,
};

async fn spawn_server(transcripts_dir: std::path::PathBuf) -> Result<SocketAddr> {
    let state = AppState::new(transcripts_dir);
    let router = create_router(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;

    tokio::spawn(async move {
        axum::serve(listener, router).await.ok();
    });

    Ok(addr)
}

#[tokio::test]
async fn test_save_transcript_writes_numbered_files() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let addr = spawn_server(temp_dir.path().to_path_buf()).await?;

    let submitter = HttpSubmitter::new(&format!("http://{}", addr));

    let first = submitter.submit("Hello world.").await?;
    let message = first.message.expect("save should confirm");
    assert!(message.contains("script1.txt"), "got: {}", message);

    let second = submitter.submit("Is this real?").await?;
    let message = second.message.expect("save should confirm");
    assert!(message.contains("script2.txt"), "got: {}", message);

    // The files hold the submitted text verbatim
    let first_text = std::fs::read_to_string(temp_dir.path().join("script1.txt"))?;
    assert_eq!(first_text, "Hello world.");
    let second_text = std::fs::read_to_string(temp_dir.path().join("script2.txt"))?;
    assert_eq!(second_text, "Is this real?");

    Ok(())
}

#[tokio::test]
async fn test_save_transcript_rejects_empty_body() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let addr = spawn_server(temp_dir.path().to_path_buf()).await?;

    let submitter = HttpSubmitter::new(&format!("http://{}", addr));

    let result = submitter.submit("   ").await;
    assert!(result.is_err(), "empty transcript should be rejected");
    assert!(result.unwrap_err().to_string().contains("No transcript provided"));

    // Nothing was written
    assert!(std::fs::read_dir(temp_dir.path())?.next().is_none());

    Ok(())
}

#[tokio::test]
async fn test_save_transcript_rejects_missing_field() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let addr = spawn_server(temp_dir.path().to_path_buf()).await?;

    // A body without the transcript field gets the same rejection as an
    // empty transcript
    let client = reqwest::Client::new();
    let response = client
        .post(format!("http://{}/save_transcript", addr))
        .json(&serde_json::json!({}))
        .send()
        .await?;

    assert_eq!(response.status(), reqwest::StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json().await?;
    assert_eq!(body["error"], "No transcript provided");

    // Nothing was written
    assert!(std::fs::read_dir(temp_dir.path())?.next().is_none());

    Ok(())
}

#[tokio::test]
async fn test_non_json_backend_response_still_completes_session() -> Result<()> {
    // A backend that answers with plain text instead of JSON
    let router = Router::new().route("/save_transcript", post(|| async { "saved" }));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    tokio::spawn(async move {
        axum::serve(listener, router).await.ok();
    });

    let submitter = Arc::new(HttpSubmitter::new(&format!("http://{}", addr)));

    // The submitter itself reports the parse failure
    let direct = submitter.submit("Hello world.").await;
    assert!(direct.is_err(), "non-JSON response should be an error");

    // Driven through a session, the failure is logged and the session
    // still completes
    let (mut session, mut status_rx) = TranscriptSession::new(
        SessionConfig::default(),
        RecognitionSource::Scripted(vec![
            RecognitionEvent::Final("hello world".to_string()),
            RecognitionEvent::Ended,
        ]),
        submitter,
    )?;

    session.start().await?;
    let transcript = session.run().await?;

    assert_eq!(transcript, "Hello world.");
    assert_eq!(session.state(), SessionState::Done);

    let mut statuses = Vec::new();
    while let Ok(s) = status_rx.try_recv() {
        statuses.push(s);
    }
    assert!(!statuses.contains(&"Transcript saved successfully!".to_string()));
    assert!(statuses.contains(&"Final Transcript: \"Hello world.\"".to_string()));

    Ok(())
}

#[tokio::test]
async fn test_health_check() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let addr = spawn_server(temp_dir.path().to_path_buf()).await?;

    let response = reqwest::get(format!("http://{}/health", addr)).await?;
    assert_eq!(response.status(), reqwest::StatusCode::OK);
    assert_eq!(response.text().await?, "OK");

    Ok(())
}

#[tokio::test]
async fn test_list_topics_returns_full_catalog() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let addr = spawn_server(temp_dir.path().to_path_buf()).await?;

    let response = reqwest::get(format!("http://{}/topics", addr)).await?;
    assert_eq!(response.status(), reqwest::StatusCode::OK);

    let topics: serde_json::Value = response.json().await?;
    let topics = topics.as_array().expect("topics should be an array");
    assert_eq!(topics.len(), 9);

    Ok(())
}

#[tokio::test]
async fn test_list_topics_with_search_query() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let addr = spawn_server(temp_dir.path().to_path_buf()).await?;

    let response = reqwest::get(format!("http://{}/topics?q=quantum", addr)).await?;
    let topics: serde_json::Value = response.json().await?;
    let topics = topics.as_array().expect("topics should be an array");

    assert_eq!(topics.len(), 1);
    assert_eq!(topics[0]["title"], "Quantum Computing");

    Ok(())
}

#[tokio::test]
async fn test_get_topic_by_name() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let addr = spawn_server(temp_dir.path().to_path_buf()).await?;

    let response = reqwest::get(format!("http://{}/topics/AI", addr)).await?;
    assert_eq!(response.status(), reqwest::StatusCode::OK);

    let topic: serde_json::Value = response.json().await?;
    assert_eq!(topic["title"], "Artificial Intelligence");
    assert_eq!(topic["image"], "assets/ai.jpg");
    assert_eq!(topic["pdf"], "assets/ai.pdf");
    assert_eq!(topic["audio"], "assets/ai.mp3");

    Ok(())
}

#[tokio::test]
async fn test_get_unknown_topic_is_not_found() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let addr = spawn_server(temp_dir.path().to_path_buf()).await?;

    let response = reqwest::get(format!("http://{}/topics/Gardening", addr)).await?;
    assert_eq!(response.status(), reqwest::StatusCode::NOT_FOUND);

    let body: serde_json::Value = response.json().await?;
    assert_eq!(body["error"], "Topic Gardening not found");

    Ok(())
}
