use anyhow::Result;
use clap::Parser;
use tracing::info;
use voice_topics::{create_router, AppState, Config};

#[derive(Debug, Parser)]
#[command(name = "voice-topics", about = "Community topics backend with transcript capture")]
struct Args {
    /// Path to the configuration file, without extension
    #[arg(long, default_value = "config/voice-topics")]
    config: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    let cfg = Config::load(&args.config)?;

    info!("{} starting", cfg.service.name);
    info!("Transcripts directory: {}", cfg.transcripts.output_dir);
    info!(
        "Recognition: language={} interim_results={} continuous={}",
        cfg.recognition.language, cfg.recognition.interim_results, cfg.recognition.continuous
    );

    let state = AppState::new(cfg.transcripts.output_dir.clone().into());
    let router = create_router(state);

    let addr = format!("{}:{}", cfg.service.http.bind, cfg.service.http.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("HTTP server listening on {}", addr);

    axum::serve(listener, router).await?;

    Ok(())
}
