//! JournalAgent server entry point

use std::net::SocketAddr;
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use journal_agent::application::{RunAnalysisUseCase, TranscribeAudioUseCase};
use journal_agent::domain::AppConfig;
use journal_agent::infrastructure::{ClaudeGenerator, HttpAudioFetcher, WhisperTranscriber};
use journal_agent::server::{run_server, AppState};

#[derive(Debug, Parser)]
#[command(name = "journal-agent", about = "Journal transcription and analysis API")]
struct Cli {
    /// Address to bind
    #[arg(long, env = "BIND_ADDR", default_value = "0.0.0.0")]
    bind: String,

    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = 8000)]
    port: u16,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = AppConfig::from_env()?;

    let addr: SocketAddr = format!("{}:{}", cli.bind, cli.port).parse()?;

    // One HTTP client per process, shared by every provider adapter.
    let client = reqwest::Client::new();

    let mut transcriber = WhisperTranscriber::new(client.clone(), config.openai_api_key);
    if let Some(model) = config.whisper_model {
        transcriber = transcriber.with_model(model);
    }

    let mut generator = ClaudeGenerator::new(client.clone(), config.anthropic_api_key);
    if let Some(model) = config.claude_model {
        generator = generator.with_model(model);
    }

    let state = AppState::new(
        TranscribeAudioUseCase::new(Arc::new(HttpAudioFetcher::new(client)), Arc::new(transcriber)),
        RunAnalysisUseCase::new(Arc::new(generator)),
    );

    run_server(state, addr).await
}
