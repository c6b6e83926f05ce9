//! Main Entrypoint for the Math Tutor
//!
//! This binary is responsible for:
//! 1. Parsing command-line arguments.
//! 2. Loading configuration from the environment, refusing to start without credentials.
//! 3. Initializing logging.
//! 4. Building the completion backend for the configured provider.
//! 5. Running the interactive session on stdin/stdout.

use anyhow::Context;
use async_openai::config::OpenAIConfig;
use clap::Parser;
use std::sync::Arc;
use tokio::io::BufReader;
use tracing::info;
use tracing_subscriber::EnvFilter;
use tutor_core::{UserProfile, completion::OpenAICompatibleBackend};
use tutor_service::{config::Config, console::Console};

/// Interactive math tutor that adapts its explanations to the learner's level.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Start directly with this profile (early-years, elementary or secondary).
    #[arg(long)]
    profile: Option<UserProfile>,

    /// Chat model to use, overriding CHAT_MODEL.
    #[arg(long)]
    model: Option<String>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // --- 1. Load Configuration ---
    let mut config = Config::from_env()
        .context("Failed to load configuration. Set the API key for your provider and retry")?;
    if let Some(model) = args.model {
        config.chat_model = model;
    }

    // --- 2. Initialize Logging ---
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.log_filter))
        .with_timer(tracing_subscriber::fmt::time::ChronoLocal::rfc_3339())
        .with_writer(std::io::stderr)
        .init();
    info!("Configuration loaded. Initializing completion backend...");

    // --- 3. Initialize Completion Backend ---
    let api_key = config
        .api_key()
        .context("API key missing for the configured provider")?;
    let openai_config = OpenAIConfig::new()
        .with_api_key(api_key)
        .with_api_base(config.provider.api_base());
    let backend = OpenAICompatibleBackend::new(openai_config, config.chat_model.clone())
        .with_timeout(config.request_timeout)
        .context("Failed to build HTTP client")?;

    info!(
        provider = ?config.provider,
        model = %config.chat_model,
        timeout_secs = config.request_timeout.as_secs(),
        "Backend configured. Starting session..."
    );

    // --- 4. Run Session ---
    let mut console = Console::new(BufReader::new(tokio::io::stdin()), tokio::io::stdout());
    console
        .run_session(Arc::new(backend), args.profile)
        .await
        .context("Console I/O failed")?;

    info!("Session ended.");
    Ok(())
}
