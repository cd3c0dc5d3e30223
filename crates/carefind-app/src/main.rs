//! CareFind application binary - composition root.
//!
//! 1. Parse CLI flags and load configuration from TOML
//! 2. Build the hospital directory (built-in seed or file)
//! 3. Construct the conversation engine and a chat session
//! 4. Run the interactive loop over stdin until EOF or `/quit`

mod cli;
mod render;
mod repl;

use std::sync::Arc;

use clap::Parser;

use carefind_chat::{ChatSession, ConversationEngine, RenderEvent, Renderer};
use carefind_core::{CareFindConfig, Directory};

use cli::CliArgs;
use render::{JsonRenderer, TerminalRenderer};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliArgs::parse();

    // Config is read before tracing exists, so load failures are reported
    // once the subscriber is up.
    let config_file = args.resolve_config_path();
    let (mut config, load_error) = match CareFindConfig::load(&config_file) {
        Ok(config) => (config, None),
        Err(e) => (CareFindConfig::default(), Some(e)),
    };
    args.apply_overrides(&mut config);

    // Tracing goes to stderr; stdout carries the conversation.
    let log_level = args.resolve_log_level(&config);
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("Starting CareFind v{}", env!("CARGO_PKG_VERSION"));
    match load_error {
        None => tracing::info!("Configuration loaded from {}", config_file.display()),
        // A file the user pointed at should exist and parse.
        Some(e) if args.config_path_is_explicit() => tracing::warn!(
            "Failed to load config from {}: {}. Using defaults.",
            config_file.display(),
            e
        ),
        Some(e) => tracing::info!(
            "No usable config at {} ({}). Using defaults.",
            config_file.display(),
            e
        ),
    }

    let directory = match config.directory.path {
        Some(ref path) => Directory::load(path)?,
        None => Directory::seed(),
    };
    tracing::info!(hospitals = directory.len(), "Directory ready");

    let engine = Arc::new(ConversationEngine::with_seed(
        Arc::new(directory),
        config.chat.seed,
    ));

    let renderer: Box<dyn Renderer> = if args.json {
        Box::new(JsonRenderer::new(std::io::stdout()))
    } else {
        Box::new(TerminalRenderer::new(std::io::stdout()))
    };
    let mut session = ChatSession::from_config(engine, renderer, &config.chat);
    if !args.json {
        session
            .renderer_mut()
            .render(RenderEvent::Notice(repl::HELP));
    }

    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    repl::run(&mut session, stdin).await?;

    Ok(())
}
