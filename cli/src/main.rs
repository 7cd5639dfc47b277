//! CLI entrypoint for Reelbot
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{bail, Context, Result};
use clap::Parser;
use reelbot_application::{
    ConversationHistory, ConversationalClassifier, HandleMessageUseCase, MessageTransport,
    UnderstandingMode,
};
use reelbot_infrastructure::{
    ConfigLoader, JsonWatchedStore, OpenAiGenerator, TmdbProvider, TwilioTransport,
};
use reelbot_presentation::{ChatRepl, Cli, ConsoleFormatter};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    // Load configuration (files + REELBOT_* environment variables)
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())?
    };

    // CLI flag overrides the configured engine
    let mode: UnderstandingMode = match &cli.engine {
        Some(s) => s
            .parse()
            .map_err(|e: String| anyhow::anyhow!(e))
            .context("invalid --engine value")?,
        None => config.engine.parse_understanding()?,
    };

    // Fail fast before any network calls
    config.validate(mode, cli.to.is_some())?;

    info!("Starting Reelbot ({} engine)", mode);

    // === Dependency Injection ===
    let provider = Arc::new(TmdbProvider::new(
        &config.tmdb.api_key,
        &config.tmdb.base_url,
    ));

    let store_path = ConfigLoader::watched_store_path(&config);
    let store = Arc::new(JsonWatchedStore::open(&store_path)?);
    info!("Watched list at {}", store_path.display());

    let mut use_case = HandleMessageUseCase::new(provider, store);

    let mut classifier = None;
    if mode == UnderstandingMode::Model {
        let generator = Arc::new(OpenAiGenerator::new(
            &config.openai.api_key,
            &config.openai.model,
            &config.openai.base_url,
        ));
        let history = Arc::new(ConversationHistory::new());
        let shared = Arc::new(ConversationalClassifier::new(generator, history));
        use_case = use_case.with_classifier(shared.clone());
        classifier = Some(shared);
    }

    let use_case = Arc::new(use_case);

    // Chat mode
    if cli.chat {
        if cli.to.is_some() {
            bail!("--to only applies to single-message mode");
        }

        let mut repl = ChatRepl::new(use_case, &cli.user);
        if let Some(classifier) = classifier {
            repl = repl.with_classifier(classifier);
        }

        repl.run().await?;
        return Ok(());
    }

    // Single message mode - a message is required
    let message = match cli.message {
        Some(m) => m,
        None => bail!("A message is required. Use --chat for interactive mode."),
    };

    let reply = use_case.handle(&message, &cli.user).await;

    println!("{}", ConsoleFormatter::format(&reply));

    // Optionally mirror the reply over WhatsApp
    if let Some(to) = &cli.to {
        let transport = TwilioTransport::new(
            &config.twilio.account_sid,
            &config.twilio.auth_token,
            &config.twilio.from_number,
        );
        transport
            .send(to, &reply.text)
            .await
            .context("failed to deliver reply")?;
        info!("Reply delivered to {}", to);
    }

    Ok(())
}
