//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for reelbot
#[derive(Parser, Debug)]
#[command(name = "reelbot")]
#[command(author, version, about = "Movie assistant - ask about movies, track what you've watched")]
#[command(long_about = r#"
Reelbot answers questions about movies, keeps a per-user watched list, and
recommends similar titles. Messages are understood either by a rule-based
extractor (default) or by an LLM classifier (--engine model).

Configuration files are loaded from (in priority order):
1. REELBOT_* environment variables  (e.g. REELBOT_TMDB__API_KEY)
2. --config <path>                  Explicit config file
3. ./reelbot.toml                   Project-level config
4. ~/.config/reelbot/config.toml    Global config

Example:
  reelbot "Tell me about Inception"
  reelbot --user dani "I watched The Godfather"
  reelbot --chat
  reelbot --to +15550001111 "Tell me about Dune"
"#)]
pub struct Cli {
    /// The message to handle (not required in chat mode)
    pub message: Option<String>,

    /// Start interactive chat mode
    #[arg(short, long)]
    pub chat: bool,

    /// User identifier for the watched list and conversation history
    #[arg(short, long, default_value = "local")]
    pub user: String,

    /// Understanding engine: "rules" or "model"
    #[arg(short, long, value_name = "ENGINE")]
    pub engine: Option<String>,

    /// Also deliver the reply to this WhatsApp number via Twilio
    #[arg(long, value_name = "NUMBER")]
    pub to: Option<String>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_message_parse() {
        let cli = Cli::parse_from(["reelbot", "Tell me about Inception"]);
        assert_eq!(cli.message.as_deref(), Some("Tell me about Inception"));
        assert_eq!(cli.user, "local");
        assert!(!cli.chat);
    }

    #[test]
    fn test_chat_mode_with_engine() {
        let cli = Cli::parse_from(["reelbot", "--chat", "--engine", "model", "-vv"]);
        assert!(cli.chat);
        assert_eq!(cli.engine.as_deref(), Some("model"));
        assert_eq!(cli.verbose, 2);
    }
}
