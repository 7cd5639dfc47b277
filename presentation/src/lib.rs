//! Presentation layer for reelbot
//!
//! CLI argument parsing, the interactive chat REPL, and reply formatting.

pub mod chat;
pub mod cli;
pub mod output;

pub use chat::ChatRepl;
pub use cli::Cli;
pub use output::ConsoleFormatter;
