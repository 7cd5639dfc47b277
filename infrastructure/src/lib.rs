//! Infrastructure layer for reelbot
//!
//! Adapters implementing the application-layer ports against real
//! services: TMDb for movie metadata, an OpenAI-compatible chat endpoint
//! for text generation, Twilio for WhatsApp delivery, and a JSON file for
//! the watched list. Plus figment-based configuration loading.

pub mod config;
pub mod openai;
pub mod store;
pub mod tmdb;
pub mod twilio;

pub use config::{ConfigError, ConfigLoader, FileConfig};
pub use openai::OpenAiGenerator;
pub use store::JsonWatchedStore;
pub use tmdb::TmdbProvider;
pub use twilio::TwilioTransport;
