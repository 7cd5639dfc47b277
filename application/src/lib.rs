//! Application layer for reelbot
//!
//! Use cases and ports. The dialogue controller
//! ([`HandleMessageUseCase`]) orchestrates the movie provider, watched
//! store, and (optionally) the conversational classifier to turn one
//! inbound message into one reply. Adapters for the ports live in the
//! infrastructure layer.

pub mod classifier;
pub mod config;
pub mod history;
pub mod ports;
pub mod use_cases;

// Re-export the public surface
pub use classifier::ConversationalClassifier;
pub use config::UnderstandingMode;
pub use history::ConversationHistory;
pub use ports::{
    message_transport::{MessageTransport, TransportError},
    movie_provider::{MovieProvider, ProviderError},
    text_generator::{GeneratorError, TextGenerator},
    watched_store::{StoreError, WatchedStore},
};
pub use use_cases::handle_message::{HandleMessageUseCase, Reply};
