//! Ports: interfaces the application layer needs from the outside world.
//!
//! Implementations (adapters) live in the infrastructure layer. Every port
//! is an `async_trait` object so use cases can be wired with `Arc<dyn _>`.

pub mod message_transport;
pub mod movie_provider;
pub mod text_generator;
pub mod watched_store;
