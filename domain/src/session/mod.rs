//! Conversation entities

pub mod entities;

pub use entities::{Message, Role};
