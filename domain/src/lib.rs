//! Domain layer for reelbot
//!
//! This crate contains the core business logic of the movie assistant:
//! intent recognition, conversation entities, movie records, and response
//! composition. It has no dependencies on infrastructure or presentation
//! concerns and performs no I/O.
//!
//! # Core Concepts
//!
//! ## Intent
//!
//! Every inbound chat message is reduced to one of a closed set of five
//! [`Intent`]s. Two extraction strategies exist:
//!
//! - **Rule-based**: an ordered regex table with a heuristic fallback
//!   ([`dialogue::extraction`])
//! - **Model-assisted**: structured output parsed from an LLM response
//!   ([`dialogue::classification`])
//!
//! ## Composition
//!
//! [`dialogue::composer`] renders backend results (movie records,
//! recommendation lists, watched counts) into user-facing text, or into
//! natural-language generation prompts for the model-assisted path.

pub mod core;
pub mod dialogue;
pub mod movie;
pub mod session;

// Re-export commonly used types
pub use crate::core::error::DomainError;
pub use dialogue::{
    classification::{parse_classification, ClassifiedMessage, ConversationContext},
    composer,
    extraction::{extract, Extraction},
    intent::Intent,
    sentiment::score_sentiment,
};
pub use movie::{rank_similar, MovieRecord};
pub use session::{Message, Role};
