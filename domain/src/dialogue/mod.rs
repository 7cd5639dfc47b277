//! Message understanding and response composition.
//!
//! The dialogue module covers the full path from raw message text to
//! user-facing reply:
//!
//! - [`intent`]: the closed set of recognized intents
//! - [`extraction`]: rule-based intent/entity extraction
//! - [`classification`]: parsing of model-produced structured output
//! - [`sentiment`]: lexicon-based sentiment scoring
//! - [`composer`]: deterministic templates and generation prompts

pub mod classification;
pub mod composer;
pub mod extraction;
pub mod intent;
pub mod sentiment;
