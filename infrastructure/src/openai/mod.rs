//! OpenAI-compatible text generation adapter

pub mod generator;

pub use generator::OpenAiGenerator;
