//! Text generation port.

use async_trait::async_trait;
use reelbot_domain::Message;
use thiserror::Error;

/// Errors from the text-generation provider.
#[derive(Error, Debug)]
pub enum GeneratorError {
    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Empty completion")]
    EmptyCompletion,
}

/// A chat-completion style text generator.
///
/// `messages` is the full ordered request including any system
/// instruction; the implementation must not reorder or window it. The
/// caller owns history management.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn complete(
        &self,
        messages: &[Message],
        temperature: f32,
        max_tokens: u32,
    ) -> Result<String, GeneratorError>;
}
