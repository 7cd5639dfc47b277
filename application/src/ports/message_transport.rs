//! Outbound message transport port.

use async_trait::async_trait;
use thiserror::Error;

/// Errors from the outbound messaging channel.
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("Delivery failed: {0}")]
    DeliveryFailed(String),
}

/// Delivery of a composed reply over a messaging channel.
///
/// The dialogue controller never calls this itself; delivery is the
/// caller's concern once it holds the reply text.
#[async_trait]
pub trait MessageTransport: Send + Sync {
    async fn send(&self, recipient: &str, body: &str) -> Result<(), TransportError>;
}
