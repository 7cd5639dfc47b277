//! Twilio adapter for the [`MessageTransport`] port.
//!
//! Sends WhatsApp messages through the Twilio Messages API. Both ends of
//! the conversation are addressed as `whatsapp:<e164-number>` on the wire;
//! callers may pass numbers with or without the prefix.

use async_trait::async_trait;
use reelbot_application::{MessageTransport, TransportError};
use std::time::Duration;
use tracing::{debug, warn};

const TWILIO_API_BASE: &str = "https://api.twilio.com/2010-04-01";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Twilio-backed WhatsApp transport.
pub struct TwilioTransport {
    client: reqwest::Client,
    account_sid: String,
    auth_token: String,
    from_number: String,
}

impl TwilioTransport {
    pub fn new(
        account_sid: impl Into<String>,
        auth_token: impl Into<String>,
        from_number: impl Into<String>,
    ) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .unwrap_or_default(),
            account_sid: account_sid.into(),
            auth_token: auth_token.into(),
            from_number: from_number.into(),
        }
    }

    fn whatsapp_address(number: &str) -> String {
        if number.starts_with("whatsapp:") {
            number.to_string()
        } else {
            format!("whatsapp:{}", number)
        }
    }
}

#[async_trait]
impl MessageTransport for TwilioTransport {
    async fn send(&self, recipient: &str, body: &str) -> Result<(), TransportError> {
        let url = format!(
            "{}/Accounts/{}/Messages.json",
            TWILIO_API_BASE, self.account_sid
        );
        let form = [
            ("From", Self::whatsapp_address(&self.from_number)),
            ("To", Self::whatsapp_address(recipient)),
            ("Body", body.to_string()),
        ];

        let response = self
            .client
            .post(&url)
            .basic_auth(&self.account_sid, Some(&self.auth_token))
            .form(&form)
            .send()
            .await
            .map_err(|e| TransportError::DeliveryFailed(e.to_string()))?;

        if !response.status().is_success() {
            warn!("Twilio rejected message: {}", response.status());
            return Err(TransportError::DeliveryFailed(format!(
                "Twilio returned {}",
                response.status()
            )));
        }

        debug!("Delivered WhatsApp message to {}", recipient);
        Ok(())
    }
}
