//! Chat-completions adapter for the [`TextGenerator`] port.
//!
//! Speaks the OpenAI `/chat/completions` wire format, which also covers
//! OpenRouter, Ollama, and other compatible endpoints via `base_url`.

use async_trait::async_trait;
use reelbot_application::{GeneratorError, TextGenerator};
use reelbot_domain::{Message, Role};
use serde::Deserialize;
use serde_json::{json, Value};
use std::time::Duration;
use tracing::debug;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

#[derive(Debug, Deserialize)]
struct ChatCompletion {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

/// OpenAI-compatible text generator.
pub struct OpenAiGenerator {
    client: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl OpenAiGenerator {
    pub fn new(
        api_key: impl Into<String>,
        model: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .unwrap_or_default(),
            api_key: api_key.into(),
            model: model.into(),
            base_url: base_url.into(),
        }
    }

    fn wire_messages(messages: &[Message]) -> Vec<Value> {
        messages
            .iter()
            .map(|m| {
                let role = match m.role {
                    Role::System => "system",
                    Role::User => "user",
                    Role::Assistant => "assistant",
                };
                json!({"role": role, "content": m.content})
            })
            .collect()
    }
}

#[async_trait]
impl TextGenerator for OpenAiGenerator {
    async fn complete(
        &self,
        messages: &[Message],
        temperature: f32,
        max_tokens: u32,
    ) -> Result<String, GeneratorError> {
        let body = json!({
            "model": self.model,
            "messages": Self::wire_messages(messages),
            "temperature": temperature,
            "max_tokens": max_tokens,
        });

        debug!(
            "Requesting completion from {} ({} messages)",
            self.model,
            messages.len()
        );

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| GeneratorError::RequestFailed(e.to_string()))?;

        if !response.status().is_success() {
            return Err(GeneratorError::RequestFailed(format!(
                "completion endpoint returned {}",
                response.status()
            )));
        }

        let completion: ChatCompletion = response
            .json()
            .await
            .map_err(|e| GeneratorError::RequestFailed(e.to_string()))?;

        completion
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .filter(|content| !content.is_empty())
            .ok_or(GeneratorError::EmptyCompletion)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_messages_use_lowercase_roles() {
        let wire = OpenAiGenerator::wire_messages(&[
            Message::system("instructions"),
            Message::user("hi"),
            Message::assistant("hello"),
        ]);
        assert_eq!(wire[0]["role"], "system");
        assert_eq!(wire[1]["role"], "user");
        assert_eq!(wire[2]["role"], "assistant");
        assert_eq!(wire[1]["content"], "hi");
    }

    #[test]
    fn test_completion_payload_parses() {
        let json = r#"{
            "id": "chatcmpl-1",
            "choices": [
                {"index": 0, "message": {"role": "assistant", "content": "Sure!"}, "finish_reason": "stop"}
            ],
            "usage": {"prompt_tokens": 10, "completion_tokens": 2}
        }"#;
        let completion: ChatCompletion = serde_json::from_str(json).unwrap();
        assert_eq!(
            completion.choices[0].message.content.as_deref(),
            Some("Sure!")
        );
    }

    #[test]
    fn test_completion_without_choices_parses_empty() {
        let completion: ChatCompletion = serde_json::from_str(r#"{"id": "x"}"#).unwrap();
        assert!(completion.choices.is_empty());
    }
}
