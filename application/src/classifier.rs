//! Model-assisted message understanding.
//!
//! The [`ConversationalClassifier`] owns a keyed history store and a
//! [`TextGenerator`] port. `classify` extracts a structured
//! (intent, title, context) verdict with low-randomness settings;
//! `generate` produces the final user-facing wording with
//! higher-randomness settings. Both record their turns in history, and
//! neither ever returns an error to the caller: provider failures and
//! malformed output degrade to an unknown verdict or a fixed apology.

use crate::history::ConversationHistory;
use crate::ports::text_generator::TextGenerator;
use reelbot_domain::{parse_classification, ClassifiedMessage, ConversationContext, Message};
use std::sync::Arc;
use tracing::{debug, warn};

/// Low randomness for classification: structured output wants determinism.
const CLASSIFY_TEMPERATURE: f32 = 0.3;
const CLASSIFY_MAX_TOKENS: u32 = 150;

/// Higher randomness for reply generation: variety reads better in chat.
const GENERATE_TEMPERATURE: f32 = 0.7;
const GENERATE_MAX_TOKENS: u32 = 300;

const APOLOGY: &str = "I'm having trouble generating a response right now. Please try again later.";

const CLASSIFY_INSTRUCTION: &str = "\
You are a movie recommendation assistant. Your job is to:
1. Understand what the user is asking about movies
2. Extract the intent of their message (get_info, mark_watched, help, list_watched, or unknown)
3. Extract any movie titles mentioned
4. Provide additional context that might be helpful

Respond in JSON format with the following structure:
{
    \"intent\": \"get_info|mark_watched|help|list_watched|unknown\",
    \"movie_title\": \"extracted movie title or null if none\",
    \"context\": {
        \"additional_info\": \"any additional information extracted\",
        \"sentiment\": \"positive|negative|neutral\",
        \"confidence\": 0.0-1.0
    }
}";

/// Conversation-aware classifier and reply generator.
pub struct ConversationalClassifier {
    generator: Arc<dyn TextGenerator>,
    history: Arc<ConversationHistory>,
}

impl ConversationalClassifier {
    pub fn new(generator: Arc<dyn TextGenerator>, history: Arc<ConversationHistory>) -> Self {
        Self { generator, history }
    }

    /// Classify a message into (intent, title, context).
    ///
    /// The request is the fixed instruction plus the trailing history
    /// window, which includes the just-recorded user turn. Failures of any
    /// kind produce an unknown verdict with an error marker in the
    /// context; they never propagate.
    pub async fn classify(&self, message: &str, user_id: &str) -> ClassifiedMessage {
        let window = self
            .history
            .push_and_window(user_id, Message::user(message))
            .await;

        let mut request = vec![Message::system(CLASSIFY_INSTRUCTION)];
        request.extend(window);

        let raw = match self
            .generator
            .complete(&request, CLASSIFY_TEMPERATURE, CLASSIFY_MAX_TOKENS)
            .await
        {
            Ok(raw) => raw,
            Err(e) => {
                warn!("Classification call failed: {}", e);
                return ClassifiedMessage::unknown(e.to_string());
            }
        };

        self.history
            .push(user_id, Message::assistant(raw.clone()))
            .await;

        match parse_classification(&raw) {
            Some(classified) => {
                debug!(
                    "Classified as {} (title: {:?})",
                    classified.intent, classified.movie_title
                );
                classified
            }
            None => {
                warn!("Classifier returned non-conforming output");
                ClassifiedMessage::unknown("Failed to parse response")
            }
        }
    }

    /// Generate a conversational reply from a composed prompt.
    ///
    /// Returns the model's text verbatim, or a fixed apology on failure.
    pub async fn generate(
        &self,
        prompt: &str,
        user_id: &str,
        context: &ConversationContext,
    ) -> String {
        let context_json =
            serde_json::to_string(context).unwrap_or_else(|_| "{}".to_string());
        let system = format!(
            "You are a friendly movie recommendation assistant on WhatsApp.\n\
             Context: {}\n\n\
             Keep your responses conversational, helpful, and concise (suitable for WhatsApp).\n\
             Focus on providing accurate movie information and personalized recommendations.",
            context_json
        );

        let mut request = vec![Message::system(system)];
        request.extend(self.history.window(user_id).await);
        request.push(Message::user(prompt));

        self.history.push(user_id, Message::user(prompt)).await;

        match self
            .generator
            .complete(&request, GENERATE_TEMPERATURE, GENERATE_MAX_TOKENS)
            .await
        {
            Ok(text) => {
                self.history
                    .push(user_id, Message::assistant(text.clone()))
                    .await;
                text
            }
            Err(e) => {
                warn!("Reply generation failed: {}", e);
                APOLOGY.to_string()
            }
        }
    }

    /// Empty a user's conversation history.
    pub async fn clear(&self, user_id: &str) {
        self.history.clear(user_id).await;
    }
}
