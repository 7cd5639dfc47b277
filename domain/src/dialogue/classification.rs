//! Parsing of model-produced classification output.
//!
//! The conversational classifier asks the text-generation model for a JSON
//! object of the shape:
//!
//! ```json
//! {
//!   "intent": "get_info|mark_watched|help|list_watched|unknown",
//!   "movie_title": "title or null",
//!   "context": {
//!     "additional_info": "...",
//!     "sentiment": "positive|negative|neutral",
//!     "confidence": 0.0
//!   }
//! }
//! ```
//!
//! Models wrap JSON in prose or code fences often enough that the parser
//! scans for the outermost braces instead of trusting the whole response.
//! Parsing is pure text work; malformed output is a `None`, never an error.

use crate::dialogue::intent::Intent;
use serde::{Deserialize, Serialize};

/// Context the classifier attaches to a message.
///
/// Treated as an opaque annotation: consumed only when building generation
/// prompts, never validated beyond its shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversationContext {
    pub additional_info: Option<String>,
    pub sentiment: Option<String>,
    pub confidence: Option<f64>,
    /// Marker set when classification fell back after a provider or parse
    /// failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ConversationContext {
    /// Context carrying only an error marker, used for fallback verdicts.
    pub fn error(reason: impl Into<String>) -> Self {
        Self {
            error: Some(reason.into()),
            ..Self::default()
        }
    }
}

/// A successfully classified message.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifiedMessage {
    pub intent: Intent,
    pub movie_title: Option<String>,
    pub context: ConversationContext,
}

impl ClassifiedMessage {
    /// The fallback verdict for malformed output or provider failure.
    pub fn unknown(reason: impl Into<String>) -> Self {
        Self {
            intent: Intent::Unknown,
            movie_title: None,
            context: ConversationContext::error(reason),
        }
    }
}

#[derive(Deserialize)]
struct RawClassification {
    #[serde(default)]
    intent: Option<String>,
    #[serde(default)]
    movie_title: Option<String>,
    #[serde(default)]
    context: ConversationContext,
}

/// Parse a model response into a [`ClassifiedMessage`].
///
/// Returns `None` when no JSON object can be located or deserialized.
/// An unrecognized or missing `intent` field degrades to
/// [`Intent::Unknown`] rather than failing: the shape was honored even if
/// the value was not.
pub fn parse_classification(response: &str) -> Option<ClassifiedMessage> {
    let start = response.find('{')?;
    let end = response[start..].rfind('}')?;
    let json_str = &response[start..start + end + 1];

    let raw: RawClassification = serde_json::from_str(json_str).ok()?;

    let intent = raw
        .intent
        .as_deref()
        .and_then(|s| s.parse::<Intent>().ok())
        .unwrap_or(Intent::Unknown);

    // Models sometimes send the literal string "null" instead of null.
    let movie_title = raw
        .movie_title
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty() && t != "null");

    Some(ClassifiedMessage {
        intent,
        movie_title,
        context: raw.context,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_well_formed_response() {
        let response = r#"{"intent": "get_info", "movie_title": "Inception", "context": {"additional_info": "user asked for details", "sentiment": "neutral", "confidence": 0.92}}"#;
        let parsed = parse_classification(response).unwrap();
        assert_eq!(parsed.intent, Intent::GetInfo);
        assert_eq!(parsed.movie_title.as_deref(), Some("Inception"));
        assert_eq!(parsed.context.sentiment.as_deref(), Some("neutral"));
        assert_eq!(parsed.context.confidence, Some(0.92));
    }

    #[test]
    fn test_parses_json_inside_code_fence() {
        let response = "Here you go:\n```json\n{\"intent\": \"help\", \"movie_title\": null, \"context\": {}}\n```";
        let parsed = parse_classification(response).unwrap();
        assert_eq!(parsed.intent, Intent::Help);
        assert_eq!(parsed.movie_title, None);
    }

    #[test]
    fn test_literal_null_string_title_is_dropped() {
        let response = r#"{"intent": "list_watched", "movie_title": "null", "context": {}}"#;
        let parsed = parse_classification(response).unwrap();
        assert_eq!(parsed.movie_title, None);
    }

    #[test]
    fn test_unrecognized_intent_degrades_to_unknown() {
        let response = r#"{"intent": "recommend", "movie_title": "Heat", "context": {}}"#;
        let parsed = parse_classification(response).unwrap();
        assert_eq!(parsed.intent, Intent::Unknown);
        assert_eq!(parsed.movie_title.as_deref(), Some("Heat"));
    }

    #[test]
    fn test_missing_context_defaults() {
        let response = r#"{"intent": "get_info", "movie_title": "Alien"}"#;
        let parsed = parse_classification(response).unwrap();
        assert_eq!(parsed.context, ConversationContext::default());
    }

    #[test]
    fn test_prose_without_json_is_none() {
        assert!(parse_classification("I think you want movie info!").is_none());
    }

    #[test]
    fn test_broken_json_is_none() {
        assert!(parse_classification(r#"{"intent": "get_info", "#).is_none());
    }
}
