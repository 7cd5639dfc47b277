//! Rule-based intent and entity extraction.
//!
//! The extractor evaluates an ordered table of `(Intent, [pattern])` groups
//! against the normalized message. Iteration order is the tie-break policy:
//! the first pattern that matches wins, even when a later intent would also
//! match. If a pattern carries a capture group, its trimmed content becomes
//! the entity (the movie title guess); the entity is never validated against
//! the movie provider here.
//!
//! When no pattern matches, a title heuristic takes over: the longest
//! capitalized span in the raw message, else the longest determiner-led
//! noun phrase, each returned under [`Intent::GetInfo`]. A message that
//! yields neither is [`Intent::Unknown`] with no entity. Extraction never
//! fails; absence of an entity is an expected outcome.

use crate::dialogue::intent::Intent;
use regex::Regex;
use std::sync::LazyLock;

/// Result of running the extractor over one message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    pub intent: Intent,
    /// Free-text movie title guess, if one was found.
    pub entity: Option<String>,
}

impl Extraction {
    fn new(intent: Intent, entity: Option<String>) -> Self {
        Self { intent, entity }
    }
}

/// The prioritized pattern table.
///
/// Group order (get_info, mark_watched, help, list_watched) and pattern
/// order within each group are load-bearing: matching stops at the first
/// hit. Patterns are unanchored, so they match anywhere in the message.
static INTENT_PATTERNS: LazyLock<Vec<(Intent, Vec<Regex>)>> = LazyLock::new(|| {
    let compile = |patterns: &[&str]| -> Vec<Regex> {
        patterns
            .iter()
            .map(|p| Regex::new(p).expect("intent pattern must compile"))
            .collect()
    };

    vec![
        (
            Intent::GetInfo,
            compile(&[
                r"(?:about|info|information|tell me about|what do you know about|details on|score of|rating of|how good is)\s+(.+)",
                r"(?:how is|how was|is|was)\s+(.+)(?:\s+any good|\s+worth watching|\s+good)?",
                r"(?:what is|what's)\s+(.+)(?:\s+about|\s+like)?",
                // Catch-all: bare title followed by a recommendation cue.
                r"(.+)(?:\s+worth watching|\s+any good|\s+recommended)",
            ]),
        ),
        (
            Intent::MarkWatched,
            compile(&[
                r"(?:i (?:have )?(?:just |recently )?(?:watched|seen)|i've (?:just |recently )?(?:watched|seen)|seen|watched|completed|finished)\s+(.+)",
                r"(?:i (?:have )?finished|i've finished|done with|completed)\s+(.+)",
                r"(?:add|mark|put)\s+(.+)(?:\s+as watched|\s+to my watched list|\s+to watched list)",
            ]),
        ),
        (
            Intent::Help,
            compile(&[
                r"(?:help|assist|support|how to use|instructions|commands|what can you do|how does this work)",
            ]),
        ),
        (
            Intent::ListWatched,
            compile(&[
                r"(?:list|show|what are|what have i|which) (?:movies have i watched|movies i've watched|my watched movies|my watched list|watched movies)",
            ]),
        ),
    ]
});

/// Extract an intent and optional movie title from a raw message.
pub fn extract(message: &str) -> Extraction {
    let normalized = normalize(message);

    for (intent, patterns) in INTENT_PATTERNS.iter() {
        for pattern in patterns {
            if let Some(caps) = pattern.captures(&normalized) {
                let entity = caps
                    .get(1)
                    .map(|m| m.as_str().trim().to_string())
                    .filter(|s| !s.is_empty());
                return Extraction::new(*intent, entity);
            }
        }
    }

    // No pattern matched; try to pull out something title-shaped.
    if let Some(title) = guess_title(message.trim(), &normalized) {
        return Extraction::new(Intent::GetInfo, Some(title));
    }

    Extraction::new(Intent::Unknown, None)
}

fn normalize(message: &str) -> String {
    message.trim().to_lowercase().replace('\u{2019}', "'")
}

/// Heuristic stand-in for named-entity recognition.
///
/// Movie titles in chat are usually capitalized ("The Dark Knight") or led
/// by a determiner ("the godfather"). Capitalized spans from the raw
/// message take priority; determiner-led phrases from the normalized text
/// are the second try. The longest candidate by character count wins.
fn guess_title(raw: &str, normalized: &str) -> Option<String> {
    if let Some(span) = longest_capitalized_span(raw) {
        return Some(span);
    }
    longest_noun_phrase(normalized)
}

fn longest_capitalized_span(raw: &str) -> Option<String> {
    let mut best: Option<String> = None;
    let mut current: Vec<&str> = Vec::new();

    let mut spans: Vec<Vec<&str>> = Vec::new();
    for token in raw.split_whitespace() {
        let word = token.trim_matches(|c: char| !c.is_alphanumeric());
        let capitalized = word.chars().next().is_some_and(|c| c.is_uppercase());
        if capitalized {
            current.push(word);
        } else if !current.is_empty() {
            spans.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        spans.push(current);
    }

    for span in spans {
        let candidate = span.join(" ");
        if best.as_ref().is_none_or(|b| candidate.len() > b.len()) {
            best = Some(candidate);
        }
    }
    best
}

/// Words that end a determiner-led phrase.
const PHRASE_BREAKERS: &[&str] = &[
    "is", "was", "are", "were", "and", "or", "but", "that", "which", "to", "of", "in", "on",
    "for", "with", "any",
];

fn longest_noun_phrase(normalized: &str) -> Option<String> {
    let tokens: Vec<&str> = normalized.split_whitespace().collect();
    let mut best: Option<String> = None;

    for (i, token) in tokens.iter().enumerate() {
        if !matches!(*token, "the" | "a" | "an") {
            continue;
        }
        let tail: Vec<&str> = tokens[i + 1..]
            .iter()
            .take_while(|t| !PHRASE_BREAKERS.contains(&t.trim_matches(|c: char| !c.is_alphanumeric())))
            .copied()
            .collect();
        if tail.is_empty() {
            continue;
        }
        let phrase = format!("{} {}", token, tail.join(" "));
        let phrase = phrase
            .trim_matches(|c: char| !c.is_alphanumeric())
            .to_string();
        if best.as_ref().is_none_or(|b| phrase.len() > b.len()) {
            best = Some(phrase);
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tell_me_about_extracts_title() {
        let result = extract("Tell me about Inception");
        assert_eq!(result.intent, Intent::GetInfo);
        assert_eq!(result.entity.as_deref(), Some("inception"));
    }

    #[test]
    fn test_score_of_extracts_title() {
        let result = extract("What's the score of Pulp Fiction");
        assert_eq!(result.intent, Intent::GetInfo);
        assert_eq!(result.entity.as_deref(), Some("pulp fiction"));
    }

    #[test]
    fn test_i_watched_marks_watched() {
        let result = extract("I watched Inception");
        assert_eq!(result.intent, Intent::MarkWatched);
        assert_eq!(result.entity.as_deref(), Some("inception"));
    }

    #[test]
    fn test_seen_marks_watched() {
        let result = extract("seen The Godfather");
        assert_eq!(result.intent, Intent::MarkWatched);
        assert_eq!(result.entity.as_deref(), Some("the godfather"));
    }

    #[test]
    fn test_curly_apostrophe_is_normalized() {
        let result = extract("I\u{2019}ve seen Alien");
        assert_eq!(result.intent, Intent::MarkWatched);
        assert_eq!(result.entity.as_deref(), Some("alien"));
    }

    #[test]
    fn test_help_without_entity() {
        let result = extract("help");
        assert_eq!(result.intent, Intent::Help);
        assert_eq!(result.entity, None);
    }

    #[test]
    fn test_list_watched() {
        let result = extract("which movies have i watched");
        assert_eq!(result.intent, Intent::ListWatched);
        assert_eq!(result.entity, None);
    }

    #[test]
    fn test_catch_all_requires_recommendation_cue() {
        let result = extract("Heat any good");
        assert_eq!(result.intent, Intent::GetInfo);
        assert_eq!(result.entity.as_deref(), Some("heat"));
    }

    #[test]
    fn test_catch_all_strips_cue_from_entity() {
        // The trailing cue is consumed by the pattern, not kept as part
        // of the title.
        for (message, expected) in [
            ("heat any good", "heat"),
            ("dune worth watching", "dune"),
            ("blade runner recommended", "blade runner"),
        ] {
            let result = extract(message);
            assert_eq!(result.intent, Intent::GetInfo, "{}", message);
            assert_eq!(result.entity.as_deref(), Some(expected), "{}", message);
        }
    }

    #[test]
    fn test_first_match_wins_over_later_intents() {
        // "tell me about" fires before any mark_watched pattern could.
        let result = extract("tell me about the movies i watched");
        assert_eq!(result.intent, Intent::GetInfo);
        assert_eq!(result.entity.as_deref(), Some("the movies i watched"));
    }

    #[test]
    fn test_capitalized_fallback_assumes_get_info() {
        let result = extract("The Dark Knight");
        assert_eq!(result.intent, Intent::GetInfo);
        assert_eq!(result.entity.as_deref(), Some("The Dark Knight"));
    }

    #[test]
    fn test_determiner_phrase_fallback() {
        let result = extract("the godfather");
        assert_eq!(result.intent, Intent::GetInfo);
        assert_eq!(result.entity.as_deref(), Some("the godfather"));
    }

    #[test]
    fn test_junk_is_unknown() {
        let result = extract("xyzzy nonsense");
        assert_eq!(result.intent, Intent::Unknown);
        assert_eq!(result.entity, None);
    }

    #[test]
    fn test_empty_message_is_unknown() {
        let result = extract("   ");
        assert_eq!(result.intent, Intent::Unknown);
        assert_eq!(result.entity, None);
    }
}
