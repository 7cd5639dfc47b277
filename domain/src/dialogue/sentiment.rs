//! Lexicon-based sentiment scoring.
//!
//! A deliberately small positive/negative word count, enough to tag whether
//! the user sounded pleased or annoyed about a movie. Scores land in
//! [-1.0, 1.0]; a message with no lexicon hit is neutral (0.0).

const POSITIVE_WORDS: &[&str] = &[
    "good", "great", "excellent", "amazing", "love", "enjoy", "like", "best", "favorite",
    "recommend",
];

const NEGATIVE_WORDS: &[&str] = &[
    "bad", "terrible", "awful", "horrible", "hate", "dislike", "worst", "boring", "waste",
];

/// Score a message from -1.0 (negative) to 1.0 (positive).
pub fn score_sentiment(message: &str) -> f64 {
    let lowered = message.to_lowercase();
    let mut positive = 0i32;
    let mut negative = 0i32;

    for token in lowered.split_whitespace() {
        let word = token.trim_matches(|c: char| !c.is_alphanumeric());
        if POSITIVE_WORDS.contains(&word) {
            positive += 1;
        } else if NEGATIVE_WORDS.contains(&word) {
            negative += 1;
        }
    }

    let total = positive + negative;
    if total == 0 {
        return 0.0;
    }
    f64::from(positive - negative) / f64::from(total)
}

/// Map a numeric score onto the classifier's sentiment vocabulary.
pub fn sentiment_label(score: f64) -> &'static str {
    if score > 0.0 {
        "positive"
    } else if score < 0.0 {
        "negative"
    } else {
        "neutral"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_message() {
        let score = score_sentiment("I love this movie, it was amazing");
        assert_eq!(score, 1.0);
        assert_eq!(sentiment_label(score), "positive");
    }

    #[test]
    fn test_negative_message() {
        let score = score_sentiment("terrible film, total waste");
        assert_eq!(score, -1.0);
        assert_eq!(sentiment_label(score), "negative");
    }

    #[test]
    fn test_mixed_message() {
        // one positive, one negative
        let score = score_sentiment("good plot but boring pacing");
        assert_eq!(score, 0.0);
        assert_eq!(sentiment_label(score), "neutral");
    }

    #[test]
    fn test_no_lexicon_hits_is_neutral() {
        assert_eq!(score_sentiment("tell me about inception"), 0.0);
    }

    #[test]
    fn test_punctuation_does_not_hide_words() {
        assert!(score_sentiment("loved it? no. it was awful!") < 0.0);
    }
}
