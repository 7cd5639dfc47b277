//! Handle Message use case: the dialogue controller.
//!
//! Maps one inbound `(message, user_id)` pair onto a fixed action table
//! and composes a [`Reply`]. The understanding path (rule table or
//! conversational classifier) is fixed at construction; the backend action
//! table is identical for both paths, but the model path routes the
//! aggregated results through prompt construction and the classifier's
//! `generate` call instead of rendering templates directly.
//!
//! Every failure below this layer is absorbed into a `success = false`
//! reply; callers only inspect the boolean.

use crate::classifier::ConversationalClassifier;
use crate::config::UnderstandingMode;
use crate::ports::movie_provider::MovieProvider;
use crate::ports::watched_store::WatchedStore;
use reelbot_domain::composer::{self, MAX_LIST_ENTRIES};
use reelbot_domain::core::util::truncate_str;
use reelbot_domain::dialogue::sentiment::sentiment_label;
use reelbot_domain::{extract, score_sentiment, ConversationContext, Intent, MovieRecord};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Minimum vote average for similar titles on an info lookup.
const INFO_MIN_SCORE: f64 = 7.0;

/// Minimum vote average for recommendations after marking watched.
const WATCHED_MIN_SCORE: f64 = 7.5;

/// Transport-level decoration stripped from inbound user identifiers.
const CHANNEL_PREFIX: &str = "whatsapp:";

/// The controller's sole output contract, for every intent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub success: bool,
}

impl Reply {
    fn ok(text: String) -> Self {
        Self {
            text,
            success: true,
        }
    }

    fn fail(text: String) -> Self {
        Self {
            text,
            success: false,
        }
    }
}

/// What one intent handler produced: a rendered reply for template mode
/// and the matching generation prompt for the model path.
struct Outcome {
    reply: Reply,
    prompt: Option<String>,
}

impl Outcome {
    fn templated(reply: Reply) -> Self {
        Self {
            reply,
            prompt: None,
        }
    }

    fn with_prompt(reply: Reply, prompt: String) -> Self {
        Self {
            reply,
            prompt: Some(prompt),
        }
    }
}

/// Dialogue controller.
pub struct HandleMessageUseCase {
    provider: Arc<dyn MovieProvider>,
    store: Arc<dyn WatchedStore>,
    mode: UnderstandingMode,
    classifier: Option<Arc<ConversationalClassifier>>,
}

impl HandleMessageUseCase {
    /// Rule-based controller: regex extraction, template replies.
    pub fn new(provider: Arc<dyn MovieProvider>, store: Arc<dyn WatchedStore>) -> Self {
        Self {
            provider,
            store,
            mode: UnderstandingMode::Rules,
            classifier: None,
        }
    }

    /// Switch to the model-assisted path. Classification and final wording
    /// both go through the given classifier.
    pub fn with_classifier(mut self, classifier: Arc<ConversationalClassifier>) -> Self {
        self.mode = UnderstandingMode::Model;
        self.classifier = Some(classifier);
        self
    }

    pub fn mode(&self) -> UnderstandingMode {
        self.mode
    }

    /// Handle one inbound message and compose the reply.
    pub async fn handle(&self, message: &str, user_id: &str) -> Reply {
        let user_id = user_id.strip_prefix(CHANNEL_PREFIX).unwrap_or(user_id);
        debug!(
            "Processing message '{}' from {}",
            truncate_str(message, 80),
            user_id
        );

        let (intent, entity, context) = match (&self.mode, &self.classifier) {
            (UnderstandingMode::Model, Some(classifier)) => {
                let verdict = classifier.classify(message, user_id).await;
                (verdict.intent, verdict.movie_title, verdict.context)
            }
            _ => {
                let extraction = extract(message);
                let sentiment = sentiment_label(score_sentiment(message));
                debug!("Message sentiment: {}", sentiment);
                let context = ConversationContext {
                    sentiment: Some(sentiment.to_string()),
                    ..ConversationContext::default()
                };
                (extraction.intent, extraction.entity, context)
            }
        };
        info!("Detected intent: {} (entity: {:?})", intent, entity);

        // An actionable intent without an entity is guidance, not a crash,
        // and must not touch any backend collaborator.
        if intent.requires_entity() && entity.is_none() {
            return Reply::fail(composer::missing_entity_response());
        }

        let outcome = match intent {
            Intent::GetInfo => {
                self.handle_info(entity.as_deref().unwrap_or_default()).await
            }
            Intent::MarkWatched => {
                self.handle_mark_watched(entity.as_deref().unwrap_or_default(), user_id)
                    .await
            }
            Intent::Help => Outcome::with_prompt(
                Reply::ok(composer::help_response()),
                composer::help_prompt(),
            ),
            Intent::ListWatched => self.handle_list_watched(user_id).await,
            Intent::Unknown => Outcome::templated(Reply::fail(composer::unknown_response())),
        };

        self.finish(outcome, user_id, &context).await
    }

    /// Render the outcome: template text as-is, or reworded through the
    /// classifier when the model path is active and a prompt exists.
    async fn finish(&self, outcome: Outcome, user_id: &str, context: &ConversationContext) -> Reply {
        if let (UnderstandingMode::Model, Some(classifier), Some(prompt)) =
            (&self.mode, &self.classifier, &outcome.prompt)
        {
            let text = classifier.generate(prompt, user_id, context).await;
            return Reply {
                text,
                success: outcome.reply.success,
            };
        }
        outcome.reply
    }

    async fn handle_info(&self, entity: &str) -> Outcome {
        let movie = match self.provider.search(entity).await {
            Ok(Some(movie)) => movie,
            Ok(None) => {
                return Outcome::with_prompt(
                    Reply::fail(composer::info_not_found_response(entity)),
                    composer::not_found_prompt(entity),
                );
            }
            Err(e) => {
                warn!("Movie search failed: {}", e);
                return Outcome::templated(Reply::fail(composer::provider_error_response()));
            }
        };

        let similar = self.similar_or_empty(movie.id, INFO_MIN_SCORE).await;
        Outcome::with_prompt(
            Reply::ok(composer::info_response(&movie, &similar)),
            composer::info_prompt(&movie, &similar),
        )
    }

    async fn handle_mark_watched(&self, entity: &str, user_id: &str) -> Outcome {
        let movie = match self.provider.search(entity).await {
            Ok(Some(movie)) => movie,
            Ok(None) => {
                return Outcome::with_prompt(
                    Reply::fail(composer::watch_not_found_response(entity)),
                    composer::not_found_prompt(entity),
                );
            }
            Err(e) => {
                warn!("Movie search failed: {}", e);
                return Outcome::templated(Reply::fail(composer::provider_error_response()));
            }
        };

        if self.is_watched_or_false(user_id, movie.id).await {
            return Outcome::with_prompt(
                Reply::ok(composer::already_watched_response(&movie.title)),
                composer::already_watched_prompt(&movie.title),
            );
        }

        if let Err(e) = self.store.add(user_id, movie.id).await {
            warn!("Failed to persist watched movie: {}", e);
            return Outcome::templated(Reply::fail(composer::store_error_response()));
        }

        let similar = self.similar_or_empty(movie.id, WATCHED_MIN_SCORE).await;
        let mut unwatched = Vec::with_capacity(similar.len());
        for candidate in similar {
            if !self.is_watched_or_false(user_id, candidate.id).await {
                unwatched.push(candidate);
            }
        }

        Outcome::with_prompt(
            Reply::ok(composer::watched_response(&movie, &unwatched)),
            composer::watched_prompt(&movie, &unwatched),
        )
    }

    async fn handle_list_watched(&self, user_id: &str) -> Outcome {
        let watched = match self.store.list(user_id).await {
            Ok(watched) => watched,
            Err(e) => {
                warn!("Watched list lookup failed: {}", e);
                return Outcome::templated(Reply::fail(composer::list_error_response()));
            }
        };

        if watched.is_empty() {
            return Outcome::with_prompt(
                Reply::ok(composer::empty_watched_list_response()),
                composer::watched_list_prompt(0, &[]),
            );
        }

        let total = watched.len();
        let mut details = Vec::new();
        for movie_id in watched.into_iter().take(MAX_LIST_ENTRIES) {
            match self.provider.details(movie_id).await {
                Ok(Some(movie)) => details.push(movie),
                Ok(None) => debug!("Watched movie {} no longer resolvable", movie_id),
                Err(e) => warn!("Detail lookup for {} failed: {}", movie_id, e),
            }
        }

        if details.is_empty() {
            return Outcome::templated(Reply::fail(composer::list_error_response()));
        }

        Outcome::with_prompt(
            Reply::ok(composer::watched_list_response(total, &details)),
            composer::watched_list_prompt(total, &details),
        )
    }

    /// A failed similar-movies lookup degrades to no recommendations; the
    /// main result of the action is still worth replying with.
    async fn similar_or_empty(&self, movie_id: u64, min_score: f64) -> Vec<MovieRecord> {
        match self.provider.similar(movie_id, min_score).await {
            Ok(similar) => similar,
            Err(e) => {
                warn!("Similar-movies lookup failed: {}", e);
                Vec::new()
            }
        }
    }

    /// A failed membership check reads as "not watched", matching the
    /// store's own degradation on read errors.
    async fn is_watched_or_false(&self, user_id: &str, movie_id: u64) -> bool {
        match self.store.is_watched(user_id, movie_id).await {
            Ok(watched) => watched,
            Err(e) => {
                warn!("Watched check failed: {}", e);
                false
            }
        }
    }
}
