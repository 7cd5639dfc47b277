//! Per-user conversation history.
//!
//! History is an explicitly injected keyed store: user id → ordered turn
//! list. Turns accumulate for the lifetime of the store; only the trailing
//! [`HISTORY_WINDOW`] turns are ever read for a classification or
//! generation call. Each user's list sits behind its own lock so that
//! concurrent requests from the same user serialize their
//! read-modify-append without blocking other users.

use reelbot_domain::Message;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Trailing turns included in any model call, regardless of total history.
pub const HISTORY_WINDOW: usize = 5;

type TurnList = Arc<Mutex<Vec<Message>>>;

/// Keyed conversation-history store.
#[derive(Default)]
pub struct ConversationHistory {
    users: Mutex<HashMap<String, TurnList>>,
}

impl ConversationHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// The per-user turn list, created lazily on first contact.
    async fn turns(&self, user_id: &str) -> TurnList {
        let mut users = self.users.lock().await;
        users
            .entry(user_id.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(Vec::new())))
            .clone()
    }

    /// Append a turn and return the trailing window including it.
    ///
    /// Append and snapshot happen under one per-user lock, so two racing
    /// requests cannot interleave their turn ordering.
    pub async fn push_and_window(&self, user_id: &str, message: Message) -> Vec<Message> {
        let turns = self.turns(user_id).await;
        let mut turns = turns.lock().await;
        turns.push(message);
        let start = turns.len().saturating_sub(HISTORY_WINDOW);
        turns[start..].to_vec()
    }

    /// Append a turn without reading a window back.
    pub async fn push(&self, user_id: &str, message: Message) {
        let turns = self.turns(user_id).await;
        turns.lock().await.push(message);
    }

    /// The trailing window of recorded turns, most recent last.
    pub async fn window(&self, user_id: &str) -> Vec<Message> {
        let turns = self.turns(user_id).await;
        let turns = turns.lock().await;
        let start = turns.len().saturating_sub(HISTORY_WINDOW);
        turns[start..].to_vec()
    }

    /// Total turns recorded for a user.
    pub async fn len(&self, user_id: &str) -> usize {
        let turns = self.turns(user_id).await;
        let len = turns.lock().await.len();
        len
    }

    /// Drop all recorded turns for a user.
    pub async fn clear(&self, user_id: &str) {
        let turns = self.turns(user_id).await;
        turns.lock().await.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_window_bounded_at_five() {
        let history = ConversationHistory::new();
        for i in 0..8 {
            history.push("user", Message::user(format!("turn {}", i))).await;
        }
        let window = history.window("user").await;
        assert_eq!(window.len(), HISTORY_WINDOW);
        assert_eq!(window[0].content, "turn 3");
        assert_eq!(window[4].content, "turn 7");
        assert_eq!(history.len("user").await, 8);
    }

    #[tokio::test]
    async fn test_push_and_window_includes_new_turn() {
        let history = ConversationHistory::new();
        let window = history.push_and_window("user", Message::user("hello")).await;
        assert_eq!(window.len(), 1);
        assert_eq!(window[0].content, "hello");
    }

    #[tokio::test]
    async fn test_users_are_isolated() {
        let history = ConversationHistory::new();
        history.push("alice", Message::user("hi")).await;
        assert!(history.window("bob").await.is_empty());
    }

    #[tokio::test]
    async fn test_clear_empties_one_user() {
        let history = ConversationHistory::new();
        history.push("alice", Message::user("hi")).await;
        history.push("bob", Message::user("yo")).await;
        history.clear("alice").await;
        assert!(history.window("alice").await.is_empty());
        assert_eq!(history.len("bob").await, 1);
    }
}
