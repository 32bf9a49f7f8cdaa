//! In-memory session store.
//!
//! Holds the ordered turn history for one user session. Append-only: turns
//! are never reordered or deleted within a session, and there is no size
//! bound or eviction. The whole store dies with its session.

use contentry_types::chat::{SessionInfo, Turn};

/// Ordered turn history for one session, exclusively owned by it.
#[derive(Debug)]
pub struct SessionStore {
    info: SessionInfo,
    turns: Vec<Turn>,
}

impl SessionStore {
    /// Create an empty session.
    pub fn new(model: String) -> Self {
        Self {
            info: SessionInfo::new(model),
            turns: Vec::new(),
        }
    }

    /// Create a session seeded with the synthetic assistant greeting.
    ///
    /// The greeting is the session's first turn; it is part of history sent
    /// to the model but never counts as user input.
    pub fn with_greeting(model: String, greeting: &str) -> Self {
        let mut store = Self::new(model);
        store.append(Turn::assistant(greeting));
        store
    }

    /// Append a turn to the end of the history. O(1), never fails.
    pub fn append(&mut self, turn: Turn) {
        self.turns.push(turn);
    }

    /// The full ordered turn sequence.
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    /// Number of turns recorded so far.
    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// Session identity and lifetime metadata.
    pub fn info(&self) -> &SessionInfo {
        &self.info
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contentry_types::llm::MessageRole;

    #[test]
    fn test_new_store_is_empty() {
        let store = SessionStore::new("llama-3.3-70b-versatile".to_string());
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
    }

    #[test]
    fn test_greeting_seeds_one_assistant_turn() {
        let store =
            SessionStore::with_greeting("llama-3.3-70b-versatile".to_string(), "Hi there!");
        assert_eq!(store.len(), 1);
        assert_eq!(store.turns()[0].role, MessageRole::Assistant);
        assert_eq!(store.turns()[0].content, "Hi there!");
    }

    #[test]
    fn test_append_preserves_order() {
        let mut store = SessionStore::new("llama-3.3-70b-versatile".to_string());
        store.append(Turn::user("first"));
        store.append(Turn::assistant("second"));
        store.append(Turn::user("third"));

        let contents: Vec<&str> = store.turns().iter().map(|t| t.content.as_str()).collect();
        assert_eq!(contents, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_info_carries_model() {
        let store = SessionStore::new("llama-3.1-8b-instant".to_string());
        assert_eq!(store.info().model, "llama-3.1-8b-instant");
    }
}
