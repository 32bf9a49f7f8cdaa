//! Conversation turn and session types for Contentry.
//!
//! A session is the ordered turn history for one user's interaction
//! lifetime. It lives entirely in memory and dies with the process (or on
//! explicit deletion); there is no persistence layer behind it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// Re-export MessageRole from the llm module (used in both contexts).
pub use crate::llm::MessageRole;

/// One message in a conversation, tagged with its speaker role.
///
/// Immutable once created. The system instruction is never represented as
/// a stored turn; it is injected fresh into every outbound request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Turn {
    pub role: MessageRole,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl Turn {
    fn new(role: MessageRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
            created_at: Utc::now(),
        }
    }

    /// A turn spoken by the user.
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(MessageRole::User, content)
    }

    /// A turn spoken by the assistant.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(MessageRole::Assistant, content)
    }

    /// A system turn. Only ever used in outbound payloads, never stored.
    pub fn system(content: impl Into<String>) -> Self {
        Self::new(MessageRole::System, content)
    }
}

/// Identity and lifetime metadata for one conversation session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionInfo {
    pub id: Uuid,
    pub started_at: DateTime<Utc>,
    pub model: String,
}

impl SessionInfo {
    /// Mint a new session identity with a time-sortable id.
    pub fn new(model: String) -> Self {
        Self {
            id: Uuid::now_v7(),
            started_at: Utc::now(),
            model,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turn_constructors() {
        assert_eq!(Turn::user("hi").role, MessageRole::User);
        assert_eq!(Turn::assistant("hello").role, MessageRole::Assistant);
        assert_eq!(Turn::system("be brief").role, MessageRole::System);
    }

    #[test]
    fn test_turn_serialize() {
        let turn = Turn::user("What is 2+2?");
        let json = serde_json::to_string(&turn).unwrap();
        assert!(json.contains("\"role\":\"user\""));
        assert!(json.contains("What is 2+2?"));
    }

    #[test]
    fn test_session_info_new() {
        let info = SessionInfo::new("llama-3.3-70b-versatile".to_string());
        assert_eq!(info.model, "llama-3.3-70b-versatile");
        // v7 ids are time-ordered; two mints must differ
        let other = SessionInfo::new("llama-3.3-70b-versatile".to_string());
        assert_ne!(info.id, other.id);
    }
}
