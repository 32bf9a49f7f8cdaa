//! Conversation orchestrator.
//!
//! Drives one round of the chat flow: append the user turn, send the full
//! history (with the system instruction injected fresh) to the model
//! collaborator, append and return the reply. One round is a single-shot
//! request/response cycle; there are no intermediate states and no retry.

use std::sync::Arc;

use tracing::debug;

use contentry_types::chat::Turn;
use contentry_types::config::AppConfig;
use contentry_types::error::ChatError;
use contentry_types::llm::{CompletionRequest, Message};

use crate::chat::store::SessionStore;
use crate::llm::BoxLlmProvider;

/// Per-conversation model settings, resolved once from configuration.
#[derive(Debug, Clone)]
pub struct ChatSettings {
    pub model: String,
    pub temperature: f64,
    pub max_tokens: u32,
    pub system_instruction: String,
}

impl ChatSettings {
    /// Resolve chat settings from the loaded application config.
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            model: config.model.clone(),
            temperature: config.chat.temperature,
            max_tokens: config.chat.max_tokens,
            system_instruction: config.system_instruction().to_string(),
        }
    }
}

/// Orchestrates one conversation session against the model collaborator.
///
/// Owns its [`SessionStore`] exclusively; the provider handle is the shared
/// process-wide collaborator client.
pub struct ConversationOrchestrator {
    provider: Arc<BoxLlmProvider>,
    settings: ChatSettings,
    store: SessionStore,
}

impl ConversationOrchestrator {
    /// Create an orchestrator with a greeting-seeded session.
    pub fn new(provider: Arc<BoxLlmProvider>, settings: ChatSettings, greeting: &str) -> Self {
        let store = SessionStore::with_greeting(settings.model.clone(), greeting);
        Self {
            provider,
            settings,
            store,
        }
    }

    /// Read-only view of the session history.
    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    /// The settings this conversation runs with.
    pub fn settings(&self) -> &ChatSettings {
        &self.settings
    }

    /// Run one conversation round.
    ///
    /// Empty input (after trimming) returns [`ChatError::EmptyInput`]
    /// without touching the session or the network. On a model failure the
    /// already-appended user turn stays recorded; the reply turn is only
    /// appended on success.
    pub async fn respond(&mut self, user_text: &str) -> Result<String, ChatError> {
        let text = user_text.trim();
        if text.is_empty() {
            return Err(ChatError::EmptyInput);
        }

        self.store.append(Turn::user(text));
        let request = self.build_request();

        debug!(
            session_id = %self.store.info().id,
            model = %request.model,
            turns = request.messages.len(),
            "sending conversation round"
        );

        let response = self.provider.complete(&request).await?;
        self.store.append(Turn::assistant(&response.content));

        debug!(
            session_id = %self.store.info().id,
            input_tokens = response.usage.input_tokens,
            output_tokens = response.usage.output_tokens,
            stop_reason = %response.stop_reason,
            "conversation round complete"
        );

        Ok(response.content)
    }

    /// Build the outbound request: the system instruction plus the full
    /// session history, including the just-appended user turn.
    fn build_request(&self) -> CompletionRequest {
        let messages = self
            .store
            .turns()
            .iter()
            .map(|turn| Message {
                role: turn.role,
                content: turn.content.clone(),
            })
            .collect();

        CompletionRequest {
            model: self.settings.model.clone(),
            messages,
            system: Some(self.settings.system_instruction.clone()),
            max_tokens: self.settings.max_tokens,
            temperature: Some(self.settings.temperature),
        }
    }
}
