//! Conversation endpoint.
//!
//! POST /api/v1/chat
//!
//! Runs one conversation round: resolves (or creates) the session, sends
//! the full history to the model, returns the reply. The per-session lock
//! guarantees a session never has two in-flight requests.

use std::sync::Arc;
use std::time::Instant;

use axum::Json;
use axum::extract::State;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tracing::Instrument;
use uuid::Uuid;

use contentry_core::chat::{ChatSettings, ConversationOrchestrator};

use crate::http::error::AppError;
use crate::http::response::ApiResponse;
use crate::state::AppState;

/// Request body for the chat endpoint.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    /// Existing session ID to continue; if absent, a new session is created.
    pub session_id: Option<Uuid>,
    /// The user message to send.
    pub message: String,
}

/// Response body for the chat endpoint.
#[derive(Debug, Serialize)]
pub struct ChatReply {
    pub session_id: Uuid,
    pub reply: String,
}

/// POST /api/v1/chat -- one conversation round.
pub async fn chat(
    State(state): State<AppState>,
    Json(body): Json<ChatRequest>,
) -> Result<ApiResponse<ChatReply>, AppError> {
    let started = Instant::now();
    let request_id = Uuid::now_v7().to_string();

    if body.message.trim().is_empty() {
        return Err(AppError::Validation(
            "message must not be empty".to_string(),
        ));
    }

    // Resolve or create the session
    let orchestrator = match body.session_id {
        Some(id) => state
            .sessions
            .get(&id)
            .map(|entry| Arc::clone(entry.value()))
            .ok_or(AppError::SessionNotFound)?,
        None => {
            let provider = state.provider()?;
            let settings = ChatSettings::from_config(&state.config);
            let orchestrator =
                ConversationOrchestrator::new(provider, settings, state.config.greeting());
            let id = orchestrator.store().info().id;
            let handle = Arc::new(Mutex::new(orchestrator));
            state.sessions.insert(id, Arc::clone(&handle));
            handle
        }
    };

    let mut session = orchestrator.lock().await;
    let session_id = session.store().info().id;
    let model = session.settings().model.clone();

    let span = tracing::info_span!(
        "chat",
        gen_ai.operation.name = "chat",
        gen_ai.provider.name = "groq",
        gen_ai.request.model = %model,
    );
    let reply = session.respond(&body.message).instrument(span).await?;

    Ok(ApiResponse::success(
        ChatReply { session_id, reply },
        request_id,
        started.elapsed().as_millis() as u64,
    ))
}
