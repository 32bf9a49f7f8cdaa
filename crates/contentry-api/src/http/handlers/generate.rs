//! Content-generation endpoint.
//!
//! POST /api/v1/generate
//!
//! Stateless single-shot: validates the four fields, renders the template,
//! makes one model call, and returns the reply. Conversation sessions are
//! never touched.

use std::time::Instant;

use axum::Json;
use axum::extract::State;
use serde::{Deserialize, Serialize};
use tracing::Instrument;
use uuid::Uuid;

use contentry_core::content::{ContentGenerator, GeneratorSettings};
use contentry_types::content::{ContentRequest, Platform, Tone};

use crate::http::error::AppError;
use crate::http::response::ApiResponse;
use crate::state::AppState;

/// Request body for the generate endpoint.
#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    pub topic: String,
    pub platform: Platform,
    pub audience: String,
    pub tone: Tone,
}

/// Response body for the generate endpoint.
#[derive(Debug, Serialize)]
pub struct GenerateReply {
    pub content: String,
}

/// POST /api/v1/generate -- fill the template, relay once, return the reply.
pub async fn generate(
    State(state): State<AppState>,
    Json(body): Json<GenerateRequest>,
) -> Result<ApiResponse<GenerateReply>, AppError> {
    let started = Instant::now();
    let request_id = Uuid::now_v7().to_string();

    let request = ContentRequest {
        topic: body.topic,
        platform: body.platform,
        audience: body.audience,
        tone: body.tone,
    };

    let provider = state.provider()?;
    let generator = ContentGenerator::new(provider, GeneratorSettings::from_config(&state.config));

    let span = tracing::info_span!(
        "generate_content",
        gen_ai.operation.name = "generate_content",
        gen_ai.provider.name = "groq",
        gen_ai.request.model = %state.config.model,
    );
    let content = generator.generate(&request).instrument(span).await?;

    Ok(ApiResponse::success(
        GenerateReply { content },
        request_id,
        started.elapsed().as_millis() as u64,
    ))
}
