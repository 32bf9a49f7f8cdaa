//! Content generator.
//!
//! Stateless single-shot flow: validate the four fields, render the fixed
//! template, make exactly one model call, return the reply text unmodified.
//! No conversation state, no memory of prior calls, no retry.

use std::sync::Arc;

use tracing::debug;

use contentry_types::config::AppConfig;
use contentry_types::content::ContentRequest;
use contentry_types::error::ContentError;
use contentry_types::llm::{CompletionRequest, Message, MessageRole};

use crate::content::template;
use crate::llm::BoxLlmProvider;

/// Model settings for the content flow, resolved once from configuration.
#[derive(Debug, Clone)]
pub struct GeneratorSettings {
    pub model: String,
    pub temperature: f64,
    pub max_tokens: u32,
}

impl GeneratorSettings {
    /// Resolve generator settings from the loaded application config.
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            model: config.model.clone(),
            temperature: config.content.temperature,
            max_tokens: config.content.max_tokens,
        }
    }
}

/// Fills the content template and relays it to the model collaborator.
pub struct ContentGenerator {
    provider: Arc<BoxLlmProvider>,
    settings: GeneratorSettings,
}

impl ContentGenerator {
    pub fn new(provider: Arc<BoxLlmProvider>, settings: GeneratorSettings) -> Self {
        Self { provider, settings }
    }

    /// The settings this generator runs with.
    pub fn settings(&self) -> &GeneratorSettings {
        &self.settings
    }

    /// Generate content for the request.
    ///
    /// Validation failures ([`ContentError::EmptyField`]) are detected
    /// before any network call. The reply is returned as-is, including any
    /// markdown the model produced.
    pub async fn generate(&self, request: &ContentRequest) -> Result<String, ContentError> {
        request.validate()?;

        let prompt = template::render(request);
        let completion = CompletionRequest {
            model: self.settings.model.clone(),
            messages: vec![Message {
                role: MessageRole::User,
                content: prompt,
            }],
            system: None,
            max_tokens: self.settings.max_tokens,
            temperature: Some(self.settings.temperature),
        };

        debug!(
            model = %completion.model,
            platform = %request.platform,
            tone = %request.tone,
            "sending content-generation request"
        );

        let response = self.provider.complete(&completion).await?;

        debug!(
            input_tokens = response.usage.input_tokens,
            output_tokens = response.usage.output_tokens,
            "content generation complete"
        );

        Ok(response.content)
    }
}
