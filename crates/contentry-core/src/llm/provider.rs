//! LlmProvider trait definition.
//!
//! This is the core abstraction the model collaborator hides behind. Uses
//! native async fn in traits (RPITIT, Rust 2024 edition); the object-safe
//! wrapper for runtime dispatch lives in [`super::box_provider`].

use contentry_types::llm::{CompletionRequest, CompletionResponse, LlmError, ProviderCapabilities};

/// Trait for LLM provider backends.
///
/// Implementations live in `contentry-infra` (e.g., `GroqProvider`). A
/// completion is one synchronous request/response round; there is no
/// streaming entry point.
pub trait LlmProvider: Send + Sync {
    /// Human-readable provider name (e.g., "groq").
    fn name(&self) -> &str;

    /// Context and output limits of this provider.
    fn capabilities(&self) -> &ProviderCapabilities;

    /// Send a completion request and receive the full response.
    fn complete(
        &self,
        request: &CompletionRequest,
    ) -> impl std::future::Future<Output = Result<CompletionResponse, LlmError>> + Send;
}
