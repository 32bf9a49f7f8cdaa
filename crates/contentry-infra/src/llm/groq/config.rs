//! Configuration and defaults for the Groq provider.

use secrecy::SecretString;

use contentry_types::llm::ProviderCapabilities;

/// Groq's OpenAI-compatible chat-completions endpoint.
pub const GROQ_BASE_URL: &str = "https://api.groq.com/openai/v1";

/// Configuration for a [`super::GroqProvider`].
pub struct GroqConfig {
    /// Base URL for the API. Overridable for proxies and test servers.
    pub base_url: String,
    /// API key for authentication.
    pub api_key: SecretString,
    /// Model identifier (e.g., "llama-3.3-70b-versatile").
    pub model: String,
    /// What this provider supports.
    pub capabilities: ProviderCapabilities,
}

/// Groq default configuration.
///
/// Base URL: `https://api.groq.com/openai/v1`; 128K context, 32K output.
pub fn groq_defaults(api_key: SecretString, model: &str) -> GroqConfig {
    GroqConfig {
        base_url: GROQ_BASE_URL.into(),
        api_key,
        model: model.into(),
        capabilities: ProviderCapabilities {
            max_context_tokens: 128_000,
            max_output_tokens: 32_768,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_groq_defaults() {
        let config = groq_defaults(SecretString::from("gsk-test"), "llama-3.3-70b-versatile");
        assert_eq!(config.base_url, "https://api.groq.com/openai/v1");
        assert_eq!(config.model, "llama-3.3-70b-versatile");
        assert_eq!(config.capabilities.max_context_tokens, 128_000);
        assert_eq!(config.capabilities.max_output_tokens, 32_768);
    }
}
