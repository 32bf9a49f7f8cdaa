//! Application configuration types for Contentry.
//!
//! Deserialized from `config.toml` in the data directory. Every field has a
//! default so a missing or partial file still yields a usable config.
//! Environment overrides are applied by the loader in `contentry-infra`.

use serde::{Deserialize, Serialize};

/// Default model served by Groq's OpenAI-compatible endpoint.
pub const DEFAULT_MODEL: &str = "llama-3.3-70b-versatile";

/// Default system instruction injected into every conversation request.
pub const DEFAULT_SYSTEM_INSTRUCTION: &str = "You are a helpful and concise assistant.";

/// Default synthetic greeting seeded into a new session.
pub const DEFAULT_GREETING: &str = "Hi! I'm your AI assistant. How can I help today?";

/// Top-level application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_model")]
    pub model: String,

    #[serde(default)]
    pub chat: ChatConfig,

    #[serde(default)]
    pub content: ContentConfig,
}

/// Settings for the conversation flow.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatConfig {
    /// Sampling temperature, valid range [0, 1].
    #[serde(default = "default_chat_temperature")]
    pub temperature: f64,

    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// Override for the system instruction sent with every request.
    #[serde(default)]
    pub system_instruction: Option<String>,

    /// Override for the synthetic greeting that opens a session.
    #[serde(default)]
    pub greeting: Option<String>,
}

/// Settings for the content-generation flow.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentConfig {
    /// Sampling temperature, valid range [0, 1]. Higher than the chat
    /// default: generated copy benefits from more variety.
    #[serde(default = "default_content_temperature")]
    pub temperature: f64,

    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            chat: ChatConfig::default(),
            content: ContentConfig::default(),
        }
    }
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            temperature: default_chat_temperature(),
            max_tokens: default_max_tokens(),
            system_instruction: None,
            greeting: None,
        }
    }
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            temperature: default_content_temperature(),
            max_tokens: default_max_tokens(),
        }
    }
}

impl AppConfig {
    /// The system instruction to inject, falling back to the default.
    pub fn system_instruction(&self) -> &str {
        self.chat
            .system_instruction
            .as_deref()
            .unwrap_or(DEFAULT_SYSTEM_INSTRUCTION)
    }

    /// The greeting to seed new sessions with, falling back to the default.
    pub fn greeting(&self) -> &str {
        self.chat.greeting.as_deref().unwrap_or(DEFAULT_GREETING)
    }
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_chat_temperature() -> f64 {
    0.3
}

fn default_content_temperature() -> f64 {
    0.7
}

fn default_max_tokens() -> u32 {
    4096
}
