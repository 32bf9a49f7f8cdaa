//! Application state wiring configuration, the model collaborator handle,
//! and the server-side session registry together.
//!
//! The provider handle is the process-wide cached singleton: built lazily
//! on first use (after the credential check) and shared read-only across
//! CLI commands and HTTP handlers. Each conversation session owns its
//! orchestrator exclusively; the registry only hands out one lock per
//! session so a session never has two in-flight requests.

use std::path::PathBuf;
use std::sync::{Arc, OnceLock};

use dashmap::DashMap;
use tokio::sync::Mutex;
use uuid::Uuid;

use contentry_core::chat::ConversationOrchestrator;
use contentry_core::llm::BoxLlmProvider;
use contentry_infra::config::{load_app_config, resolve_data_dir};
use contentry_infra::credential::env::{EnvCredentialStore, GROQ_API_KEY};
use contentry_infra::llm::GroqProvider;
use contentry_types::config::AppConfig;
use contentry_types::error::CredentialError;

/// Server-side registry of live conversation sessions.
pub type SessionRegistry = DashMap<Uuid, Arc<Mutex<ConversationOrchestrator>>>;

/// Shared application state used by both CLI commands and HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub data_dir: PathBuf,
    pub sessions: Arc<SessionRegistry>,
    provider: Arc<OnceLock<Arc<BoxLlmProvider>>>,
}

impl AppState {
    /// Initialize the application state: resolve the data dir and load
    /// configuration. The provider is not constructed yet; commands that
    /// never call the model (e.g., `status`) work without a credential.
    pub async fn init() -> anyhow::Result<Self> {
        let data_dir = resolve_data_dir();
        tokio::fs::create_dir_all(&data_dir).await?;

        let config = load_app_config(&data_dir).await;

        Ok(Self {
            config: Arc::new(config),
            data_dir,
            sessions: Arc::new(DashMap::new()),
            provider: Arc::new(OnceLock::new()),
        })
    }

    /// State with a pre-built provider, bypassing credential resolution.
    /// Used by tests to inject a scripted provider.
    #[cfg(test)]
    pub fn with_provider(config: AppConfig, provider: BoxLlmProvider) -> Self {
        let cell = OnceLock::new();
        let _ = cell.set(Arc::new(provider));
        Self {
            config: Arc::new(config),
            data_dir: PathBuf::from("."),
            sessions: Arc::new(DashMap::new()),
            provider: Arc::new(cell),
        }
    }

    /// The shared model collaborator handle.
    ///
    /// Built once on first call: resolves `GROQ_API_KEY` (failing with the
    /// user-visible message when absent, before any request is attempted)
    /// and constructs the Groq client. Subsequent calls reuse the handle.
    pub fn provider(&self) -> Result<Arc<BoxLlmProvider>, CredentialError> {
        if let Some(provider) = self.provider.get() {
            return Ok(Arc::clone(provider));
        }

        let api_key = EnvCredentialStore::new().require(GROQ_API_KEY)?;
        let groq = GroqProvider::with_defaults(api_key, &self.config.model);
        let provider = Arc::new(BoxLlmProvider::new(groq));

        // A concurrent first call may have won the race; keep whichever
        // handle landed in the cell so every caller shares one client.
        let _ = self.provider.set(Arc::clone(&provider));
        match self.provider.get() {
            Some(cached) => Ok(Arc::clone(cached)),
            None => Ok(provider),
        }
    }

    /// Whether the API credential is currently resolvable.
    pub fn credential_present(&self) -> bool {
        self.provider.get().is_some() || EnvCredentialStore::new().get(GROQ_API_KEY).is_some()
    }
}
