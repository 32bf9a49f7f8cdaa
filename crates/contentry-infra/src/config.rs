//! Application configuration loader.
//!
//! Reads `config.toml` from the data directory (`~/.contentry/` in
//! production) and deserializes it into [`AppConfig`]. Falls back to the
//! defaults when the file is missing or malformed, then applies
//! environment overrides on top.

use std::path::{Path, PathBuf};

use contentry_types::config::AppConfig;

/// Environment override for the model identifier.
pub const ENV_MODEL: &str = "GROQ_MODEL";

/// Environment override for the chat sampling temperature.
pub const ENV_TEMPERATURE: &str = "MODEL_TEMPERATURE";

/// Environment override for the system instruction.
pub const ENV_SYSTEM_PROMPT: &str = "SYSTEM_PROMPT";

/// Resolve the data directory: `$CONTENTRY_DATA_DIR`, else `~/.contentry`.
pub fn resolve_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("CONTENTRY_DATA_DIR") {
        return PathBuf::from(dir);
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".contentry")
}

/// Load application configuration from `{data_dir}/config.toml`.
///
/// - If the file does not exist, returns [`AppConfig::default()`].
/// - If the file exists but fails to parse, logs a warning and returns the default.
/// - If the file exists and parses successfully, returns the parsed config.
///
/// Environment overrides are applied in every case, and temperatures are
/// clamped into [0, 1].
pub async fn load_app_config(data_dir: &Path) -> AppConfig {
    let mut config = read_config_file(data_dir).await;
    apply_env_overrides(&mut config);
    clamp_temperatures(&mut config);
    config
}

/// Read and parse `config.toml`, falling back to defaults on any failure.
async fn read_config_file(data_dir: &Path) -> AppConfig {
    let config_path = data_dir.join("config.toml");

    let content = match tokio::fs::read_to_string(&config_path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(
                "No config.toml found at {}, using defaults",
                config_path.display()
            );
            return AppConfig::default();
        }
        Err(err) => {
            tracing::warn!(
                "Failed to read {}: {err}, using defaults",
                config_path.display()
            );
            return AppConfig::default();
        }
    };

    match toml::from_str::<AppConfig>(&content) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(
                "Failed to parse {}: {err}, using defaults",
                config_path.display()
            );
            AppConfig::default()
        }
    }
}

/// Apply environment overrides on top of the loaded file.
///
/// These use the variable names the original deployment recognized, so an
/// existing `.env` keeps working unchanged.
fn apply_env_overrides(config: &mut AppConfig) {
    if let Ok(model) = std::env::var(ENV_MODEL) {
        if !model.trim().is_empty() {
            config.model = model.trim().to_string();
        }
    }

    if let Ok(raw) = std::env::var(ENV_TEMPERATURE) {
        match raw.trim().parse::<f64>() {
            Ok(t) => config.chat.temperature = t,
            Err(_) => {
                tracing::warn!("Ignoring unparseable {ENV_TEMPERATURE}='{raw}'");
            }
        }
    }

    if let Ok(prompt) = std::env::var(ENV_SYSTEM_PROMPT) {
        if !prompt.trim().is_empty() {
            config.chat.system_instruction = Some(prompt);
        }
    }
}

/// Clamp sampling temperatures into the valid [0, 1] range.
fn clamp_temperatures(config: &mut AppConfig) {
    for (label, temp) in [
        ("chat", &mut config.chat.temperature),
        ("content", &mut config.content.temperature),
    ] {
        if !(0.0..=1.0).contains(temp) {
            let clamped = temp.clamp(0.0, 1.0);
            tracing::warn!("{label} temperature {temp} outside [0, 1], clamping to {clamped}");
            *temp = clamped;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contentry_types::config::DEFAULT_MODEL;
    use tempfile::TempDir;

    #[tokio::test]
    async fn read_config_file_missing_returns_default() {
        let tmp = TempDir::new().unwrap();
        let config = read_config_file(tmp.path()).await;
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.chat.temperature, 0.3);
    }

    #[tokio::test]
    async fn read_config_file_valid_toml_returns_parsed() {
        let tmp = TempDir::new().unwrap();
        tokio::fs::write(
            tmp.path().join("config.toml"),
            r#"
model = "llama-3.1-8b-instant"

[chat]
temperature = 0.5
max_tokens = 2048

[content]
temperature = 0.9
"#,
        )
        .await
        .unwrap();

        let config = read_config_file(tmp.path()).await;
        assert_eq!(config.model, "llama-3.1-8b-instant");
        assert_eq!(config.chat.temperature, 0.5);
        assert_eq!(config.chat.max_tokens, 2048);
        assert_eq!(config.content.temperature, 0.9);
    }

    #[tokio::test]
    async fn read_config_file_invalid_toml_returns_default() {
        let tmp = TempDir::new().unwrap();
        tokio::fs::write(tmp.path().join("config.toml"), "this is not { valid toml !!!")
            .await
            .unwrap();

        let config = read_config_file(tmp.path()).await;
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.chat.temperature, 0.3);
    }

    #[test]
    fn clamp_temperatures_pulls_into_range() {
        let mut config = AppConfig::default();
        config.chat.temperature = 1.8;
        config.content.temperature = -0.2;

        clamp_temperatures(&mut config);
        assert_eq!(config.chat.temperature, 1.0);
        assert_eq!(config.content.temperature, 0.0);
    }

    #[test]
    fn clamp_temperatures_leaves_valid_values() {
        let mut config = AppConfig::default();
        clamp_temperatures(&mut config);
        assert_eq!(config.chat.temperature, 0.3);
        assert_eq!(config.content.temperature, 0.7);
    }

    // Env-var manipulation is confined to this single test to avoid
    // interference between parallel tests reading the same variables.
    #[test]
    fn env_overrides_win_over_loaded_values() {
        let mut config = AppConfig {
            model: "llama-3.1-8b-instant".to_string(),
            ..AppConfig::default()
        };

        // SAFETY: these vars are only touched by this test, removed below.
        unsafe {
            std::env::set_var(ENV_MODEL, "llama-3.3-70b-versatile");
            std::env::set_var(ENV_TEMPERATURE, "0.6");
            std::env::set_var(ENV_SYSTEM_PROMPT, "Answer in haiku.");
        }

        apply_env_overrides(&mut config);

        // SAFETY: removing the vars this test just set.
        unsafe {
            std::env::remove_var(ENV_MODEL);
            std::env::remove_var(ENV_TEMPERATURE);
            std::env::remove_var(ENV_SYSTEM_PROMPT);
        }

        assert_eq!(config.model, "llama-3.3-70b-versatile");
        assert_eq!(config.chat.temperature, 0.6);
        assert_eq!(config.system_instruction(), "Answer in haiku.");
    }

    #[test]
    fn resolve_data_dir_honors_env() {
        // SAFETY: uniquely-owned var for this test, removed before exit.
        unsafe { std::env::set_var("CONTENTRY_DATA_DIR", "/tmp/contentry-test") };
        let dir = resolve_data_dir();
        // SAFETY: removing the var this test just set.
        unsafe { std::env::remove_var("CONTENTRY_DATA_DIR") };

        assert_eq!(dir, PathBuf::from("/tmp/contentry-test"));
    }
}
