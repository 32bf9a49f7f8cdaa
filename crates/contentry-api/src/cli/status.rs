//! Configuration and credential status command.

use anyhow::Result;
use console::style;

use contentry_infra::credential::env::GROQ_API_KEY;
use contentry_infra::llm::groq::config::GROQ_BASE_URL;

use crate::state::AppState;

/// Display the status dashboard.
///
/// Shows model configuration, credential presence (never the value), and
/// the data directory.
pub fn status(state: &AppState, json: bool) -> Result<()> {
    let credential_present = state.credential_present();

    if json {
        let status = serde_json::json!({
            "version": env!("CARGO_PKG_VERSION"),
            "data_dir": state.data_dir.display().to_string(),
            "provider": {
                "name": "groq",
                "base_url": GROQ_BASE_URL,
                "credential_present": credential_present,
            },
            "model": state.config.model,
            "chat": {
                "temperature": state.config.chat.temperature,
                "max_tokens": state.config.chat.max_tokens,
            },
            "content": {
                "temperature": state.config.content.temperature,
                "max_tokens": state.config.content.max_tokens,
            },
        });
        println!("{}", serde_json::to_string_pretty(&status)?);
        return Ok(());
    }

    println!();
    println!(
        "  {} Contentry v{}",
        style("🧠").bold(),
        env!("CARGO_PKG_VERSION")
    );
    println!();

    println!("  {}", style("── Model ──").dim());
    println!("  Model:       {}", style(&state.config.model).bold());
    println!("  Chat temp:   {}", state.config.chat.temperature);
    println!("  Content temp: {}", state.config.content.temperature);
    println!();

    println!("  {}", style("── Provider ──").dim());
    println!("  Endpoint: {}", style(GROQ_BASE_URL).dim());
    if credential_present {
        println!("  {} {} is set", style("✓").green(), GROQ_API_KEY);
    } else {
        println!(
            "  {} {} is missing. Export it before chatting or generating.",
            style("✗").red(),
            GROQ_API_KEY
        );
    }
    println!();

    println!("  {}", style("── System ──").dim());
    println!("  Data dir: {}", style(state.data_dir.display()).dim());
    println!();

    Ok(())
}
