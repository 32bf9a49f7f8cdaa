//! Content generation command.
//!
//! Fields missing from the command line are collected interactively, so
//! `ctry generate` with no flags walks through the same form the web UI
//! offered: topic, platform, audience, tone.

use anyhow::Result;
use console::style;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Select};

use contentry_core::content::{ContentGenerator, GeneratorSettings};
use contentry_types::content::{ContentRequest, Platform, Tone};

use crate::cli::chat::renderer::ChatRenderer;
use crate::state::AppState;

/// Run the content-generation flow.
pub async fn generate(
    state: &AppState,
    topic: Option<String>,
    platform: Option<Platform>,
    audience: Option<String>,
    tone: Option<Tone>,
    json: bool,
) -> Result<()> {
    let provider = state.provider()?;

    let request = ContentRequest {
        topic: resolve_text(topic, "Topic", "e.g., The benefits of virtual reality for education")?,
        platform: resolve_platform(platform)?,
        audience: resolve_text(audience, "Audience", "e.g., School Administrators and Educators")?,
        tone: resolve_tone(tone)?,
    };

    let generator = ContentGenerator::new(provider, GeneratorSettings::from_config(&state.config));

    let spinner = indicatif::ProgressBar::new_spinner();
    spinner.set_style(
        indicatif::ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap(),
    );
    spinner.set_message("Generating content...");
    spinner.enable_steady_tick(std::time::Duration::from_millis(80));

    let result = generator.generate(&request).await;
    spinner.finish_and_clear();

    let output = result.map_err(|e| anyhow::anyhow!("Generation failed: {e}"))?;

    if json {
        let payload = serde_json::json!({
            "topic": request.topic,
            "platform": request.platform,
            "audience": request.audience,
            "tone": request.tone,
            "content": output,
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    println!();
    println!(
        "  {} {} for {}",
        style("*").cyan().bold(),
        style(request.platform.to_string()).bold(),
        style(&request.audience).dim()
    );
    println!("  {}", style("---").dim());
    println!();
    let renderer = ChatRenderer::new();
    println!("{}", renderer.render_final(&output));

    Ok(())
}

/// Use the flag value when present and non-empty, otherwise prompt.
fn resolve_text(flag: Option<String>, label: &str, placeholder: &str) -> Result<String> {
    if let Some(value) = flag {
        if !value.trim().is_empty() {
            return Ok(value);
        }
    }

    let value: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(format!("{label} ({placeholder})"))
        .validate_with(|input: &String| {
            if input.trim().is_empty() {
                Err("must not be empty")
            } else {
                Ok(())
            }
        })
        .interact_text()?;
    Ok(value)
}

fn resolve_platform(flag: Option<Platform>) -> Result<Platform> {
    if let Some(platform) = flag {
        return Ok(platform);
    }

    let labels: Vec<String> = Platform::ALL.iter().map(|p| p.to_string()).collect();
    let index = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Platform")
        .items(&labels)
        .default(0)
        .interact()?;
    Ok(Platform::ALL[index])
}

fn resolve_tone(flag: Option<Tone>) -> Result<Tone> {
    if let Some(tone) = flag {
        return Ok(tone);
    }

    let labels: Vec<String> = Tone::ALL.iter().map(|t| t.to_string()).collect();
    let index = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Tone")
        .items(&labels)
        .default(0)
        .interact()?;
    Ok(Tone::ALL[index])
}
