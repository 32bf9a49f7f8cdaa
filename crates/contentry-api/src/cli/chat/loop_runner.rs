//! Main chat loop orchestration.
//!
//! Coordinates the complete conversation lifecycle: provider setup,
//! welcome banner, the synthetic greeting, and the input loop with slash
//! commands. Each round blocks on the model reply; a failed round is
//! reported and the loop continues.

use std::time::Instant;

use console::style;

use contentry_core::chat::{ChatSettings, ConversationOrchestrator};
use contentry_types::error::ChatError;
use contentry_types::llm::MessageRole;

use crate::state::AppState;

use super::banner::print_welcome_banner;
use super::commands::{self, ChatCommand};
use super::input::{ChatInput, InputEvent};
use super::renderer::ChatRenderer;

/// Run the interactive chat loop.
pub async fn run_chat_loop(state: &AppState) -> anyhow::Result<()> {
    // Resolve the shared provider first; a missing credential must surface
    // before any conversation starts.
    let provider = state.provider()?;

    let settings = ChatSettings::from_config(&state.config);
    let model = settings.model.clone();
    let mut orchestrator =
        ConversationOrchestrator::new(provider, settings, state.config.greeting());

    let session_id = orchestrator.store().info().id.to_string();
    print_welcome_banner(&model, &session_id);

    // The greeting is synthetic: rendered straight from the seeded session,
    // no model call involved.
    let renderer = ChatRenderer::new();
    if let Some(greeting) = orchestrator.store().turns().first() {
        println!("  {}", renderer.render_final(&greeting.content).trim());
        println!();
    }

    let prompt = format!("  {} ", style("You >").green().bold());
    let (mut chat_input, _writer) = ChatInput::new(prompt)
        .map_err(|e| anyhow::anyhow!("Failed to initialize input: {e}"))?;

    loop {
        let event = chat_input.read_line().await;
        match event {
            InputEvent::Eof => {
                println!("\n  {}", style("Session ended.").dim());
                break;
            }
            InputEvent::Interrupted => {
                println!(
                    "\n  {}",
                    style("Press Ctrl+D to exit, or keep chatting.").dim()
                );
                continue;
            }
            InputEvent::Message(text) => {
                if text.is_empty() {
                    continue;
                }

                // Slash commands
                if let Some(cmd) = commands::parse(&text) {
                    match cmd {
                        ChatCommand::Help => {
                            commands::print_help();
                            continue;
                        }
                        ChatCommand::Clear => {
                            chat_input.clear();
                            continue;
                        }
                        ChatCommand::History => {
                            print_history(&orchestrator);
                            continue;
                        }
                        ChatCommand::Exit => {
                            println!("\n  {}", style("Session ended.").dim());
                            break;
                        }
                        ChatCommand::Unknown(cmd_name) => {
                            println!(
                                "\n  {} Unknown command: {}. Type /help for available commands.\n",
                                style("?").yellow().bold(),
                                style(cmd_name).dim()
                            );
                            continue;
                        }
                    }
                }

                // Send to the model
                let spinner = indicatif::ProgressBar::new_spinner();
                spinner.set_style(
                    indicatif::ProgressStyle::default_spinner()
                        .template("{spinner:.cyan} {msg}")
                        .unwrap(),
                );
                spinner.set_message("Thinking...");
                spinner.enable_steady_tick(std::time::Duration::from_millis(80));

                let started = Instant::now();
                let result = orchestrator.respond(&text).await;
                spinner.finish_and_clear();

                match result {
                    Ok(reply) => {
                        println!("  {}", renderer.render_final(&reply).trim());
                        renderer
                            .print_stats_footer(started.elapsed().as_millis() as u64, &model);
                        println!();
                    }
                    Err(ChatError::EmptyInput) => continue,
                    Err(err) => {
                        // The user turn stays recorded; only the reply is missing.
                        println!(
                            "\n  {} Model error: {err}\n",
                            style("!").red().bold()
                        );
                    }
                }
            }
        }
    }

    Ok(())
}

/// Print the conversation so far, most recent last.
fn print_history(orchestrator: &ConversationOrchestrator) {
    println!();
    for turn in orchestrator.store().turns() {
        let role_label = match turn.role {
            MessageRole::User => format!("{}", style("You").green()),
            MessageRole::Assistant => format!("{}", style("Assistant").cyan()),
            MessageRole::System => "System".to_string(),
        };
        let preview = if turn.content.len() > 100 {
            format!("{}...", &turn.content[..97])
        } else {
            turn.content.clone()
        };
        println!("  {} {}", style(role_label).bold(), preview);
    }
    println!();
}
