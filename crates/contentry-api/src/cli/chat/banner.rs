//! Welcome banner display for chat sessions.

use console::style;

/// Print the welcome banner at the start of a chat session.
///
/// Shows the model, session ID, and a hint about slash commands.
pub fn print_welcome_banner(model: &str, session_id: &str) {
    println!();
    println!("  {} {}", "🧠", style("Contentry Chat").cyan().bold());
    println!(
        "  {}",
        style("Messages are ephemeral and live only in this session.").dim()
    );
    println!();
    println!("  {}  {}", style("Model:").bold(), style(model).dim());
    println!(
        "  {}  {}",
        style("Session:").bold(),
        style(&session_id[..8.min(session_id.len())]).dim()
    );
    println!();
    println!(
        "  {}",
        style("Type /help for commands, Ctrl+D to exit").dim()
    );
    println!("  {}", style("---").dim());
    println!();
}
