//! Session transcript rendering for the terminal.
//!
//! User messages render right-leaning in cyan, assistant and system
//! messages left-aligned, mirroring how the conversation reads in a chat
//! client.

use anyhow::{Result, bail};
use console::style;

use debugmate_core::repository::chat::ChatRepository;
use debugmate_types::chat::MessageRole;

use crate::state::AppState;

/// Print the full transcript of a session.
pub async fn show_transcript(state: &AppState, session_id: i64) -> Result<()> {
    let repo = state.conversation.chat_repo();

    let Some((session, project)) = repo.get_session_with_project(session_id).await? else {
        bail!("Session {session_id} not found");
    };

    let messages = repo.list_messages(session.id).await?;

    println!();
    println!(
        "  Session {} of project {} ({})",
        style(session.id).cyan(),
        style(project.id).cyan(),
        style(&project.repo_url).dim()
    );
    println!();

    if messages.is_empty() {
        println!("  {}", style("No messages yet.").dim());
        println!();
        return Ok(());
    }

    for message in &messages {
        let timestamp = message.created_at.format("%Y-%m-%d %H:%M:%S");
        match message.role {
            MessageRole::User => {
                println!(
                    "  {} {}",
                    style("you").cyan().bold(),
                    style(timestamp).dim()
                );
            }
            MessageRole::Assistant => {
                println!(
                    "  {} {}",
                    style("assistant").green().bold(),
                    style(timestamp).dim()
                );
            }
            MessageRole::System => {
                println!(
                    "  {} {}",
                    style("system").yellow().bold(),
                    style(timestamp).dim()
                );
            }
        }
        for line in message.content.lines() {
            println!("    {line}");
        }
        println!();
    }

    Ok(())
}
