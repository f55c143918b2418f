use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::config::{DEFAULT_SELF_IDENTITY, ParserConfig};
use crate::export::{ExportFormat, PageLayout, build_render_instructions, write_export};
use crate::models::Message;
use crate::parsers::parse_chat_export_file;
use crate::search::SearchEngine;
use crate::tui::run_viewer;
use crate::utils::{format_path_with_tilde, sanitize_for_terminal};

#[derive(Parser)]
#[command(name = "chat-export-viewer")]
#[command(version = "0.1.0")]
#[command(about = "Browse, search and export HTML chat exports", long_about = None)]
pub struct Cli {
    /// Your display name in the export (decides which messages are yours)
    #[arg(long, global = true, value_name = "NAME", value_parser = parse_non_empty)]
    pub me: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open the interactive conversation viewer
    View {
        /// Chat export HTML file
        file: PathBuf,
    },
    /// Show statistics about a chat export
    Stats { file: PathBuf },
    /// Print the messages matching a query
    Search {
        file: PathBuf,
        /// Case-insensitive substring matched against sender and content
        query: String,
    },
    /// Write the conversation to a document
    Export {
        file: PathBuf,

        /// Destination file
        #[arg(short, long)]
        output: PathBuf,

        #[arg(short, long, value_enum, default_value_t = ExportFormat::Text)]
        format: ExportFormat,

        /// Page width in columns (text format)
        #[arg(long, default_value_t = 80)]
        width: usize,

        /// Lines per page including the footer (text format)
        #[arg(long, default_value_t = 60)]
        lines_per_page: usize,
    },
}

fn parse_non_empty(value: &str) -> Result<String, String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err("name must not be empty".to_string());
    }
    Ok(trimmed.to_string())
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = ParserConfig::with_self_identity(
        cli.me.clone().unwrap_or_else(|| DEFAULT_SELF_IDENTITY.to_string()),
    );

    match &cli.command {
        Some(Commands::View { file }) => {
            let messages = parse_chat_export_file(file, &config)?;
            run_viewer(messages, &display_name(file))?;
        }
        Some(Commands::Stats { file }) => {
            show_stats(file, &config)?;
        }
        Some(Commands::Search { file, query }) => {
            search_messages(file, query, &config)?;
        }
        Some(Commands::Export { file, output, format, width, lines_per_page }) => {
            let layout = PageLayout::new(*width, *lines_per_page);
            export_messages(file, output, *format, &layout, &config)
                .map_err(|e| anyhow::anyhow!("Export failed: {:#}", e))?;
        }
        None => {
            println!("Use --help for usage information");
        }
    }

    Ok(())
}

/// File name used as the viewer and document title
fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Per-sender message counts, most active first (ties by name)
fn sender_counts(messages: &[Message]) -> Vec<(String, usize)> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for message in messages {
        let sender = message.sender.trim();
        let sender = if sender.is_empty() { "Unknown" } else { sender };
        *counts.entry(sender).or_default() += 1;
    }

    let mut counts: Vec<(String, usize)> =
        counts.into_iter().map(|(sender, count)| (sender.to_string(), count)).collect();
    counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    counts
}

fn show_stats(file: &Path, config: &ParserConfig) -> Result<()> {
    let messages = parse_chat_export_file(file, config)?;

    let own = messages.iter().filter(|m| m.is_current_user).count();
    let liked = messages.iter().filter(|m| m.is_liked).count();
    let reactions: usize = messages.iter().map(|m| m.reactions.len()).sum();

    println!("Chat Export Statistics");
    println!("======================");
    println!("Total messages: {}", messages.len());
    println!("  From you ({}): {}", sanitize_for_terminal(&config.self_identity), own);
    println!("  From others: {}", messages.len() - own);
    println!("Liked by you: {}", liked);
    println!("Reactions: {}", reactions);

    let senders = sender_counts(&messages);
    if !senders.is_empty() {
        println!();
        println!("Messages per sender:");
        for (sender, count) in &senders {
            println!("  {}: {}", sanitize_for_terminal(sender), count);
        }
    }

    println!();
    println!("Export file: {}", sanitize_for_terminal(&format_path_with_tilde(file)));

    if let Some(first) = messages.first() {
        println!("First message: {}", sanitize_for_terminal(&first.timestamp));
    }
    if let Some(last) = messages.last() {
        println!("Last message: {}", sanitize_for_terminal(&last.timestamp));
    }

    Ok(())
}

fn search_messages(file: &Path, query: &str, config: &ParserConfig) -> Result<()> {
    let messages = parse_chat_export_file(file, config)?;
    let mut engine = SearchEngine::new(messages);
    let state = engine.search(query).clone();

    if state.match_indices.is_empty() {
        println!("No matches for \"{}\"", sanitize_for_terminal(query));
        return Ok(());
    }

    let total = state.match_indices.len();
    for (position, &index) in state.match_indices.iter().enumerate() {
        let message = &engine.messages()[index];
        println!(
            "[{}/{}] #{} {}: {}",
            position + 1,
            total,
            index,
            sanitize_for_terminal(&message.sender),
            sanitize_for_terminal(&message.content)
        );
    }

    Ok(())
}

fn export_messages(
    file: &Path,
    output: &Path,
    format: ExportFormat,
    layout: &PageLayout,
    config: &ParserConfig,
) -> Result<()> {
    let messages = parse_chat_export_file(file, config)?;
    let instructions = build_render_instructions(&messages);
    let summary = write_export(output, format, &instructions, layout, &display_name(file))
        .context("Could not create export document")?;

    println!(
        "Exported {} messages ({} pages) to {}",
        summary.messages,
        summary.pages,
        sanitize_for_terminal(&format_path_with_tilde(output))
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    fn message(sender: &str) -> Message {
        Message {
            index: 0,
            sender: sender.to_string(),
            content: "hi".to_string(),
            timestamp: String::new(),
            reactions: vec![],
            is_liked: false,
            is_current_user: false,
        }
    }

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_me_flag_is_global_and_trimmed() {
        let cli = Cli::try_parse_from(["chat-export-viewer", "stats", "a.html", "--me", " Bob "])
            .unwrap();
        assert_eq!(cli.me.as_deref(), Some("Bob"));
    }

    #[test]
    fn test_me_flag_rejects_empty() {
        assert!(Cli::try_parse_from(["chat-export-viewer", "--me", "  ", "stats", "a"]).is_err());
    }

    #[test]
    fn test_export_defaults() {
        let cli = Cli::try_parse_from(["chat-export-viewer", "export", "a.html", "-o", "out.txt"])
            .unwrap();
        match cli.command {
            Some(Commands::Export { format, width, lines_per_page, .. }) => {
                assert_eq!(format, ExportFormat::Text);
                assert_eq!(width, 80);
                assert_eq!(lines_per_page, 60);
            }
            _ => panic!("expected export command"),
        }
    }

    #[test]
    fn test_sender_counts_sorted() {
        let messages =
            vec![message("Bob"), message("Alice"), message("Bob"), message(" "), message("Carol")];

        let counts = sender_counts(&messages);

        assert_eq!(
            counts,
            vec![
                ("Bob".to_string(), 2),
                ("Alice".to_string(), 1),
                ("Carol".to_string(), 1),
                ("Unknown".to_string(), 1),
            ]
        );
    }

    #[test]
    fn test_display_name_uses_file_name() {
        assert_eq!(display_name(Path::new("/tmp/inbox/message_1.html")), "message_1.html");
    }
}
