use anyhow::{Context, Result};

use crate::config::LIKE_EMOJI;
use crate::models::{Alignment, RenderInstruction};

/// Render the conversation as Markdown, one section per message
pub fn render_markdown(instructions: &[RenderInstruction], title: &str) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push(format!("# {}", title));
    lines.push(String::new());
    lines.push(format!("{} messages", instructions.len()));
    lines.push(String::new());

    for instruction in instructions {
        lines.push("---".into());
        lines.push(String::new());

        let author =
            if instruction.sender.is_empty() { "Unknown" } else { instruction.sender.as_str() };
        let heading = match instruction.alignment {
            Alignment::Right => format!("### {} (you)", author),
            Alignment::Left => format!("### {}", author),
        };
        lines.push(heading);
        if !instruction.timestamp.is_empty() {
            lines.push(format!("*{}*", instruction.timestamp));
        }
        lines.push(String::new());

        for line in instruction.content.lines() {
            lines.push(format!("> {}", line));
        }
        if instruction.is_liked {
            lines.push(format!("> {}", LIKE_EMOJI));
        }

        if !instruction.reactions.is_empty() {
            lines.push(String::new());
            lines.push(format!("Reactions: {}", instruction.reactions.join(", ")));
        }
        lines.push(String::new());
    }

    lines.join("\n")
}

/// Pretty-printed JSON array of the instructions
pub fn render_json(instructions: &[RenderInstruction]) -> Result<String> {
    serde_json::to_string_pretty(instructions).context("Failed to serialize export to JSON")
}
