use anyhow::Result;
use chat_export_viewer::cli::commands;

fn main() -> Result<()> {
    commands::run()
}
