/// CLI binary integration tests using assert_cmd
///
/// These tests invoke the actual binary and verify command-line behavior
mod common;

use std::process::Command;

use assert_cmd::prelude::*;
use common::{BlockBuilder, ChatExportBuilder};
use predicates::prelude::*;

fn bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_chat-export-viewer"))
}

fn sample_export() -> ChatExportBuilder {
    ChatExportBuilder::new().with_conversation(vec![
        BlockBuilder::new("Alice", "Pizza tonight?").timestamp("Jan 05, 2024 3:12 pm"),
        BlockBuilder::from_me("Sure, pizza works").liked().reaction("😂 Alice"),
        BlockBuilder::new("Alice", "See you at 8").timestamp("Jan 05, 2024 3:20 pm"),
    ])
}

#[test]
fn test_cli_no_command_shows_help_message() {
    bin().assert().success().stdout(predicate::str::contains("Use --help for usage information"));
}

#[test]
fn test_cli_help_flag() {
    bin()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Browse, search and export HTML chat exports"))
        .stdout(predicate::str::contains("stats"))
        .stdout(predicate::str::contains("--me"));
}

#[test]
fn test_cli_version_flag() {
    bin().arg("--version").assert().success().stdout(predicate::str::contains("0.1.0"));
}

#[test]
fn test_cli_invalid_command() {
    bin().arg("invalid-command").assert().failure();
}

#[test]
fn test_cli_stats_command() {
    let (_dir, path) = sample_export().write();

    bin()
        .arg("stats")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Chat Export Statistics"))
        .stdout(predicate::str::contains("Total messages: 3"))
        .stdout(predicate::str::contains("From you (Kumar Adarsh): 1"))
        .stdout(predicate::str::contains("From others: 2"))
        .stdout(predicate::str::contains("Liked by you: 1"))
        .stdout(predicate::str::contains("Alice: 2"))
        .stdout(predicate::str::contains("First message: Jan 05, 2024 3:12 pm"))
        .stdout(predicate::str::contains("Last message: Jan 05, 2024 3:20 pm"));
}

#[test]
fn test_cli_me_flag_changes_self_identity() {
    let (_dir, path) = sample_export().write();

    bin()
        .args(["--me", "Alice", "stats"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("From you (Alice): 2"))
        .stdout(predicate::str::contains("Liked by you: 0"));
}

#[test]
fn test_cli_stats_reports_skipped_garbled_blocks() {
    let (_dir, path) = ChatExportBuilder::new()
        .with_conversation(vec![
            BlockBuilder::new("Alice", "hello"),
            BlockBuilder::new("Alice", "తెలుగు"),
        ])
        .write();

    bin()
        .arg("stats")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Total messages: 1"))
        .stderr(predicate::str::contains("1 garbled blocks skipped"));
}

#[test]
fn test_cli_stats_empty_export_warns() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let path = temp_dir.path().join("empty.html");
    std::fs::write(&path, "<html><body><p>No messages</p></body></html>").unwrap();

    bin()
        .arg("stats")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Total messages: 0"))
        .stderr(predicate::str::contains("No message blocks found"));
}

#[test]
fn test_cli_search_prints_matches() {
    let (_dir, path) = sample_export().write();

    bin()
        .args(["search"])
        .arg(&path)
        .arg("PIZZA")
        .assert()
        .success()
        .stdout(predicate::str::contains("[1/2] #0 Alice: Pizza tonight?"))
        .stdout(predicate::str::contains("[2/2] #1 Kumar Adarsh: Sure, pizza works"));
}

#[test]
fn test_cli_search_no_matches() {
    let (_dir, path) = sample_export().write();

    bin()
        .arg("search")
        .arg(&path)
        .arg("sushi")
        .assert()
        .success()
        .stdout(predicate::str::contains("No matches for \"sushi\""));
}

#[test]
fn test_cli_search_output_is_sanitized() {
    let (_dir, path) =
        ChatExportBuilder::new().with_block(BlockBuilder::new("Eve", "boom\x1b[2J done")).write();

    bin()
        .arg("search")
        .arg(&path)
        .arg("boom")
        .assert()
        .success()
        .stdout(predicate::str::contains("Eve: boom"))
        .stdout(predicate::str::contains("\x1b").not());
}

#[test]
fn test_cli_export_text() {
    let (dir, path) = sample_export().write();
    let output = dir.path().join("chat.txt");

    bin()
        .arg("export")
        .arg(&path)
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 3 messages (1 pages) to"));

    let document = std::fs::read_to_string(&output).unwrap();
    assert!(document.contains("Pizza tonight?"));
    assert!(document.contains("Page 1 of 1"));
}

#[test]
fn test_cli_export_json() {
    let (dir, path) = sample_export().write();
    let output = dir.path().join("chat.json");

    bin()
        .arg("export")
        .arg(&path)
        .args(["--format", "json", "-o"])
        .arg(&output)
        .assert()
        .success();

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
    let items = json.as_array().unwrap();
    assert_eq!(items.len(), 3);
    assert_eq!(items[1]["alignment"], "right");
    assert_eq!(items[1]["isLiked"], true);
}

#[test]
fn test_cli_export_to_missing_directory_fails() {
    let (dir, path) = sample_export().write();
    let output = dir.path().join("missing").join("chat.md");

    bin()
        .arg("export")
        .arg(&path)
        .args(["--format", "markdown", "--output"])
        .arg(&output)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Export failed"));
}

#[test]
fn test_cli_missing_file_fails() {
    bin()
        .args(["stats", "/nonexistent/message_1.html"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to open chat export"));
}

#[test]
fn test_cli_rejects_non_markup_file() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let path = temp_dir.path().join("notes.txt");
    std::fs::write(&path, "just some notes").unwrap();

    bin()
        .arg("stats")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid chat export file"));
}
