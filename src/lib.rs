//! Chat Export Viewer - Browse, search and export HTML chat exports
//!
//! This library turns a social-platform chat export (an HTML page of message blocks) into
//! an ordered list of messages and provides:
//!
//! - Parsing of the export markup with a configurable self identity
//! - Case-insensitive substring search with circular match navigation
//! - Paginated text, Markdown and JSON export documents
//! - An interactive terminal viewer
//!
//! # Example
//!
//! ```
//! use chat_export_viewer::{ParserConfig, SearchEngine, parse_chat_export};
//!
//! let html = r#"<div class="uiBoxWhite noborder">
//!     <div class="_a6-h">Alice</div><div class="_a6-p">Pizza tonight?</div>
//!     <div class="_a6-o">Jan 05, 2024 3:12 pm</div>
//! </div>"#;
//!
//! let messages = parse_chat_export(html, &ParserConfig::with_self_identity("Bob"))?;
//! let mut engine = SearchEngine::new(messages);
//! assert_eq!(engine.search("PIZZA").match_indices, vec![0]);
//! # Ok::<(), chat_export_viewer::ParseError>(())
//! ```

pub mod cli;
pub mod clipboard;
pub mod config;
pub mod export;
pub mod models;
pub mod parsers;
pub mod search;
pub mod tui;
pub mod utils;

// Re-export commonly used types
pub use config::{MarkupSchema, ParserConfig};
pub use models::{Message, NavDirection, RenderInstruction, SearchState};
pub use parsers::{ParseError, parse_chat_export, parse_chat_export_file};
pub use search::SearchEngine;
pub use utils::paths::format_path_with_tilde;
