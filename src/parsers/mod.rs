//! Parsers for locally exported chat-history HTML
//!
//! # Error Handling Strategy
//!
//! Parsing follows a **graceful degradation** approach:
//!
//! - **Data-shape irregularities**: Missing sender/content/timestamp/reaction elements never
//!   fail a parse. The affected field is left empty and the message is kept.
//!
//! - **Garbled blocks**: Blocks whose content carries the export's known corrupted encoding
//!   (Telugu/Kannada code points) are dropped and counted in the [`ParseReport`].
//!
//! - **Total failure**: Only input that cannot be read as markup at all (empty, binary, no tags)
//!   or an invalid configured selector yields a [`ParseError`]. No partial result is returned.
//!
//! - **No output**: The core never prints. The file-level wrapper
//!   [`parse_chat_export_file`] reports skip counts on stderr like the other CLI paths.

pub mod chat_export;
pub mod error;
pub mod markup;

pub use chat_export::{
    ParseReport, ParsedExport, parse_chat_export, parse_chat_export_file,
    parse_chat_export_with_report,
};
pub use error::ParseError;
