//! Data models for parsed chat exports.
//!
//! This module defines the data structures shared by the parser, the search engine
//! and the presentation/export collaborators:
//!
//! - [`Message`] - One normalized chat message, immutable once parsed
//! - [`SearchState`] - Current query, ordered match indices and navigation cursor
//! - [`RenderInstruction`] - Per-message instruction consumed by document exporters
//!
//! All models derive serde traits so they can be handed to the JSON exporter as-is.

pub mod message;
pub mod render;
pub mod search;

pub use message::Message;
pub use render::{Alignment, RenderInstruction};
pub use search::{NavDirection, SearchState};
