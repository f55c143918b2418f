//! Incremental substring search over a parsed conversation.
//!
//! [`SearchEngine`] owns the message list produced by one parse and keeps the
//! [`SearchState`](crate::models::SearchState) for the current query. Presentation code
//! does not poll for the focused message: it subscribes and is told the message index
//! every time a new match becomes current.

pub mod engine;

pub use engine::{SearchEngine, find_matches};
