//! Parser configuration: who "self" is and where fields live in the export markup.

use scraper::Selector;

use crate::parsers::ParseError;

/// Identity of the conversation owner when no override is given
pub const DEFAULT_SELF_IDENTITY: &str = "Kumar Adarsh";

/// Emoji the export prefixes to the liker's name on liked messages
pub const LIKE_EMOJI: &str = "❤️";

/// CSS selectors describing the export's markup schema
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkupSchema {
    /// One element per message block
    pub block: String,
    pub sender: String,
    pub content: String,
    pub timestamp: String,
    /// One element per reaction, relative to the block
    pub reaction: String,
}

impl Default for MarkupSchema {
    fn default() -> Self {
        Self {
            block: ".uiBoxWhite.noborder".to_string(),
            sender: "._a6-h".to_string(),
            content: "._a6-p".to_string(),
            timestamp: "._a6-o".to_string(),
            reaction: "._a6-q li".to_string(),
        }
    }
}

/// [`MarkupSchema`] with every selector compiled
#[derive(Debug, Clone)]
pub struct CompiledSchema {
    pub block: Selector,
    pub sender: Selector,
    pub content: Selector,
    pub timestamp: Selector,
    pub reaction: Selector,
}

impl MarkupSchema {
    /// Compile all selectors, failing on the first one that is not valid CSS
    pub fn compile(&self) -> Result<CompiledSchema, ParseError> {
        Ok(CompiledSchema {
            block: compile_selector(&self.block)?,
            sender: compile_selector(&self.sender)?,
            content: compile_selector(&self.content)?,
            timestamp: compile_selector(&self.timestamp)?,
            reaction: compile_selector(&self.reaction)?,
        })
    }
}

fn compile_selector(selector: &str) -> Result<Selector, ParseError> {
    Selector::parse(selector).map_err(|e| ParseError::InvalidSelector {
        selector: selector.to_string(),
        reason: format!("{:?}", e),
    })
}

/// Settings for one parse
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserConfig {
    pub self_identity: String,
    pub schema: MarkupSchema,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self { self_identity: DEFAULT_SELF_IDENTITY.to_string(), schema: MarkupSchema::default() }
    }
}

impl ParserConfig {
    pub fn with_self_identity(self_identity: impl Into<String>) -> Self {
        Self { self_identity: self_identity.into(), ..Self::default() }
    }

    /// Marker the export appends to content the viewer liked, e.g. `"❤️ Jane Doe"`
    pub fn self_like_marker(&self) -> String {
        format!("{} {}", LIKE_EMOJI, self.self_identity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_schema_compiles() {
        assert!(MarkupSchema::default().compile().is_ok());
    }

    #[test]
    fn test_invalid_selector_is_reported() {
        let schema = MarkupSchema { content: "._a6-p[".to_string(), ..MarkupSchema::default() };
        let err = schema.compile().unwrap_err();
        match err {
            ParseError::InvalidSelector { selector, .. } => assert_eq!(selector, "._a6-p["),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_self_like_marker() {
        let config = ParserConfig::with_self_identity("Jane Doe");
        assert_eq!(config.self_like_marker(), "❤️ Jane Doe");
        assert_eq!(config.schema, MarkupSchema::default());
    }
}
