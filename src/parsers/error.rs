use thiserror::Error;

/// Input that cannot be turned into a message list at all
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Input is empty")]
    EmptyInput,

    #[error("Input contains binary data (NUL bytes) and is not a markup document")]
    BinaryInput,

    #[error("Input contains no markup tags")]
    NotMarkup,

    #[error("Invalid selector '{selector}': {reason}")]
    InvalidSelector { selector: String, reason: String },
}
