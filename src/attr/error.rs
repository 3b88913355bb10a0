use thiserror::Error;

/// Errors produced when decoding a style attribute value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AttrError {
    #[error("invalid color '{input}': {message}")]
    Color { input: String, message: String },

    #[error("unknown cap style '{0}'")]
    Cap(String),
}
