//! Error types for the fallible edges of a conversion.
//!
//! Converting a token tree never fails; these cover option parsing, reading
//! token trees and looking up output formats.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("unknown reference type '{0}' (expected none, structured or native)")]
    UnknownReferenceType(String),

    #[error("invalid namespace key '{0}': expected an integer")]
    InvalidNamespaceKey(String),

    #[error("invalid token tree: {0}")]
    InvalidTokens(#[from] serde_json::Error),

    #[error("event format '{0}' not found")]
    FormatNotFound(String),

    #[error("failed to encode events: {0}")]
    Encode(String),

    #[error("failed to write events: {0}")]
    Write(#[from] std::fmt::Error),
}

/// Failure of the inline sub-parser on one text run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("inline parse failed: {message}")]
pub struct InlineParseError {
    pub message: String,
}

impl InlineParseError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
