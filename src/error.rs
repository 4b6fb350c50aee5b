//! Error types for html-delta.
//!
//! Conversion of parseable markup never fails: `convert()` returns a
//! `Delta` for any input the built-in parser accepts (which is any input,
//! since html5ever is error-recovering). Errors exist only at the edges:
//! an injected parser that rejects its input, or a document store that
//! fails to write.

use thiserror::Error;

/// Errors that can occur at the crate's boundaries.
#[derive(Debug, Error)]
pub enum DeltaError {
    /// An injected markup parser could not produce a tree.
    #[error("parse error: {0}")]
    Parse(String),

    /// A document store failed to read or write.
    #[error("store error: {0}")]
    Store(String),

    /// Serializing a delta to JSON failed.
    #[error("serialization error: {0}")]
    Serialize(String),
}

/// Result type alias for html-delta operations.
pub type DeltaResult<T> = Result<T, DeltaError>;

impl DeltaError {
    /// Create a parse error with a message.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Create a store error from any error type.
    pub fn store(err: impl std::fmt::Display) -> Self {
        Self::Store(err.to_string())
    }

    /// Create a serialization error from any error type.
    pub fn serialize(err: impl std::error::Error) -> Self {
        Self::Serialize(err.to_string())
    }
}
