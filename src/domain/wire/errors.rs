//! Error types for the wire codec.

use thiserror::Error;

/// Errors that occur while building an outbound message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// A key or value contains one of the reserved delimiters `|` or `=`.
    #[error("field '{field}' contains reserved character '{ch}'")]
    ReservedCharacter { field: String, ch: char },
}

/// Errors that occur while parsing an inbound message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The payload is empty.
    #[error("empty payload")]
    Empty,

    /// The transport encoding could not be reversed.
    #[error("invalid transport encoding: {0}")]
    Transport(String),

    /// The decoded bytes are not valid UTF-8.
    #[error("payload is not valid UTF-8")]
    NotUtf8,

    /// A segment has no `=` separating key from value.
    #[error("segment '{0}' is missing a '=' separator")]
    MissingSeparator(String),

    /// The same key appears twice with different values.
    #[error("key '{0}' appears twice with conflicting values")]
    ConflictingKey(String),
}
