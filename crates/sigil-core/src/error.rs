//! Error types for the SIGIL protocol

use thiserror::Error;

use crate::id::MessageTypeId;

/// The abstract element kinds a payload may carry.
///
/// Concrete representations come from the active algebraic suite; this core
/// only distinguishes the two kinds so missing constructors can be reported
/// precisely.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Point,
    Scalar,
}

impl std::fmt::Display for ElementKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ElementKind::Point => write!(f, "point"),
            ElementKind::Scalar => write!(f, "scalar"),
        }
    }
}

/// Payload-level codec errors.
#[derive(Error, Debug)]
pub enum CodecError {
    #[error("unexpected end of input: needed {needed} more bytes, {remaining} remaining")]
    UnexpectedEof { needed: usize, remaining: usize },

    #[error("length prefix {0} exceeds remaining input")]
    LengthOverflow(usize),

    #[error("invalid UTF-8 in string field")]
    InvalidUtf8,

    #[error("invalid presence tag {0} for optional field")]
    InvalidPresenceTag(u8),

    #[error("no constructor for abstract {0} field (no suite supplied)")]
    MissingConstructor(ElementKind),

    #[error("{kind} element rejected its encoding: {reason}")]
    MalformedElement { kind: ElementKind, reason: String },

    #[error("{0} trailing bytes after decoded value")]
    TrailingBytes(usize),
}

/// Framing-level errors returned by marshal/unmarshal.
#[derive(Error, Debug)]
pub enum SigilError {
    #[error("message type {name} not registered")]
    TypeNotRegistered { name: String },

    #[error("frame too short: expected at least {expected} bytes, got {actual}")]
    TruncatedFrame { expected: usize, actual: usize },

    #[error("encoding failed: {0}")]
    EncodingFailed(#[source] CodecError),

    #[error("decoding failed: {0}")]
    DecodingFailed(#[source] CodecError),
}

impl SigilError {
    /// Unregistered-type error for an identifier read off the wire.
    pub fn unknown_id(id: MessageTypeId) -> Self {
        SigilError::TypeNotRegistered {
            name: id.to_string(),
        }
    }
}

/// Result type for SIGIL operations.
pub type SigilResult<T> = Result<T, SigilError>;
