//! Error types for the attribute resolution engine

use thiserror::Error;

/// Errors surfaced by the strict parsing entry points.
///
/// The permissive resolvers never return these: they fall back to a typed
/// default and emit a gated diagnostic instead. Only callers that must
/// distinguish a genuine parse failure from a valid zero see a `ParseError`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("null string")]
    NullString,

    #[error("malformed integer: {value}")]
    MalformedInt { value: String },

    #[error("invalid color: {message}")]
    InvalidColor { message: String },
}

pub type Result<T> = std::result::Result<T, ParseError>;

impl ParseError {
    pub fn malformed_int(value: impl Into<String>) -> Self {
        Self::MalformedInt {
            value: value.into(),
        }
    }

    pub fn invalid_color(message: impl Into<String>) -> Self {
        Self::InvalidColor {
            message: message.into(),
        }
    }
}
