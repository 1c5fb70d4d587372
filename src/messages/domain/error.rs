//! Error types for message construction and field access.

use super::Channel;
use std::convert::Infallible;
use thiserror::Error;

/// Errors raised while building or inspecting an outbound message.
///
/// Construction failures are reported immediately so a caller never holds a
/// half-valid message. Serialisation of a constructed message cannot fail.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MessageError {
    /// A required field is missing, blank, or outside its permitted values.
    #[error("invalid argument '{field}': {reason}")]
    InvalidArgument {
        /// The offending field name as it appears on the wire.
        field: &'static str,
        /// Description of the failure.
        reason: String,
    },

    /// The accessor has no meaning for the message's channel.
    #[error("{operation} is not supported for {channel} messages")]
    UnsupportedOperation {
        /// The accessor that was invoked.
        operation: &'static str,
        /// The channel of the message it was invoked on.
        channel: Channel,
    },
}

impl MessageError {
    /// Creates an [`MessageError::InvalidArgument`] for a blank required field.
    #[must_use]
    pub fn missing(field: &'static str) -> Self {
        Self::InvalidArgument {
            field,
            reason: "must not be empty".to_owned(),
        }
    }

    /// Creates an [`MessageError::InvalidArgument`] with a custom reason.
    #[must_use]
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            field,
            reason: reason.into(),
        }
    }

    /// Creates an [`MessageError::UnsupportedOperation`].
    #[must_use]
    pub const fn unsupported(operation: &'static str, channel: Channel) -> Self {
        Self::UnsupportedOperation { operation, channel }
    }

    /// Returns the field name when this is an invalid-argument error.
    #[must_use]
    pub const fn field(&self) -> Option<&'static str> {
        match self {
            Self::InvalidArgument { field, .. } => Some(*field),
            Self::UnsupportedOperation { .. } => None,
        }
    }
}

impl From<Infallible> for MessageError {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}

/// Error returned while parsing a channel from its wire string.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown channel: {0}")]
pub struct ParseChannelError(pub String);

/// Error returned while parsing a message subtype from its wire string.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown message type: {0}")]
pub struct ParseSubtypeError(pub String);

/// Result type for message construction.
pub type MessageResult<T> = Result<T, MessageError>;

/// Trims `value` and rejects it if nothing remains.
pub(crate) fn require(field: &'static str, value: impl Into<String>) -> MessageResult<String> {
    let trimmed = value.into().trim().to_owned();
    if trimmed.is_empty() {
        return Err(MessageError::missing(field));
    }
    Ok(trimmed)
}
