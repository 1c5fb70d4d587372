//! Text bodies carried by text messages.

use crate::messages::domain::{MessageError, MessageResult};
use std::fmt;

/// A non-blank message body.
///
/// Unlike addressing fields the body is not trimmed: leading indentation and
/// trailing newlines reach the recipient as written.
///
/// # Examples
///
/// ```
/// use switchboard::messages::domain::TextBody;
///
/// let body = TextBody::new("  indented\n").expect("non-blank body");
/// assert_eq!(body.as_str(), "  indented\n");
/// assert!(TextBody::new(" \t ").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextBody(String);

impl TextBody {
    /// Creates a text body.
    ///
    /// # Errors
    ///
    /// Returns [`MessageError::InvalidArgument`] when `text` is blank.
    pub fn new(text: impl Into<String>) -> MessageResult<Self> {
        let body = text.into();
        if body.trim().is_empty() {
            return Err(MessageError::missing("text"));
        }
        Ok(Self(body))
    }

    /// Returns the body as written.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for TextBody {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TextBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<&str> for TextBody {
    type Error = MessageError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<String> for TextBody {
    type Error = MessageError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
