//! Channel option blocks emitted alongside message content.

use crate::messages::domain::{
    MessageResult,
    base::{Payload, insert_optional, non_blank},
    error::require,
};

/// Locale used by WhatsApp templates when none is given.
pub const DEFAULT_WHATSAPP_LOCALE: &str = "en_US";

/// Template locale resolution policy. The API accepts only this value.
pub const WHATSAPP_POLICY: &str = "deterministic";

/// Messenger delivery category and message tag.
///
/// The `messenger` sub-object is emitted only when at least one of the two
/// is present; an empty block is never sent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessengerObject {
    category: Option<String>,
    tag: Option<String>,
}

impl MessengerObject {
    /// Creates Messenger options. Blank values are treated as absent.
    #[must_use]
    pub fn new(category: Option<String>, tag: Option<String>) -> Self {
        Self {
            category: non_blank(category),
            tag: non_blank(tag),
        }
    }

    /// Returns the delivery category, e.g. `response` or `update`.
    #[must_use]
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    /// Returns the message tag.
    #[must_use]
    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    /// Returns `true` when neither category nor tag is set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.category.is_none() && self.tag.is_none()
    }

    /// Renders the `messenger` sub-object, or `None` when empty.
    #[must_use]
    pub fn to_payload(&self) -> Option<Payload> {
        if self.is_empty() {
            return None;
        }
        let mut payload = Payload::new();
        insert_optional(&mut payload, "category", self.category.as_deref());
        insert_optional(&mut payload, "tag", self.tag.as_deref());
        Some(payload)
    }
}

/// WhatsApp template options: locale plus the fixed resolution policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WhatsAppObject {
    locale: String,
}

impl WhatsAppObject {
    /// Creates WhatsApp options for `locale`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::messages::domain::MessageError::InvalidArgument`]
    /// when `locale` is blank.
    pub fn new(locale: impl Into<String>) -> MessageResult<Self> {
        Ok(Self {
            locale: require("locale", locale)?,
        })
    }

    /// Returns the template locale.
    #[must_use]
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Returns the resolution policy, always [`WHATSAPP_POLICY`].
    #[must_use]
    pub const fn policy(&self) -> &'static str {
        WHATSAPP_POLICY
    }

    /// Renders the `whatsapp` sub-object.
    #[must_use]
    pub fn to_payload(&self) -> Payload {
        let mut payload = Payload::new();
        payload.insert("policy".to_owned(), WHATSAPP_POLICY.into());
        payload.insert("locale".to_owned(), self.locale.clone().into());
        payload
    }
}

impl Default for WhatsAppObject {
    fn default() -> Self {
        Self {
            locale: DEFAULT_WHATSAPP_LOCALE.to_owned(),
        }
    }
}
