//! Shared scaffolding embedded by every outbound message variant.
//!
//! [`BaseMessage`] carries the fields common to all channels and renders the
//! top level of the canonical payload. Variants embed it by composition and
//! implement [`OutboundMessage`] to add their own content keys.

use super::{
    Channel, MessageError, MessageResult, MessageSubtype, MessengerObject, error::require,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Canonical payload mapping handed to the transport.
pub type Payload = Map<String, Value>;

/// Callback payload format requested from the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WebhookVersion {
    /// Legacy callback format.
    #[serde(rename = "v0.1")]
    V0_1,
    /// Current callback format.
    #[serde(rename = "v1")]
    V1,
}

impl WebhookVersion {
    /// Returns the wire representation of the version.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::V0_1 => "v0.1",
            Self::V1 => "v1",
        }
    }
}

impl fmt::Display for WebhookVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for WebhookVersion {
    type Error = MessageError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim() {
            "v0.1" => Ok(Self::V0_1),
            "v1" => Ok(Self::V1),
            _ => Err(MessageError::invalid(
                "webhook_version",
                format!("unsupported webhook version '{value}'"),
            )),
        }
    }
}

/// Fields shared by every outbound message.
///
/// # Invariants
///
/// - `to` and `from` are non-empty after trimming
/// - `channel` and `message_type` are fixed at construction
/// - optional fields are either absent or non-blank
///
/// # Examples
///
/// ```
/// use switchboard::messages::domain::{BaseMessage, Channel, MessageSubtype};
///
/// let base = BaseMessage::new(Channel::Sms, MessageSubtype::Text, "447700900000", "Acme")
///     .expect("valid base");
/// let payload = base.to_payload();
/// assert_eq!(payload["channel"], "sms");
/// assert!(!payload.contains_key("client_ref"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseMessage {
    to: String,
    from: String,
    channel: Channel,
    message_type: MessageSubtype,
    client_ref: Option<String>,
    webhook_url: Option<String>,
    webhook_version: Option<WebhookVersion>,
    ttl: Option<u32>,
}

impl BaseMessage {
    /// Creates the base fields for a message of the given channel and subtype.
    ///
    /// # Errors
    ///
    /// Returns [`MessageError::InvalidArgument`] when `to` or `from` is blank.
    pub fn new(
        channel: Channel,
        message_type: MessageSubtype,
        to: impl Into<String>,
        from: impl Into<String>,
    ) -> MessageResult<Self> {
        Ok(Self {
            to: require("to", to)?,
            from: require("from", from)?,
            channel,
            message_type,
            client_ref: None,
            webhook_url: None,
            webhook_version: None,
            ttl: None,
        })
    }

    /// Returns the recipient identifier.
    #[must_use]
    pub fn to(&self) -> &str {
        &self.to
    }

    /// Returns the sender identifier.
    #[must_use]
    pub fn from(&self) -> &str {
        &self.from
    }

    /// Returns the delivery channel.
    #[must_use]
    pub const fn channel(&self) -> Channel {
        self.channel
    }

    /// Returns the message subtype.
    #[must_use]
    pub const fn message_type(&self) -> MessageSubtype {
        self.message_type
    }

    /// Returns the caller-supplied correlation reference.
    #[must_use]
    pub fn client_ref(&self) -> Option<&str> {
        self.client_ref.as_deref()
    }

    /// Returns the status callback URL.
    #[must_use]
    pub fn webhook_url(&self) -> Option<&str> {
        self.webhook_url.as_deref()
    }

    /// Returns the requested callback format.
    #[must_use]
    pub const fn webhook_version(&self) -> Option<WebhookVersion> {
        self.webhook_version
    }

    /// Returns the time-to-live in seconds.
    #[must_use]
    pub const fn ttl(&self) -> Option<u32> {
        self.ttl
    }

    /// Replaces the recipient.
    ///
    /// # Errors
    ///
    /// Returns [`MessageError::InvalidArgument`] when `to` is blank; the
    /// previous recipient is kept.
    pub fn set_to(&mut self, to: impl Into<String>) -> MessageResult<()> {
        self.to = require("to", to)?;
        Ok(())
    }

    /// Replaces the sender.
    ///
    /// # Errors
    ///
    /// Returns [`MessageError::InvalidArgument`] when `from` is blank; the
    /// previous sender is kept.
    pub fn set_from(&mut self, from: impl Into<String>) -> MessageResult<()> {
        self.from = require("from", from)?;
        Ok(())
    }

    /// Sets or clears the correlation reference. Blank values clear it.
    pub fn set_client_ref(&mut self, client_ref: Option<String>) {
        self.client_ref = non_blank(client_ref);
    }

    /// Sets or clears the status callback URL. Blank values clear it.
    pub fn set_webhook_url(&mut self, webhook_url: Option<String>) {
        self.webhook_url = non_blank(webhook_url);
    }

    /// Sets or clears the requested callback format.
    pub const fn set_webhook_version(&mut self, webhook_version: Option<WebhookVersion>) {
        self.webhook_version = webhook_version;
    }

    /// Sets or clears the time-to-live.
    pub const fn set_ttl(&mut self, ttl: Option<u32>) {
        self.ttl = ttl;
    }

    /// Renders the top level of the canonical payload.
    ///
    /// Required keys are always present; optional keys appear only when set.
    #[must_use]
    pub fn to_payload(&self) -> Payload {
        let mut payload = Payload::new();
        payload.insert("message_type".to_owned(), self.message_type.as_str().into());
        payload.insert("to".to_owned(), self.to.clone().into());
        payload.insert("from".to_owned(), self.from.clone().into());
        payload.insert("channel".to_owned(), self.channel.as_str().into());
        insert_optional(&mut payload, "client_ref", self.client_ref.as_deref());
        insert_optional(&mut payload, "webhook_url", self.webhook_url.as_deref());
        insert_optional(
            &mut payload,
            "webhook_version",
            self.webhook_version.map(WebhookVersion::as_str),
        );
        if let Some(ttl) = self.ttl {
            payload.insert("ttl".to_owned(), ttl.into());
        }
        payload
    }
}

/// Capability shared by every (channel, subtype) message variant.
///
/// Implementors supply the embedded [`BaseMessage`] and their own payload
/// keys; [`OutboundMessage::to_payload`] combines the two.
pub trait OutboundMessage: Send + Sync {
    /// Returns the embedded base fields.
    fn base(&self) -> &BaseMessage;

    /// Returns the embedded base fields for mutation.
    fn base_mut(&mut self) -> &mut BaseMessage;

    /// Adds the variant-specific keys to a payload that already holds the
    /// base fields.
    fn extend_payload(&self, payload: &mut Payload);

    /// Renders the canonical payload for this message.
    fn to_payload(&self) -> Payload {
        let mut payload = self.base().to_payload();
        self.extend_payload(&mut payload);
        payload
    }

    /// Returns the delivery channel.
    fn channel(&self) -> Channel {
        self.base().channel()
    }

    /// Returns the message subtype.
    fn message_type(&self) -> MessageSubtype {
        self.base().message_type()
    }

    /// Returns the template locale.
    ///
    /// # Errors
    ///
    /// Returns [`MessageError::UnsupportedOperation`] for variants without a
    /// locale.
    fn locale(&self) -> MessageResult<&str> {
        Err(MessageError::unsupported("locale", self.channel()))
    }

    /// Returns the Messenger category and tag options.
    ///
    /// # Errors
    ///
    /// Returns [`MessageError::UnsupportedOperation`] for non-Messenger
    /// variants.
    fn messenger_options(&self) -> MessageResult<&MessengerObject> {
        Err(MessageError::unsupported("messenger options", self.channel()))
    }

    /// Sets the correlation reference.
    #[must_use]
    fn with_client_ref(mut self, client_ref: impl Into<String>) -> Self
    where
        Self: Sized,
    {
        self.base_mut().set_client_ref(Some(client_ref.into()));
        self
    }

    /// Sets the status callback URL.
    #[must_use]
    fn with_webhook_url(mut self, webhook_url: impl Into<String>) -> Self
    where
        Self: Sized,
    {
        self.base_mut().set_webhook_url(Some(webhook_url.into()));
        self
    }

    /// Sets the requested callback format.
    #[must_use]
    fn with_webhook_version(mut self, version: WebhookVersion) -> Self
    where
        Self: Sized,
    {
        self.base_mut().set_webhook_version(Some(version));
        self
    }

    /// Sets the time-to-live in seconds.
    #[must_use]
    fn with_ttl(mut self, ttl: u32) -> Self
    where
        Self: Sized,
    {
        self.base_mut().set_ttl(Some(ttl));
        self
    }
}

/// Inserts `value` under `key` only when present.
pub(crate) fn insert_optional(payload: &mut Payload, key: &str, value: Option<&str>) {
    if let Some(value) = value {
        payload.insert(key.to_owned(), Value::String(value.to_owned()));
    }
}

/// Drops blank optional strings so they are never emitted. Anything else is
/// kept verbatim.
pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|raw| !raw.trim().is_empty())
}
