//! Channel and message subtype identity.
//!
//! Every outbound message is closed over exactly one (channel, subtype)
//! pair. Both halves of the pair serialise to the fixed wire strings the
//! messaging API routes on.

use super::{ParseChannelError, ParseSubtypeError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Communication medium a message is delivered over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Channel {
    /// Plain SMS.
    #[serde(rename = "sms")]
    Sms,
    /// Multimedia messaging.
    #[serde(rename = "mms")]
    Mms,
    /// WhatsApp Business.
    #[serde(rename = "whatsapp")]
    WhatsApp,
    /// Facebook Messenger.
    #[serde(rename = "messenger")]
    Messenger,
    /// Viber Business Messages.
    #[serde(rename = "viber_service")]
    Viber,
}

impl Channel {
    /// Returns the wire representation of the channel.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sms => "sms",
            Self::Mms => "mms",
            Self::WhatsApp => "whatsapp",
            Self::Messenger => "messenger",
            Self::Viber => "viber_service",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Channel {
    type Error = ParseChannelError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "sms" => Ok(Self::Sms),
            "mms" => Ok(Self::Mms),
            "whatsapp" => Ok(Self::WhatsApp),
            "messenger" => Ok(Self::Messenger),
            "viber_service" => Ok(Self::Viber),
            _ => Err(ParseChannelError(value.to_owned())),
        }
    }
}

/// Content kind of a message within its channel.
///
/// Serialised under the `message_type` key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageSubtype {
    /// Plain text body.
    Text,
    /// Image reference.
    Image,
    /// Audio clip reference.
    Audio,
    /// Video clip reference.
    Video,
    /// Arbitrary file reference.
    File,
    /// Pre-approved template with parameters.
    Template,
    /// Opaque channel-specific payload.
    Custom,
    /// Contact card reference.
    Vcard,
    /// Geographic location.
    Location,
    /// Sticker reference.
    Sticker,
    /// Reply to an interactive element.
    Reply,
    /// Content the API could not classify.
    Unsupported,
}

impl MessageSubtype {
    /// Returns the wire representation of the subtype.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Image => "image",
            Self::Audio => "audio",
            Self::Video => "video",
            Self::File => "file",
            Self::Template => "template",
            Self::Custom => "custom",
            Self::Vcard => "vcard",
            Self::Location => "location",
            Self::Sticker => "sticker",
            Self::Reply => "reply",
            Self::Unsupported => "unsupported",
        }
    }
}

impl fmt::Display for MessageSubtype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for MessageSubtype {
    type Error = ParseSubtypeError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "text" => Ok(Self::Text),
            "image" => Ok(Self::Image),
            "audio" => Ok(Self::Audio),
            "video" => Ok(Self::Video),
            "file" => Ok(Self::File),
            "template" => Ok(Self::Template),
            "custom" => Ok(Self::Custom),
            "vcard" => Ok(Self::Vcard),
            "location" => Ok(Self::Location),
            "sticker" => Ok(Self::Sticker),
            "reply" => Ok(Self::Reply),
            "unsupported" => Ok(Self::Unsupported),
            _ => Err(ParseSubtypeError(value.to_owned())),
        }
    }
}
