//! Concrete outbound message types, one per (channel, subtype) pair.
//!
//! Most pairs differ only in their channel and the content they carry, so
//! they are aliases of three generic shapes:
//!
//! - [`ChannelMessage`] for SMS, MMS and Viber, which carry content alone
//! - [`WhatsAppMessage`], which adds an optional reply context
//! - [`MessengerMessage`], which adds category and tag options
//!
//! The permitted pairs are fixed by [`Carries`]: `MmsImage` compiles,
//! an SMS carrying a vCard does not. WhatsApp templates and custom objects
//! have their own types.

mod channel;
mod messenger;
mod plain;
mod whatsapp;

pub use channel::{
    Carries, ChannelKind, MessengerChannel, MmsChannel, SmsChannel, ViberChannel,
    WhatsAppChannel,
};
pub use messenger::{
    MessengerAudio, MessengerFile, MessengerImage, MessengerMessage, MessengerText,
    MessengerVideo,
};
pub use plain::{
    ChannelMessage, MmsAudio, MmsImage, MmsVcard, MmsVideo, SmsText, ViberImage, ViberText,
};
pub use whatsapp::{
    WhatsAppAudio, WhatsAppCustom, WhatsAppFile, WhatsAppImage, WhatsAppMessage,
    WhatsAppTemplate, WhatsAppText, WhatsAppVideo,
};

use crate::messages::domain::{MessageContent, Payload};
use serde_json::Value;

/// Nests `object` under `key`.
fn insert_object(payload: &mut Payload, key: &str, object: Payload) {
    payload.insert(key.to_owned(), Value::Object(object));
}

/// Stores `content` under its subtype key.
fn insert_content<C: MessageContent>(payload: &mut Payload, content: &C) {
    payload.insert(C::SUBTYPE.as_str().to_owned(), content.to_value());
}
