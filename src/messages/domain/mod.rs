//! Domain types for outbound message construction.
//!
//! This module contains pure value types with no transport dependencies.
//! Every constructor validates its required fields, so any value that exists
//! renders to a well-formed payload.

mod base;
mod channel;
mod error;
mod ids;
mod objects;

pub use base::{BaseMessage, OutboundMessage, Payload, WebhookVersion};
pub use channel::{Channel, MessageSubtype};
pub use error::{MessageError, MessageResult, ParseChannelError, ParseSubtypeError};
pub use ids::MessageUuid;
pub use objects::{
    AudioObject, ContextObject, DEFAULT_WHATSAPP_LOCALE, FileObject, ImageObject,
    MessageContent, MessengerObject, TemplateObject, TextBody, VCardObject, VideoObject,
    WHATSAPP_POLICY, WhatsAppObject,
};
