//! Reusable payload fragments owned by message variants.
//!
//! Objects are immutable once built. A variant replaces an embedded object
//! wholesale rather than editing it in place.

mod channel_options;
mod content;
mod context;
mod media;
mod template;
mod text;

pub use channel_options::{
    DEFAULT_WHATSAPP_LOCALE, MessengerObject, WHATSAPP_POLICY, WhatsAppObject,
};
pub use content::MessageContent;
pub use context::ContextObject;
pub use media::{AudioObject, FileObject, ImageObject, VCardObject, VideoObject};
pub use template::TemplateObject;
pub use text::TextBody;
