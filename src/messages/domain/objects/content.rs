//! The primary content a message variant carries under its subtype key.

use super::{AudioObject, FileObject, ImageObject, TextBody, VCardObject, VideoObject};
use crate::messages::domain::MessageSubtype;
use serde_json::Value;

/// Content that fills the payload key named after its subtype.
///
/// A text body renders as `"text": "..."`, an image as `"image": {...}`, and
/// so on. Generic message variants are parameterised over this trait.
pub trait MessageContent: Send + Sync {
    /// Subtype of the messages that carry this content. Its wire name is also
    /// the payload key.
    const SUBTYPE: MessageSubtype;

    /// Renders the value stored under the subtype key.
    fn to_value(&self) -> Value;
}

impl MessageContent for TextBody {
    const SUBTYPE: MessageSubtype = MessageSubtype::Text;

    fn to_value(&self) -> Value {
        Value::String(self.as_str().to_owned())
    }
}

impl MessageContent for ImageObject {
    const SUBTYPE: MessageSubtype = MessageSubtype::Image;

    fn to_value(&self) -> Value {
        Value::Object(self.to_payload())
    }
}

impl MessageContent for AudioObject {
    const SUBTYPE: MessageSubtype = MessageSubtype::Audio;

    fn to_value(&self) -> Value {
        Value::Object(self.to_payload())
    }
}

impl MessageContent for VideoObject {
    const SUBTYPE: MessageSubtype = MessageSubtype::Video;

    fn to_value(&self) -> Value {
        Value::Object(self.to_payload())
    }
}

impl MessageContent for FileObject {
    const SUBTYPE: MessageSubtype = MessageSubtype::File;

    fn to_value(&self) -> Value {
        Value::Object(self.to_payload())
    }
}

impl MessageContent for VCardObject {
    const SUBTYPE: MessageSubtype = MessageSubtype::Vcard;

    fn to_value(&self) -> Value {
        Value::Object(self.to_payload())
    }
}
