//! WhatsApp message types.
//!
//! Text and media variants accept an optional reply [`ContextObject`];
//! the `context` key is emitted only when one is set.

use super::{Carries, WhatsAppChannel, insert_content, insert_object};
use crate::messages::domain::{
    AudioObject, BaseMessage, Channel, ContextObject, FileObject, ImageObject, MessageContent,
    MessageError, MessageResult, MessageSubtype, OutboundMessage, Payload, TemplateObject,
    TextBody, VideoObject, WhatsAppObject,
};
use serde_json::{Map, Value};

/// A WhatsApp message carrying content `C` and an optional reply context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WhatsAppMessage<C> {
    base: BaseMessage,
    content: C,
    context: Option<ContextObject>,
}

impl<C> WhatsAppMessage<C>
where
    WhatsAppChannel: Carries<C>,
    C: MessageContent,
{
    /// Creates a WhatsApp message with no reply context.
    ///
    /// # Errors
    ///
    /// Returns [`MessageError::InvalidArgument`] when `to` or `from` is
    /// blank, or when `content` is a blank text body.
    pub fn new<T>(
        to: impl Into<String>,
        from: impl Into<String>,
        content: T,
    ) -> MessageResult<Self>
    where
        T: TryInto<C>,
        MessageError: From<<T as TryInto<C>>::Error>,
    {
        Ok(Self {
            base: BaseMessage::new(Channel::WhatsApp, C::SUBTYPE, to, from)?,
            content: content.try_into()?,
            context: None,
        })
    }

    /// Marks the message as a reply.
    #[must_use]
    pub const fn with_context(mut self, context: ContextObject) -> Self {
        self.context = Some(context);
        self
    }

    /// Returns the carried content.
    #[must_use]
    pub const fn content(&self) -> &C {
        &self.content
    }

    /// Returns the reply context, if any.
    #[must_use]
    pub const fn context(&self) -> Option<&ContextObject> {
        self.context.as_ref()
    }

    /// Replaces the carried content wholesale.
    pub fn set_content(&mut self, content: C) {
        self.content = content;
    }

    /// Sets or clears the reply context.
    pub const fn set_context(&mut self, context: Option<ContextObject>) {
        self.context = context;
    }
}

impl<C> OutboundMessage for WhatsAppMessage<C>
where
    WhatsAppChannel: Carries<C>,
    C: MessageContent,
{
    fn base(&self) -> &BaseMessage {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseMessage {
        &mut self.base
    }

    fn extend_payload(&self, payload: &mut Payload) {
        insert_content(payload, &self.content);
        if let Some(context) = &self.context {
            insert_object(payload, "context", context.to_payload());
        }
    }
}

/// A plain-text WhatsApp message.
pub type WhatsAppText = WhatsAppMessage<TextBody>;

/// A WhatsApp message carrying an image.
pub type WhatsAppImage = WhatsAppMessage<ImageObject>;

/// A WhatsApp message carrying an audio clip.
pub type WhatsAppAudio = WhatsAppMessage<AudioObject>;

/// A WhatsApp message carrying a video clip.
pub type WhatsAppVideo = WhatsAppMessage<VideoObject>;

/// A WhatsApp message carrying a document.
pub type WhatsAppFile = WhatsAppMessage<FileObject>;

/// A WhatsApp template message.
///
/// The `whatsapp` block is always emitted with the fixed `deterministic`
/// policy and the message locale.
///
/// # Examples
///
/// ```
/// use switchboard::messages::domain::{OutboundMessage, TemplateObject};
/// use switchboard::messages::variants::WhatsAppTemplate;
///
/// let template = TemplateObject::new("abc", ["x"]).expect("valid template");
/// let message = WhatsAppTemplate::new("447700900000", "447700900001", template, "en_GB")
///     .expect("valid message");
/// let payload = message.to_payload();
/// assert_eq!(payload["whatsapp"]["policy"], "deterministic");
/// assert_eq!(payload["whatsapp"]["locale"], "en_GB");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WhatsAppTemplate {
    base: BaseMessage,
    template: TemplateObject,
    whatsapp: WhatsAppObject,
}

impl WhatsAppTemplate {
    /// Creates a template message for `locale`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::messages::domain::MessageError::InvalidArgument`]
    /// when `to`, `from` or `locale` is blank.
    pub fn new(
        to: impl Into<String>,
        from: impl Into<String>,
        template: TemplateObject,
        locale: impl Into<String>,
    ) -> MessageResult<Self> {
        Ok(Self {
            base: BaseMessage::new(Channel::WhatsApp, MessageSubtype::Template, to, from)?,
            template,
            whatsapp: WhatsAppObject::new(locale)?,
        })
    }

    /// Creates a template message using the default `en_US` locale.
    ///
    /// # Errors
    ///
    /// Returns [`crate::messages::domain::MessageError::InvalidArgument`]
    /// when `to` or `from` is blank.
    pub fn with_default_locale(
        to: impl Into<String>,
        from: impl Into<String>,
        template: TemplateObject,
    ) -> MessageResult<Self> {
        Ok(Self {
            base: BaseMessage::new(Channel::WhatsApp, MessageSubtype::Template, to, from)?,
            template,
            whatsapp: WhatsAppObject::default(),
        })
    }

    /// Returns the embedded template.
    #[must_use]
    pub const fn template(&self) -> &TemplateObject {
        &self.template
    }

    /// Replaces the embedded template.
    pub fn set_template(&mut self, template: TemplateObject) {
        self.template = template;
    }

    /// Replaces the locale.
    ///
    /// # Errors
    ///
    /// Returns [`crate::messages::domain::MessageError::InvalidArgument`]
    /// when `locale` is blank; the previous locale is kept.
    pub fn set_locale(&mut self, locale: impl Into<String>) -> MessageResult<()> {
        self.whatsapp = WhatsAppObject::new(locale)?;
        Ok(())
    }
}

impl OutboundMessage for WhatsAppTemplate {
    fn base(&self) -> &BaseMessage {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseMessage {
        &mut self.base
    }

    fn extend_payload(&self, payload: &mut Payload) {
        insert_object(payload, "template", self.template.to_payload());
        insert_object(payload, "whatsapp", self.whatsapp.to_payload());
    }

    fn locale(&self) -> MessageResult<&str> {
        Ok(self.whatsapp.locale())
    }
}

/// A WhatsApp message with a caller-defined `custom` object.
///
/// This is an escape hatch for payload shapes the crate does not model. The
/// object is sent exactly as given; no schema validation is performed.
///
/// # Examples
///
/// ```
/// use switchboard::messages::domain::OutboundMessage;
/// use switchboard::messages::variants::WhatsAppCustom;
/// use serde_json::{Map, json};
///
/// let mut message = WhatsAppCustom::new("447700900000", "447700900001", Map::new())
///     .expect("valid message");
/// let mut custom = Map::new();
/// custom.insert("foo".to_owned(), json!("bar"));
/// message.set_custom(custom);
/// assert_eq!(message.to_payload()["custom"], json!({"foo": "bar"}));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WhatsAppCustom {
    base: BaseMessage,
    custom: Map<String, Value>,
}

impl WhatsAppCustom {
    /// Creates a custom WhatsApp message.
    ///
    /// # Errors
    ///
    /// Returns [`crate::messages::domain::MessageError::InvalidArgument`]
    /// when `to` or `from` is blank.
    pub fn new(
        to: impl Into<String>,
        from: impl Into<String>,
        custom: Map<String, Value>,
    ) -> MessageResult<Self> {
        Ok(Self {
            base: BaseMessage::new(Channel::WhatsApp, MessageSubtype::Custom, to, from)?,
            custom,
        })
    }

    /// Returns the custom object.
    #[must_use]
    pub const fn custom(&self) -> &Map<String, Value> {
        &self.custom
    }

    /// Replaces the custom object.
    pub fn set_custom(&mut self, custom: Map<String, Value>) {
        self.custom = custom;
    }
}

impl OutboundMessage for WhatsAppCustom {
    fn base(&self) -> &BaseMessage {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseMessage {
        &mut self.base
    }

    fn extend_payload(&self, payload: &mut Payload) {
        insert_object(payload, "custom", self.custom.clone());
    }
}
