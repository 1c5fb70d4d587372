//! Messenger message types.
//!
//! Every Messenger variant carries optional [`MessengerObject`] options. The
//! `messenger` key is emitted only when a category or tag is set.

use super::{Carries, MessengerChannel, insert_content, insert_object};
use crate::messages::domain::{
    AudioObject, BaseMessage, Channel, FileObject, ImageObject, MessageContent, MessageError,
    MessageResult, MessengerObject, OutboundMessage, Payload, TextBody, VideoObject,
};

/// A Messenger message carrying content `C` and category/tag options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessengerMessage<C> {
    base: BaseMessage,
    content: C,
    messenger: MessengerObject,
}

impl<C> MessengerMessage<C>
where
    MessengerChannel: Carries<C>,
    C: MessageContent,
{
    /// Creates a Messenger message with optional category and tag.
    ///
    /// # Errors
    ///
    /// Returns [`MessageError::InvalidArgument`] when `to` or `from` is
    /// blank, or when `content` is a blank text body.
    pub fn new<T>(
        to: impl Into<String>,
        from: impl Into<String>,
        content: T,
        category: Option<String>,
        tag: Option<String>,
    ) -> MessageResult<Self>
    where
        T: TryInto<C>,
        MessageError: From<<T as TryInto<C>>::Error>,
    {
        Ok(Self {
            base: BaseMessage::new(Channel::Messenger, C::SUBTYPE, to, from)?,
            content: content.try_into()?,
            messenger: MessengerObject::new(category, tag),
        })
    }

    /// Returns the carried content.
    #[must_use]
    pub const fn content(&self) -> &C {
        &self.content
    }

    /// Replaces the carried content wholesale.
    pub fn set_content(&mut self, content: C) {
        self.content = content;
    }

    /// Returns the Messenger options.
    #[must_use]
    pub const fn messenger(&self) -> &MessengerObject {
        &self.messenger
    }

    /// Replaces the Messenger options.
    pub fn set_messenger(&mut self, messenger: MessengerObject) {
        self.messenger = messenger;
    }
}

impl<C> OutboundMessage for MessengerMessage<C>
where
    MessengerChannel: Carries<C>,
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
        if let Some(messenger) = self.messenger.to_payload() {
            insert_object(payload, "messenger", messenger);
        }
    }

    fn messenger_options(&self) -> MessageResult<&MessengerObject> {
        Ok(&self.messenger)
    }
}

/// A plain-text Messenger message.
pub type MessengerText = MessengerMessage<TextBody>;

/// A Messenger message carrying an image.
pub type MessengerImage = MessengerMessage<ImageObject>;

/// A Messenger message carrying an audio clip.
pub type MessengerAudio = MessengerMessage<AudioObject>;

/// A Messenger message carrying a video clip.
pub type MessengerVideo = MessengerMessage<VideoObject>;

/// A Messenger message carrying a document.
///
/// # Examples
///
/// ```
/// use switchboard::messages::domain::{FileObject, OutboundMessage};
/// use switchboard::messages::variants::MessengerFile;
///
/// let file = FileObject::new("https://example.com/invoice.pdf").expect("valid url");
/// let message = MessengerFile::new("10152", "20741", file, Some("shipping".to_owned()), None)
///     .expect("valid message");
/// assert_eq!(message.to_payload()["messenger"]["category"], "shipping");
/// ```
pub type MessengerFile = MessengerMessage<FileObject>;
