//! SMS, MMS and Viber messages: channel plus content, nothing else.

use super::{Carries, MmsChannel, SmsChannel, ViberChannel, insert_content};
use crate::messages::domain::{
    AudioObject, BaseMessage, ImageObject, MessageContent, MessageError, MessageResult,
    OutboundMessage, Payload, TextBody, VCardObject, VideoObject,
};
use std::marker::PhantomData;

/// A message on channel `K` carrying content `C` under its subtype key.
///
/// Use the aliases below rather than naming this type directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelMessage<K, C> {
    base: BaseMessage,
    content: C,
    channel: PhantomData<K>,
}

impl<K, C> ChannelMessage<K, C>
where
    K: Carries<C>,
    C: MessageContent,
{
    /// Creates a message. Text variants accept a `&str` or `String` body;
    /// media variants take the built object.
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
            base: BaseMessage::new(K::CHANNEL, C::SUBTYPE, to, from)?,
            content: content.try_into()?,
            channel: PhantomData,
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
}

impl<K, C> OutboundMessage for ChannelMessage<K, C>
where
    K: Carries<C>,
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
    }
}

/// A plain-text SMS.
///
/// # Examples
///
/// ```
/// use switchboard::messages::domain::OutboundMessage;
/// use switchboard::messages::variants::SmsText;
///
/// let sms = SmsText::new("447700900000", "Acme", "Your code is 1234")
///     .expect("valid sms")
///     .with_ttl(600);
/// let payload = sms.to_payload();
/// assert_eq!(payload["text"], "Your code is 1234");
/// assert_eq!(payload["ttl"], 600);
/// ```
pub type SmsText = ChannelMessage<SmsChannel, TextBody>;

/// An MMS carrying an image.
pub type MmsImage = ChannelMessage<MmsChannel, ImageObject>;

/// An MMS carrying an audio clip.
pub type MmsAudio = ChannelMessage<MmsChannel, AudioObject>;

/// An MMS carrying a video clip.
///
/// # Examples
///
/// ```
/// use switchboard::messages::domain::{OutboundMessage, VideoObject};
/// use switchboard::messages::variants::MmsVideo;
///
/// let video = VideoObject::new("https://example.com/clip.mp4").expect("valid url");
/// let mms = MmsVideo::new("14155550100", "14155550199", video).expect("valid mms");
/// assert_eq!(mms.to_payload()["video"]["url"], "https://example.com/clip.mp4");
/// ```
pub type MmsVideo = ChannelMessage<MmsChannel, VideoObject>;

/// An MMS carrying a vCard contact.
pub type MmsVcard = ChannelMessage<MmsChannel, VCardObject>;

/// A plain-text Viber message.
pub type ViberText = ChannelMessage<ViberChannel, TextBody>;

/// A Viber message carrying an image.
pub type ViberImage = ChannelMessage<ViberChannel, ImageObject>;
