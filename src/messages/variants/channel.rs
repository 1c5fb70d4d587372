//! Type-level channel markers and the (channel, content) pairs they permit.

use crate::messages::domain::{
    AudioObject, Channel, FileObject, ImageObject, MessageContent, TextBody, VCardObject,
    VideoObject,
};

mod sealed {
    pub trait Sealed {}
}

/// A delivery channel known at compile time.
///
/// Implemented only by the marker types in this module.
pub trait ChannelKind: sealed::Sealed + Send + Sync {
    /// The runtime channel the marker stands for.
    const CHANNEL: Channel;
}

/// Declares that channel `Self` accepts content `C`.
///
/// Pairs without an impl cannot be built:
///
/// ```compile_fail
/// use switchboard::messages::domain::VCardObject;
/// use switchboard::messages::variants::{ChannelMessage, SmsChannel};
///
/// let vcard = VCardObject::new("https://example.com/contact.vcf").expect("valid url");
/// let _ = ChannelMessage::<SmsChannel, VCardObject>::new("447700900000", "Acme", vcard);
/// ```
pub trait Carries<C: MessageContent>: ChannelKind {}

/// SMS marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SmsChannel;

/// MMS marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MmsChannel;

/// Viber Business Messages marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViberChannel;

/// WhatsApp marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WhatsAppChannel;

/// Facebook Messenger marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MessengerChannel;

impl sealed::Sealed for SmsChannel {}
impl sealed::Sealed for MmsChannel {}
impl sealed::Sealed for ViberChannel {}
impl sealed::Sealed for WhatsAppChannel {}
impl sealed::Sealed for MessengerChannel {}

impl ChannelKind for SmsChannel {
    const CHANNEL: Channel = Channel::Sms;
}

impl ChannelKind for MmsChannel {
    const CHANNEL: Channel = Channel::Mms;
}

impl ChannelKind for ViberChannel {
    const CHANNEL: Channel = Channel::Viber;
}

impl ChannelKind for WhatsAppChannel {
    const CHANNEL: Channel = Channel::WhatsApp;
}

impl ChannelKind for MessengerChannel {
    const CHANNEL: Channel = Channel::Messenger;
}

impl Carries<TextBody> for SmsChannel {}

impl Carries<ImageObject> for MmsChannel {}
impl Carries<AudioObject> for MmsChannel {}
impl Carries<VideoObject> for MmsChannel {}
impl Carries<VCardObject> for MmsChannel {}

impl Carries<TextBody> for ViberChannel {}
impl Carries<ImageObject> for ViberChannel {}

impl Carries<TextBody> for WhatsAppChannel {}
impl Carries<ImageObject> for WhatsAppChannel {}
impl Carries<AudioObject> for WhatsAppChannel {}
impl Carries<VideoObject> for WhatsAppChannel {}
impl Carries<FileObject> for WhatsAppChannel {}

impl Carries<TextBody> for MessengerChannel {}
impl Carries<ImageObject> for MessengerChannel {}
impl Carries<AudioObject> for MessengerChannel {}
impl Carries<VideoObject> for MessengerChannel {}
impl Carries<FileObject> for MessengerChannel {}
