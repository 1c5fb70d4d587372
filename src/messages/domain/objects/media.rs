//! Media references embedded in image, audio, video, file and vCard messages.
//!
//! Each media kind is its own type so an image reference can never be
//! passed where a video was expected, even though several kinds share the
//! same wire shape.

use crate::messages::domain::{
    MessageResult,
    base::{Payload, insert_optional, non_blank},
    error::require,
};

/// URL plus optional caption, the shape shared by most media kinds.
#[derive(Debug, Clone, PartialEq, Eq)]
struct MediaRef {
    url: String,
    caption: Option<String>,
}

impl MediaRef {
    fn new(url: impl Into<String>) -> MessageResult<Self> {
        Ok(Self {
            url: require("url", url)?,
            caption: None,
        })
    }

    fn to_payload(&self) -> Payload {
        let mut payload = Payload::new();
        payload.insert("url".to_owned(), self.url.clone().into());
        insert_optional(&mut payload, "caption", self.caption.as_deref());
        payload
    }
}

/// Reference to a hosted image.
///
/// # Examples
///
/// ```
/// use switchboard::messages::domain::ImageObject;
///
/// let image = ImageObject::new("https://example.com/cat.jpg")
///     .expect("valid url")
///     .with_caption("A cat");
/// assert_eq!(image.to_payload()["caption"], "A cat");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageObject(MediaRef);

impl ImageObject {
    /// Creates an image reference.
    ///
    /// # Errors
    ///
    /// Returns [`crate::messages::domain::MessageError::InvalidArgument`]
    /// when `url` is blank.
    pub fn new(url: impl Into<String>) -> MessageResult<Self> {
        MediaRef::new(url).map(Self)
    }

    /// Sets the caption. A blank caption is dropped.
    #[must_use]
    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.0.caption = non_blank(Some(caption.into()));
        self
    }

    /// Returns the image URL.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.0.url
    }

    /// Returns the caption, if any.
    #[must_use]
    pub fn caption(&self) -> Option<&str> {
        self.0.caption.as_deref()
    }

    /// Renders the `image` sub-object.
    #[must_use]
    pub fn to_payload(&self) -> Payload {
        self.0.to_payload()
    }
}

/// Reference to a hosted audio clip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioObject(MediaRef);

impl AudioObject {
    /// Creates an audio reference.
    ///
    /// # Errors
    ///
    /// Returns [`crate::messages::domain::MessageError::InvalidArgument`]
    /// when `url` is blank.
    pub fn new(url: impl Into<String>) -> MessageResult<Self> {
        MediaRef::new(url).map(Self)
    }

    /// Sets the caption. A blank caption is dropped.
    #[must_use]
    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.0.caption = non_blank(Some(caption.into()));
        self
    }

    /// Returns the audio URL.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.0.url
    }

    /// Returns the caption, if any.
    #[must_use]
    pub fn caption(&self) -> Option<&str> {
        self.0.caption.as_deref()
    }

    /// Renders the `audio` sub-object.
    #[must_use]
    pub fn to_payload(&self) -> Payload {
        self.0.to_payload()
    }
}

/// Reference to a hosted video clip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoObject(MediaRef);

impl VideoObject {
    /// Creates a video reference.
    ///
    /// # Errors
    ///
    /// Returns [`crate::messages::domain::MessageError::InvalidArgument`]
    /// when `url` is blank.
    pub fn new(url: impl Into<String>) -> MessageResult<Self> {
        MediaRef::new(url).map(Self)
    }

    /// Sets the caption. A blank caption is dropped.
    #[must_use]
    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.0.caption = non_blank(Some(caption.into()));
        self
    }

    /// Returns the video URL.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.0.url
    }

    /// Returns the caption, if any.
    #[must_use]
    pub fn caption(&self) -> Option<&str> {
        self.0.caption.as_deref()
    }

    /// Renders the `video` sub-object.
    #[must_use]
    pub fn to_payload(&self) -> Payload {
        self.0.to_payload()
    }
}

/// Reference to a hosted document, with an optional display file name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileObject {
    media: MediaRef,
    name: Option<String>,
}

impl FileObject {
    /// Creates a file reference.
    ///
    /// # Errors
    ///
    /// Returns [`crate::messages::domain::MessageError::InvalidArgument`]
    /// when `url` is blank.
    pub fn new(url: impl Into<String>) -> MessageResult<Self> {
        Ok(Self {
            media: MediaRef::new(url)?,
            name: None,
        })
    }

    /// Sets the caption. A blank caption is dropped.
    #[must_use]
    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.media.caption = non_blank(Some(caption.into()));
        self
    }

    /// Sets the file name shown to the recipient. A blank name is dropped.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = non_blank(Some(name.into()));
        self
    }

    /// Returns the file URL.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.media.url
    }

    /// Returns the caption, if any.
    #[must_use]
    pub fn caption(&self) -> Option<&str> {
        self.media.caption.as_deref()
    }

    /// Returns the display file name, if any.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Renders the `file` sub-object.
    #[must_use]
    pub fn to_payload(&self) -> Payload {
        let mut payload = self.media.to_payload();
        insert_optional(&mut payload, "name", self.name.as_deref());
        payload
    }
}

/// Reference to a hosted vCard contact file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VCardObject {
    url: String,
}

impl VCardObject {
    /// Creates a vCard reference.
    ///
    /// # Errors
    ///
    /// Returns [`crate::messages::domain::MessageError::InvalidArgument`]
    /// when `url` is blank.
    pub fn new(url: impl Into<String>) -> MessageResult<Self> {
        Ok(Self {
            url: require("url", url)?,
        })
    }

    /// Returns the vCard URL.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Renders the `vcard` sub-object.
    #[must_use]
    pub fn to_payload(&self) -> Payload {
        let mut payload = Payload::new();
        payload.insert("url".to_owned(), self.url.clone().into());
        payload
    }
}
