//! Reply context linking a message to an earlier one.

use crate::messages::domain::{MessageUuid, base::Payload};

/// Identifies the inbound message a reply responds to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContextObject {
    message_uuid: MessageUuid,
}

impl ContextObject {
    /// Creates a reply context for the given message.
    #[must_use]
    pub const fn new(message_uuid: MessageUuid) -> Self {
        Self { message_uuid }
    }

    /// Returns the identifier of the message being replied to.
    #[must_use]
    pub const fn message_uuid(&self) -> MessageUuid {
        self.message_uuid
    }

    /// Renders the `context` sub-object.
    #[must_use]
    pub fn to_payload(&self) -> Payload {
        let mut payload = Payload::new();
        payload.insert(
            "message_uuid".to_owned(),
            self.message_uuid.to_string().into(),
        );
        payload
    }
}
