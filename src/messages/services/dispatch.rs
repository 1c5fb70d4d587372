//! Service layer that serialises messages and hands them to a transport.
//!
//! Provides [`MessagesClient`], which renders any [`OutboundMessage`] to its
//! canonical payload, addresses it to the messages resource, and parses the
//! API's acknowledgement into a [`SendReceipt`].

use crate::{
    client::{ApiResource, ClientConfig},
    messages::{
        domain::{MessageUuid, OutboundMessage, Payload},
        ports::{DispatchRequest, MessageTransport, TransportError},
    },
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, warn};

/// Acknowledgement returned for an accepted message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SendReceipt {
    message_uuid: MessageUuid,
}

impl SendReceipt {
    /// Creates a receipt for the given message identifier.
    #[must_use]
    pub const fn new(message_uuid: MessageUuid) -> Self {
        Self { message_uuid }
    }

    /// Parses a receipt from a raw API response.
    ///
    /// # Errors
    ///
    /// Returns [`MessagesClientError::InvalidResponse`] when the response has
    /// no `message_uuid` string or the value is not a UUID.
    pub fn from_response(response: &Payload) -> MessagesClientResult<Self> {
        let raw = response
            .get("message_uuid")
            .and_then(serde_json::Value::as_str)
            .ok_or_else(|| MessagesClientError::invalid_response("missing message_uuid"))?;
        let message_uuid = MessageUuid::parse(raw).map_err(|err| {
            MessagesClientError::invalid_response(format!("malformed message_uuid '{raw}': {err}"))
        })?;
        Ok(Self::new(message_uuid))
    }

    /// Returns the identifier the API assigned to the message.
    #[must_use]
    pub const fn message_uuid(&self) -> MessageUuid {
        self.message_uuid
    }
}

/// Service-level errors for message dispatch.
#[derive(Debug, Error)]
pub enum MessagesClientError {
    /// The transport failed or the API rejected the message.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The API accepted the request but its response could not be parsed.
    #[error("invalid messages API response: {0}")]
    InvalidResponse(String),
}

impl MessagesClientError {
    /// Creates an invalid-response error.
    #[must_use]
    pub fn invalid_response(message: impl Into<String>) -> Self {
        Self::InvalidResponse(message.into())
    }
}

/// Result type for message dispatch.
pub type MessagesClientResult<T> = Result<T, MessagesClientError>;

/// Sends outbound messages through a [`MessageTransport`].
#[derive(Debug)]
pub struct MessagesClient<T>
where
    T: MessageTransport,
{
    transport: Arc<T>,
    resource: ApiResource,
}

impl<T> Clone for MessagesClient<T>
where
    T: MessageTransport,
{
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
            resource: self.resource.clone(),
        }
    }
}

impl<T> MessagesClient<T>
where
    T: MessageTransport,
{
    /// Creates a client addressing the messages resource described by
    /// `config`.
    #[must_use]
    pub fn new(transport: Arc<T>, config: &ClientConfig) -> Self {
        let resource = ApiResource::new()
            .with_client(config)
            .with_base_uri(config.messages_path.clone());
        Self::with_resource(transport, resource)
    }

    /// Creates a client with an explicitly configured resource.
    #[must_use]
    pub const fn with_resource(transport: Arc<T>, resource: ApiResource) -> Self {
        Self {
            transport,
            resource,
        }
    }

    /// Returns the resource messages are sent to.
    #[must_use]
    pub const fn resource(&self) -> &ApiResource {
        &self.resource
    }

    /// Serialises `message` and delivers it.
    ///
    /// # Errors
    ///
    /// Returns [`MessagesClientError::Transport`] when delivery fails, or
    /// [`MessagesClientError::InvalidResponse`] when the acknowledgement
    /// lacks a valid `message_uuid`.
    pub async fn send<M>(&self, message: &M) -> MessagesClientResult<SendReceipt>
    where
        M: OutboundMessage + ?Sized,
    {
        let request = DispatchRequest {
            endpoint: self.resource.uri(),
            channel: message.channel(),
            message_type: message.message_type(),
            payload: message.to_payload(),
        };
        debug!(
            channel = %request.channel,
            message_type = %request.message_type,
            endpoint = %request.endpoint,
            "dispatching message"
        );

        let channel = request.channel;
        let response = self.transport.send(request).await.inspect_err(|err| {
            warn!(%channel, error = %err, "message dispatch failed");
        })?;

        let receipt = SendReceipt::from_response(&response)?;
        debug!(%channel, message_uuid = %receipt.message_uuid(), "message accepted");
        Ok(receipt)
    }
}
