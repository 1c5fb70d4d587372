//! Transport port through which serialised messages leave the crate.

use crate::messages::domain::{Channel, MessageSubtype, Payload};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for transport operations.
pub type TransportResult<T> = Result<T, TransportError>;

/// A fully serialised message ready for dispatch.
#[derive(Debug, Clone, PartialEq)]
pub struct DispatchRequest {
    /// Endpoint URL the payload is posted to.
    pub endpoint: String,
    /// Channel of the message, for routing and logging.
    pub channel: Channel,
    /// Subtype of the message, for routing and logging.
    pub message_type: MessageSubtype,
    /// Canonical payload produced by the message.
    pub payload: Payload,
}

/// Delivery contract implemented by HTTP clients and test doubles.
///
/// Implementations own network concerns such as authentication, retries and
/// timeouts. The returned mapping is the raw, parsed API response.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MessageTransport: Send + Sync {
    /// Delivers a serialised message.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Rejected`] when the API refuses the payload
    /// or [`TransportError::Unavailable`] when it cannot be reached.
    async fn send(&self, request: DispatchRequest) -> TransportResult<Payload>;
}

/// Errors returned by transport implementations.
#[derive(Debug, Clone, Error)]
pub enum TransportError {
    /// The API answered with a non-success status.
    #[error("messages API rejected the request with status {status}: {detail}")]
    Rejected {
        /// HTTP status code.
        status: u16,
        /// Error detail reported by the API.
        detail: String,
    },

    /// The API could not be reached or the transport failed internally.
    #[error("messages API unavailable: {0}")]
    Unavailable(Arc<dyn std::error::Error + Send + Sync>),
}

impl TransportError {
    /// Creates a rejection error.
    #[must_use]
    pub fn rejected(status: u16, detail: impl Into<String>) -> Self {
        Self::Rejected {
            status,
            detail: detail.into(),
        }
    }

    /// Wraps a lower-level transport failure.
    pub fn unavailable(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Unavailable(Arc::new(err))
    }
}
