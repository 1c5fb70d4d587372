//! In-memory transport for tests and local development.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::messages::{
    domain::{MessageUuid, Payload},
    ports::{DispatchRequest, MessageTransport, TransportError, TransportResult},
};

/// Thread-safe transport that records every request instead of sending it.
///
/// Accepted requests receive a response holding a freshly generated
/// `message_uuid`, mirroring the shape of the real API's `202` body.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTransport {
    state: Arc<RwLock<InMemoryTransportState>>,
}

#[derive(Debug, Default)]
struct InMemoryTransportState {
    sent: Vec<DispatchRequest>,
    rejection: Option<TransportError>,
}

impl InMemoryTransport {
    /// Creates a transport that accepts every request.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a transport that records requests but answers each with
    /// `rejection`.
    #[must_use]
    pub fn rejecting(rejection: TransportError) -> Self {
        Self {
            state: Arc::new(RwLock::new(InMemoryTransportState {
                sent: Vec::new(),
                rejection: Some(rejection),
            })),
        }
    }

    /// Returns every request received so far, oldest first.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Unavailable`] when the internal lock is
    /// poisoned.
    pub fn sent(&self) -> TransportResult<Vec<DispatchRequest>> {
        let state = self
            .state
            .read()
            .map_err(|err| TransportError::unavailable(std::io::Error::other(err.to_string())))?;
        Ok(state.sent.clone())
    }
}

#[async_trait]
impl MessageTransport for InMemoryTransport {
    async fn send(&self, request: DispatchRequest) -> TransportResult<Payload> {
        let mut state = self
            .state
            .write()
            .map_err(|err| TransportError::unavailable(std::io::Error::other(err.to_string())))?;

        state.sent.push(request);
        if let Some(rejection) = &state.rejection {
            return Err(rejection.clone());
        }

        let mut response = Payload::new();
        response.insert(
            "message_uuid".to_owned(),
            MessageUuid::new().to_string().into(),
        );
        Ok(response)
    }
}
