//! Shared world state for message dispatch BDD scenarios.

use std::sync::Arc;

use rstest::fixture;
use switchboard::{
    client::ClientConfig,
    messages::{
        adapters::InMemoryTransport,
        domain::{MessageError, OutboundMessage, Payload},
        ports::TransportError,
        services::{MessagesClient, MessagesClientResult, SendReceipt},
    },
};

/// Scenario world for message dispatch behaviour tests.
pub struct DispatchWorld {
    /// Transport recording every delivered request.
    pub transport: Arc<InMemoryTransport>,
    /// The client under test.
    pub client: MessagesClient<InMemoryTransport>,
    /// Message built by a given step, awaiting dispatch.
    pub pending: Option<Box<dyn OutboundMessage>>,
    /// Error raised while building the message, if any.
    pub construction_error: Option<MessageError>,
    /// Result of the last send.
    pub last_send_result: Option<MessagesClientResult<SendReceipt>>,
}

impl DispatchWorld {
    /// Creates a world whose transport accepts every message.
    #[must_use]
    pub fn new() -> Self {
        Self::with_transport(InMemoryTransport::new())
    }

    /// Creates a world around the given transport.
    #[must_use]
    pub fn with_transport(transport: InMemoryTransport) -> Self {
        let shared = Arc::new(transport);
        Self {
            client: MessagesClient::new(Arc::clone(&shared), &ClientConfig::default()),
            transport: shared,
            pending: None,
            construction_error: None,
            last_send_result: None,
        }
    }

    /// Replaces the transport with one that rejects every message.
    pub fn reject_with(&mut self, status: u16) {
        *self = Self::with_transport(InMemoryTransport::rejecting(TransportError::rejected(
            status,
            "rejected by scenario",
        )));
    }

    /// Stores the outcome of building a message.
    pub fn stage<M>(&mut self, built: Result<M, MessageError>)
    where
        M: OutboundMessage + 'static,
    {
        match built {
            Ok(message) => self.pending = Some(Box::new(message)),
            Err(err) => self.construction_error = Some(err),
        }
    }

    /// Returns the payload of the only delivered request.
    ///
    /// # Errors
    ///
    /// Returns an error unless exactly one request was recorded.
    pub fn delivered_payload(&self) -> Result<Payload, eyre::Report> {
        let sent = self
            .transport
            .sent()
            .map_err(|err| eyre::eyre!("transport state unreadable: {err}"))?;
        match sent.as_slice() {
            [request] => Ok(request.payload.clone()),
            other => Err(eyre::eyre!("expected one request, found {}", other.len())),
        }
    }
}

impl Default for DispatchWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> DispatchWorld {
    DispatchWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
