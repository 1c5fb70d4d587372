//! Port definitions for the messages subsystem.

pub mod transport;

pub use transport::{DispatchRequest, MessageTransport, TransportError, TransportResult};
