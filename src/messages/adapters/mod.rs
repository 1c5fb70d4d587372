//! Adapter implementations of the messages ports.

pub mod memory;

pub use memory::InMemoryTransport;
