//! Unit tests for the messages module.
//!
//! Tests are organised by layer: domain values first, then the concrete
//! variants, then dispatch through the service and adapters.

mod service_tests;
