//! Switchboard: multi-channel outbound message payloads.
//!
//! This crate builds the request payloads of a multi-channel messaging API.
//! Callers construct a typed message for one channel and subtype, and the
//! crate renders it into the single canonical JSON shape the API accepts.
//!
//! # Architecture
//!
//! Switchboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure value types with validation at construction
//! - **Ports**: Abstract trait interfaces for delivery
//! - **Adapters**: Concrete implementations of ports
//!
//! # Modules
//!
//! - [`messages`]: Message variants, payload rendering and dispatch
//! - [`accounts`]: Account records hydrated from API responses
//! - [`client`]: API configuration and resource addressing

pub mod accounts;
pub mod client;
pub mod messages;
