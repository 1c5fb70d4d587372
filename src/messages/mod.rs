//! Outbound message modelling and serialisation.
//!
//! This module implements the typed message variants of every supported
//! channel and renders them into the canonical payload consumed by the
//! messaging API.
//!
//! # Architecture
//!
//! - **Domain**: shared scaffolding and payload fragments ([`domain::BaseMessage`], [`domain::ImageObject`], etc.)
//! - **Variants**: one type per (channel, subtype) pair ([`variants::MmsVideo`], [`variants::WhatsAppTemplate`], etc.)
//! - **Ports**: the delivery contract ([`ports::MessageTransport`])
//! - **Adapters**: concrete transports ([`adapters::InMemoryTransport`])
//! - **Services**: dispatch orchestration ([`services::MessagesClient`])
//!
//! # Example
//!
//! ```
//! use switchboard::messages::domain::{FileObject, OutboundMessage, WebhookVersion};
//! use switchboard::messages::variants::MessengerFile;
//!
//! let file = FileObject::new("https://example.com/manual.pdf").expect("valid url");
//! let message = MessengerFile::new("10152", "20741", file, None, None)
//!     .expect("valid message")
//!     .with_client_ref("order-77")
//!     .with_webhook_version(WebhookVersion::V1);
//!
//! let payload = message.to_payload();
//! assert_eq!(payload["channel"], "messenger");
//! assert_eq!(payload["message_type"], "file");
//! assert_eq!(payload["client_ref"], "order-77");
//! assert!(!payload.contains_key("messenger"));
//! ```

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
pub mod variants;

#[cfg(test)]
mod tests;
