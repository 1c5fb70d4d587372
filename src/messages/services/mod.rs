//! Service layer for outbound message dispatch.

mod dispatch;

pub use dispatch::{MessagesClient, MessagesClientError, MessagesClientResult, SendReceipt};
