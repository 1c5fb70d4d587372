//! API client configuration and resource addressing.

mod config;
mod resource;

pub use config::{ClientConfig, DEFAULT_API_URL, DEFAULT_MESSAGES_PATH};
pub use resource::ApiResource;

#[cfg(test)]
mod tests;
