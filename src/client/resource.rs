//! Endpoint resolution for a single API resource.

use super::ClientConfig;

/// Describes where an API resource lives.
///
/// The base URL resolves in order: an explicit override set with
/// [`ApiResource::with_base_url`], then the API host of the attached client
/// configuration, then the empty string.
///
/// # Examples
///
/// ```
/// use switchboard::client::{ApiResource, ClientConfig};
///
/// let resource = ApiResource::new()
///     .with_client(&ClientConfig::default().with_api_url("https://test.domain"))
///     .with_base_uri("/v1/messages");
/// assert_eq!(resource.base_url(), "https://test.domain");
/// assert_eq!(resource.uri(), "https://test.domain/v1/messages");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApiResource {
    base_url: Option<String>,
    client_api_url: Option<String>,
    base_uri: String,
}

impl ApiResource {
    /// Creates a resource with no base URL and an empty path.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Attaches a client configuration whose API host is used when no
    /// explicit base URL is set.
    #[must_use]
    pub fn with_client(mut self, config: &ClientConfig) -> Self {
        self.client_api_url = Some(config.api_url.clone());
        self
    }

    /// Sets an explicit base URL that takes precedence over the client's.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Sets the resource path appended to the base URL.
    #[must_use]
    pub fn with_base_uri(mut self, base_uri: impl Into<String>) -> Self {
        self.base_uri = base_uri.into();
        self
    }

    /// Returns the resolved base URL, or `""` when none is known.
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.base_url
            .as_deref()
            .or_else(|| self.client_api_url.as_deref())
            .unwrap_or_default()
    }

    /// Returns the resource path.
    #[must_use]
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Returns the full endpoint URL of the resource, joining the base URL
    /// and path with exactly one `/`.
    #[must_use]
    pub fn uri(&self) -> String {
        let base = self.base_url().trim_end_matches('/');
        let path = self.base_uri.trim_start_matches('/');
        if path.is_empty() {
            return base.to_owned();
        }
        format!("{base}/{path}")
    }
}
