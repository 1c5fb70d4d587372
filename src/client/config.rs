//! Client configuration shared by API resources.

/// Default messaging API host.
pub const DEFAULT_API_URL: &str = "https://api.nexmo.com";

/// Default path of the messages resource, relative to the API host.
pub const DEFAULT_MESSAGES_PATH: &str = "/v1/messages";

/// Connection settings for the messaging API.
///
/// # Examples
///
/// ```
/// use switchboard::client::ClientConfig;
///
/// let config = ClientConfig::default();
/// assert_eq!(config.api_url, "https://api.nexmo.com");
///
/// let sandbox = ClientConfig::default().with_api_url("https://sandbox.example.com");
/// assert_eq!(sandbox.messages_path, "/v1/messages");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the API host, without a trailing path.
    pub api_url: String,
    /// Path of the messages resource.
    pub messages_path: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_owned(),
            messages_path: DEFAULT_MESSAGES_PATH.to_owned(),
        }
    }
}

impl ClientConfig {
    /// Overrides the API host.
    #[must_use]
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    /// Overrides the messages resource path.
    #[must_use]
    pub fn with_messages_path(mut self, messages_path: impl Into<String>) -> Self {
        self.messages_path = messages_path.into();
        self
    }
}
