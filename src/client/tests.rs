//! Unit tests for client configuration and resource addressing.

use super::{ApiResource, ClientConfig, DEFAULT_API_URL, DEFAULT_MESSAGES_PATH};
use rstest::rstest;

#[rstest]
fn default_config_points_at_public_api() {
    let config = ClientConfig::default();
    assert_eq!(config.api_url, DEFAULT_API_URL);
    assert_eq!(config.messages_path, DEFAULT_MESSAGES_PATH);
}

#[rstest]
fn config_overrides_replace_single_fields() {
    let config = ClientConfig::default()
        .with_api_url("https://test.domain")
        .with_messages_path("/v0.1/messages");
    assert_eq!(config.api_url, "https://test.domain");
    assert_eq!(config.messages_path, "/v0.1/messages");
}

#[rstest]
fn base_url_falls_back_to_client_api_url() {
    let config = ClientConfig::default().with_api_url("https://test.domain");
    let resource = ApiResource::new().with_client(&config);
    assert_eq!(resource.base_url(), "https://test.domain");
}

#[rstest]
fn explicit_base_url_overrides_client() {
    let config = ClientConfig::default().with_api_url("https://client.domain");
    let resource = ApiResource::new()
        .with_client(&config)
        .with_base_url("https://test.domain");
    assert_eq!(resource.base_url(), "https://test.domain");
}

#[rstest]
fn base_url_without_override_or_client_is_blank() {
    let resource = ApiResource::new();
    assert_eq!(resource.base_url(), "");
}

#[rstest]
#[case("https://test.domain", "/v1/messages", "https://test.domain/v1/messages")]
#[case("https://test.domain/", "/v1/messages", "https://test.domain/v1/messages")]
#[case("", "/v1/messages", "/v1/messages")]
#[case("https://test.domain", "v1/messages", "https://test.domain/v1/messages")]
#[case("https://test.domain/", "//v1/messages", "https://test.domain/v1/messages")]
#[case("https://test.domain/", "", "https://test.domain")]
fn uri_joins_base_url_and_path(#[case] base: &str, #[case] path: &str, #[case] expected: &str) {
    let resource = ApiResource::new().with_base_url(base).with_base_uri(path);
    assert_eq!(resource.uri(), expected);
}
