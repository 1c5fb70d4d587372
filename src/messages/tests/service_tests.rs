//! Unit tests for message dispatch through the client service.

use std::sync::Arc;

use crate::{
    client::{ApiResource, ClientConfig},
    messages::{
        adapters::InMemoryTransport,
        domain::{
            Channel, MessageSubtype, MessageUuid, OutboundMessage, Payload, TemplateObject,
        },
        ports::{TransportError, transport::MockMessageTransport},
        services::{MessagesClient, MessagesClientError, SendReceipt},
        variants::{SmsText, WhatsAppTemplate},
    },
};
use rstest::{fixture, rstest};
use serde_json::json;
use tracing_test::traced_test;

#[fixture]
fn transport() -> Arc<InMemoryTransport> {
    Arc::new(InMemoryTransport::new())
}

fn sms() -> SmsText {
    SmsText::new("447700900000", "Acme", "Your code is 1234").expect("valid sms")
}

fn response(value: serde_json::Value) -> Payload {
    match value {
        serde_json::Value::Object(map) => map,
        other => panic!("expected object, got {other}"),
    }
}

// ============================================================================
// Receipts
// ============================================================================

#[rstest]
fn receipt_parses_message_uuid() {
    let uuid = MessageUuid::new();
    let receipt = SendReceipt::from_response(&response(json!({"message_uuid": uuid.to_string()})))
        .expect("valid receipt");
    assert_eq!(receipt.message_uuid(), uuid);
}

#[rstest]
#[case(json!({}))]
#[case(json!({"message_uuid": 42}))]
#[case(json!({"message_uuid": "not-a-uuid"}))]
fn receipt_rejects_malformed_responses(#[case] raw: serde_json::Value) {
    let err = SendReceipt::from_response(&response(raw)).expect_err("malformed");
    assert!(matches!(err, MessagesClientError::InvalidResponse(_)));
}

// ============================================================================
// Dispatch with the in-memory transport
// ============================================================================

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn send_delivers_canonical_payload(transport: Arc<InMemoryTransport>) {
    let client = MessagesClient::new(Arc::clone(&transport), &ClientConfig::default());
    let message = sms();

    client.send(&message).await.expect("send succeeds");

    let sent = transport.sent().expect("sent requests");
    assert_eq!(sent.len(), 1);
    let request = sent.first().expect("one request");
    assert_eq!(request.endpoint, "https://api.nexmo.com/v1/messages");
    assert_eq!(request.channel, Channel::Sms);
    assert_eq!(request.message_type, MessageSubtype::Text);
    assert_eq!(request.payload, message.to_payload());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn send_accepts_trait_objects(transport: Arc<InMemoryTransport>) {
    let client = MessagesClient::new(Arc::clone(&transport), &ClientConfig::default());
    let template = TemplateObject::new("abc", ["x"]).expect("valid template");
    let messages: Vec<Box<dyn OutboundMessage>> = vec![
        Box::new(sms()),
        Box::new(
            WhatsAppTemplate::new("447700900000", "447700900001", template, "en_GB")
                .expect("valid template message"),
        ),
    ];

    for message in &messages {
        client.send(message.as_ref()).await.expect("send succeeds");
    }

    let channels: Vec<_> = transport
        .sent()
        .expect("sent requests")
        .iter()
        .map(|request| request.channel)
        .collect();
    assert_eq!(channels, vec![Channel::Sms, Channel::WhatsApp]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn send_uses_configured_api_url(transport: Arc<InMemoryTransport>) {
    let config = ClientConfig::default().with_api_url("https://messages.example.test/");
    let client = MessagesClient::new(Arc::clone(&transport), &config);

    client.send(&sms()).await.expect("send succeeds");

    let sent = transport.sent().expect("sent requests");
    let request = sent.first().expect("one request");
    assert_eq!(request.endpoint, "https://messages.example.test/v1/messages");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn explicit_resource_overrides_client_url(transport: Arc<InMemoryTransport>) {
    let resource = ApiResource::new()
        .with_client(&ClientConfig::default())
        .with_base_url("https://override.example.test")
        .with_base_uri("/v0.1/messages");
    let client = MessagesClient::with_resource(Arc::clone(&transport), resource);

    client.send(&sms()).await.expect("send succeeds");

    let sent = transport.sent().expect("sent requests");
    let request = sent.first().expect("one request");
    assert_eq!(request.endpoint, "https://override.example.test/v0.1/messages");
}

#[rstest]
#[traced_test]
#[tokio::test(flavor = "multi_thread")]
async fn rejection_is_surfaced_and_logged() {
    let transport = Arc::new(InMemoryTransport::rejecting(TransportError::rejected(
        422,
        "invalid sender",
    )));
    let client = MessagesClient::new(Arc::clone(&transport), &ClientConfig::default());

    let err = client.send(&sms()).await.expect_err("rejected");

    assert!(matches!(
        err,
        MessagesClientError::Transport(TransportError::Rejected { status: 422, .. })
    ));
    assert_eq!(transport.sent().expect("sent requests").len(), 1);
    assert!(logs_contain("message dispatch failed"));
}

// ============================================================================
// Dispatch with a mocked transport
// ============================================================================

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn receipt_carries_uuid_from_transport() {
    let uuid = MessageUuid::new();
    let mut transport = MockMessageTransport::new();
    transport
        .expect_send()
        .withf(|request| request.payload["text"] == "Your code is 1234")
        .times(1)
        .returning(move |_| Ok(response(json!({"message_uuid": uuid.to_string()}))));
    let client = MessagesClient::new(Arc::new(transport), &ClientConfig::default());

    let receipt = client.send(&sms()).await.expect("send succeeds");

    assert_eq!(receipt.message_uuid(), uuid);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn unparseable_acknowledgement_is_an_error() {
    let mut transport = MockMessageTransport::new();
    transport
        .expect_send()
        .returning(|_| Ok(response(json!({"status": "queued"}))));
    let client = MessagesClient::new(Arc::new(transport), &ClientConfig::default());

    let err = client.send(&sms()).await.expect_err("no uuid");

    assert!(matches!(err, MessagesClientError::InvalidResponse(_)));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn unavailable_transport_is_surfaced() {
    let mut transport = MockMessageTransport::new();
    transport.expect_send().returning(|_| {
        Err(TransportError::unavailable(std::io::Error::other(
            "connection refused",
        )))
    });
    let client = MessagesClient::new(Arc::new(transport), &ClientConfig::default());

    let err = client.send(&sms()).await.expect_err("unavailable");

    assert!(matches!(
        err,
        MessagesClientError::Transport(TransportError::Unavailable(_))
    ));
    assert!(err.to_string().contains("connection refused"));
}
