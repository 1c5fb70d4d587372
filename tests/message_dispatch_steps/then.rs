//! Then steps for message dispatch BDD scenarios.

use super::world::DispatchWorld;
use rstest_bdd_macros::then;
use serde_json::Value;
use switchboard::messages::{ports::TransportError, services::MessagesClientError};

#[then("the send succeeds with a message uuid")]
fn send_succeeds(world: &DispatchWorld) -> Result<(), eyre::Report> {
    match world.last_send_result.as_ref() {
        Some(Ok(receipt)) if !receipt.message_uuid().as_ref().is_nil() => Ok(()),
        other => Err(eyre::eyre!("expected a receipt with a uuid, got {other:?}")),
    }
}

#[then("the send fails with status {status:u16}")]
fn send_fails_with_status(world: &DispatchWorld, status: u16) -> Result<(), eyre::Report> {
    let result = world
        .last_send_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing send result in scenario world"))?;
    match result {
        Err(MessagesClientError::Transport(TransportError::Rejected { status: actual, .. }))
            if *actual == status =>
        {
            Ok(())
        }
        other => Err(eyre::eyre!("expected rejection with status {status}, got {other:?}")),
    }
}

#[then("{count:usize} requests were recorded")]
fn requests_recorded(world: &DispatchWorld, count: usize) -> Result<(), eyre::Report> {
    let sent = world
        .transport
        .sent()
        .map_err(|err| eyre::eyre!("transport state unreadable: {err}"))?;
    if sent.len() != count {
        return Err(eyre::eyre!("expected {count} requests, found {}", sent.len()));
    }
    Ok(())
}

#[then(r#"the delivered payload has "{key}" equal to "{value}""#)]
fn payload_key_equals(
    world: &DispatchWorld,
    key: String,
    value: String,
) -> Result<(), eyre::Report> {
    let payload = world.delivered_payload()?;
    let actual = payload.get(&key).and_then(Value::as_str);
    if actual != Some(value.as_str()) {
        return Err(eyre::eyre!("expected {key} = {value}, found {actual:?}"));
    }
    Ok(())
}

#[then(r#"the delivered "{object}" object has "{key}" equal to "{value}""#)]
fn nested_key_equals(
    world: &DispatchWorld,
    object: String,
    key: String,
    value: String,
) -> Result<(), eyre::Report> {
    let payload = world.delivered_payload()?;
    let actual = payload
        .get(&object)
        .and_then(Value::as_object)
        .and_then(|nested| nested.get(&key))
        .and_then(Value::as_str);
    if actual != Some(value.as_str()) {
        return Err(eyre::eyre!("expected {object}.{key} = {value}, found {actual:?}"));
    }
    Ok(())
}

#[then(r#"the delivered payload has no "{key}" key"#)]
fn payload_lacks_key(world: &DispatchWorld, key: String) -> Result<(), eyre::Report> {
    let payload = world.delivered_payload()?;
    if payload.contains_key(&key) {
        return Err(eyre::eyre!("unexpected {key} in payload: {payload:?}"));
    }
    Ok(())
}

#[then(r#"construction fails for field "{field}""#)]
fn construction_fails(world: &DispatchWorld, field: String) -> Result<(), eyre::Report> {
    let err = world
        .construction_error
        .as_ref()
        .ok_or_else(|| eyre::eyre!("expected construction to fail"))?;
    if err.field() != Some(field.as_str()) {
        return Err(eyre::eyre!("expected failure on {field}, got {err}"));
    }
    if world.pending.is_some() {
        return Err(eyre::eyre!("a message was staged despite the failure"));
    }
    Ok(())
}
