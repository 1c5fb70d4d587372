//! Hydration of account records from raw API mappings.
//!
//! The accounts API is allowed to grow: keys this crate does not recognise
//! are skipped, and a value of an unexpected type leaves the field unset
//! instead of failing the whole record.

use super::Account;
use chrono::{DateTime, Utc};
use serde_json::{Map, Value};
use tracing::trace;

/// Builds typed records from raw API mappings.
pub trait Hydrator {
    /// The record type produced.
    type Target: Default;

    /// Copies recognised keys from `data` onto `target`. Fields whose key is
    /// absent, null, or holds an uncoercible value are left untouched.
    fn hydrate_object(&self, data: &Map<String, Value>, target: &mut Self::Target);

    /// Builds a fresh record from `data`.
    fn hydrate(&self, data: &Map<String, Value>) -> Self::Target {
        let mut target = Self::Target::default();
        self.hydrate_object(data, &mut target);
        target
    }
}

/// Applies a coerced value, returning `false` when coercion failed.
type FieldSetter = fn(&mut Account, &Value) -> bool;

/// Keys copied onto an [`Account`], each with its coercing setter.
const ACCOUNT_FIELDS: &[(&str, FieldSetter)] = &[
    ("api_key", set_api_key),
    ("name", set_name),
    ("primary_account_api_key", set_primary_account_api_key),
    ("use_primary_account_balance", set_use_primary_account_balance),
    ("created_at", set_created_at),
    ("suspended", set_suspended),
    ("balance", set_balance),
    ("credit_limit", set_credit_limit),
];

fn set_api_key(account: &mut Account, value: &Value) -> bool {
    coerce_string(value)
        .map(|coerced| account.set_api_key(Some(coerced)))
        .is_some()
}

fn set_name(account: &mut Account, value: &Value) -> bool {
    coerce_string(value)
        .map(|coerced| account.set_name(Some(coerced)))
        .is_some()
}

fn set_primary_account_api_key(account: &mut Account, value: &Value) -> bool {
    coerce_string(value)
        .map(|coerced| account.set_primary_account_api_key(Some(coerced)))
        .is_some()
}

fn set_use_primary_account_balance(account: &mut Account, value: &Value) -> bool {
    coerce_bool(value)
        .map(|coerced| account.set_use_primary_account_balance(Some(coerced)))
        .is_some()
}

fn set_created_at(account: &mut Account, value: &Value) -> bool {
    coerce_timestamp(value)
        .map(|coerced| account.set_created_at(Some(coerced)))
        .is_some()
}

fn set_suspended(account: &mut Account, value: &Value) -> bool {
    coerce_bool(value)
        .map(|coerced| account.set_suspended(Some(coerced)))
        .is_some()
}

fn set_balance(account: &mut Account, value: &Value) -> bool {
    coerce_number(value)
        .map(|coerced| account.set_balance(Some(coerced)))
        .is_some()
}

fn set_credit_limit(account: &mut Account, value: &Value) -> bool {
    coerce_number(value)
        .map(|coerced| account.set_credit_limit(Some(coerced)))
        .is_some()
}

/// Hydrates [`Account`] records.
///
/// # Examples
///
/// ```
/// use switchboard::accounts::{AccountHydrator, Hydrator};
/// use serde_json::json;
///
/// let data = json!({"api_key": "bbe6222f", "name": "Department B", "balance": "12.5"});
/// let account = AccountHydrator.hydrate(data.as_object().expect("object"));
/// assert_eq!(account.name(), Some("Department B"));
/// assert_eq!(account.balance(), Some(12.5));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct AccountHydrator;

impl AccountHydrator {
    /// Hydrates every object in a listing, skipping entries that are not
    /// objects.
    #[must_use]
    pub fn hydrate_all(&self, items: &[Value]) -> Vec<Account> {
        items
            .iter()
            .filter_map(Value::as_object)
            .map(|data| self.hydrate(data))
            .collect()
    }
}

impl Hydrator for AccountHydrator {
    type Target = Account;

    fn hydrate_object(&self, data: &Map<String, Value>, target: &mut Account) {
        for (key, value) in data {
            match ACCOUNT_FIELDS.iter().find(|(known, _)| *known == key.as_str()) {
                Some(_) if value.is_null() => {}
                Some((_, setter)) => {
                    if !setter(target, value) {
                        trace!(key = %key, "discarding account field of unexpected type");
                    }
                }
                None => trace!(key = %key, "ignoring unrecognised account field"),
            }
        }
    }
}

fn coerce_string(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

fn coerce_bool(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(flag) => Some(*flag),
        Value::Number(number) => match number.as_u64() {
            Some(0) => Some(false),
            Some(1) => Some(true),
            _ => None,
        },
        Value::String(text) => match text.trim() {
            "true" | "1" => Some(true),
            "false" | "0" => Some(false),
            _ => None,
        },
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

fn coerce_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
        Value::Null | Value::Bool(_) | Value::Array(_) | Value::Object(_) => None,
    }
}

fn coerce_timestamp(value: &Value) -> Option<DateTime<Utc>> {
    let text = value.as_str()?;
    DateTime::parse_from_rfc3339(text.trim())
        .map(|parsed| parsed.with_timezone(&Utc))
        .ok()
}
