//! Account record returned by the accounts API.

use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::{Map, Number, Value};

/// A primary account or subaccount as reported by the API.
///
/// Every field is optional: records are populated from whatever the API
/// returned and no field is required to be present.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Account {
    api_key: Option<String>,
    name: Option<String>,
    primary_account_api_key: Option<String>,
    use_primary_account_balance: Option<bool>,
    created_at: Option<DateTime<Utc>>,
    suspended: Option<bool>,
    balance: Option<f64>,
    credit_limit: Option<f64>,
}

impl Account {
    /// Creates an empty account record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the account API key.
    #[must_use]
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    /// Returns the account display name.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns the API key of the owning primary account.
    #[must_use]
    pub fn primary_account_api_key(&self) -> Option<&str> {
        self.primary_account_api_key.as_deref()
    }

    /// Returns whether the account draws on the primary account's balance.
    #[must_use]
    pub const fn use_primary_account_balance(&self) -> Option<bool> {
        self.use_primary_account_balance
    }

    /// Returns when the account was created.
    #[must_use]
    pub const fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }

    /// Returns whether the account is suspended.
    #[must_use]
    pub const fn suspended(&self) -> Option<bool> {
        self.suspended
    }

    /// Returns the account balance.
    #[must_use]
    pub const fn balance(&self) -> Option<f64> {
        self.balance
    }

    /// Returns the credit limit.
    #[must_use]
    pub const fn credit_limit(&self) -> Option<f64> {
        self.credit_limit
    }

    /// Sets or clears the API key.
    pub fn set_api_key(&mut self, api_key: Option<String>) {
        self.api_key = api_key;
    }

    /// Sets or clears the display name.
    pub fn set_name(&mut self, name: Option<String>) {
        self.name = name;
    }

    /// Sets or clears the primary account API key.
    pub fn set_primary_account_api_key(&mut self, api_key: Option<String>) {
        self.primary_account_api_key = api_key;
    }

    /// Sets or clears the shared-balance flag.
    pub const fn set_use_primary_account_balance(&mut self, value: Option<bool>) {
        self.use_primary_account_balance = value;
    }

    /// Sets or clears the creation timestamp.
    pub const fn set_created_at(&mut self, created_at: Option<DateTime<Utc>>) {
        self.created_at = created_at;
    }

    /// Sets or clears the suspension flag.
    pub const fn set_suspended(&mut self, suspended: Option<bool>) {
        self.suspended = suspended;
    }

    /// Sets or clears the balance.
    pub const fn set_balance(&mut self, balance: Option<f64>) {
        self.balance = balance;
    }

    /// Sets or clears the credit limit.
    pub const fn set_credit_limit(&mut self, credit_limit: Option<f64>) {
        self.credit_limit = credit_limit;
    }

    /// Projects the populated fields back to their API keys.
    ///
    /// Timestamps are rendered as RFC 3339 in UTC. Sub-second digits are
    /// written only when non-zero.
    #[must_use]
    pub fn to_payload(&self) -> Map<String, Value> {
        let mut payload = Map::new();
        insert_string(&mut payload, "api_key", self.api_key.as_deref());
        insert_string(&mut payload, "name", self.name.as_deref());
        insert_string(
            &mut payload,
            "primary_account_api_key",
            self.primary_account_api_key.as_deref(),
        );
        if let Some(value) = self.use_primary_account_balance {
            payload.insert("use_primary_account_balance".to_owned(), value.into());
        }
        if let Some(created_at) = self.created_at {
            payload.insert(
                "created_at".to_owned(),
                created_at.to_rfc3339_opts(SecondsFormat::AutoSi, true).into(),
            );
        }
        if let Some(value) = self.suspended {
            payload.insert("suspended".to_owned(), value.into());
        }
        insert_number(&mut payload, "balance", self.balance);
        insert_number(&mut payload, "credit_limit", self.credit_limit);
        payload
    }
}

fn insert_string(payload: &mut Map<String, Value>, key: &str, value: Option<&str>) {
    if let Some(value) = value {
        payload.insert(key.to_owned(), Value::String(value.to_owned()));
    }
}

// Non-finite amounts have no JSON representation and are left out.
fn insert_number(payload: &mut Map<String, Value>, key: &str, value: Option<f64>) {
    if let Some(number) = value.and_then(Number::from_f64) {
        payload.insert(key.to_owned(), Value::Number(number));
    }
}
