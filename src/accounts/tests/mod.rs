//! Unit tests for the accounts module.
