//! Account records read back from the accounts API.
//!
//! Hydration is the inverse of message serialisation: a raw response mapping
//! is projected onto a typed [`Account`] through [`AccountHydrator`].

mod account;
mod hydrator;

pub use account::Account;
pub use hydrator::{AccountHydrator, Hydrator};

#[cfg(test)]
mod tests;
