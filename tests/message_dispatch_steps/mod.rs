//! Step definitions for message dispatch BDD scenarios.

pub mod given;
pub mod then;
pub mod when;
pub mod world;
