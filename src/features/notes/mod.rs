//! Personal notes: list and create, scoped by the API to the caller.

pub mod client;
pub mod types;
