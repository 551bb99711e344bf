//! Feature modules pairing typed API clients with their request/response
//! contracts. Routes compose these; no view talks to the network directly.

pub mod auth;
pub mod consents;
pub mod messages;
pub mod notes;
pub mod records;
pub mod reminders;
pub mod symptoms;
