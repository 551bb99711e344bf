//! Patient consent management: who may see the patient's records.

pub mod client;
pub mod types;
