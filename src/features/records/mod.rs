//! Patient records: consented reads, patient history updates, and doctor
//! clinical notes.

pub mod client;
pub mod types;
