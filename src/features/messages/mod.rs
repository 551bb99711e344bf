//! Secure messaging between patients and doctors.

pub mod client;
pub mod types;
