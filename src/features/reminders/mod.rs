//! Medication and appointment reminders: list and schedule.

pub mod client;
pub mod types;
