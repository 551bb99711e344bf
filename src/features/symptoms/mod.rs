//! Symptom checker: assistive analysis, explicitly non-diagnostic.

pub mod client;
pub mod types;
