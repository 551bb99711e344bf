//! Request and response types for patient record endpoints. History,
//! medication, and test payloads are clinician-shaped JSON the client only
//! displays, so they stay opaque values.

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PatientRecords {
    pub medical_history: serde_json::Value,
    pub medications: serde_json::Value,
    pub test_results: serde_json::Value,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct UpdateHistoryRequest {
    pub items: Vec<serde_json::Value>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct HistoryUpdated {
    pub ok: bool,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CreateDoctorNoteRequest {
    pub patient_id: String,
    pub note_text: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct DoctorNoteCreated {
    pub ok: bool,
    pub note_id: String,
}

#[cfg(test)]
mod tests {
    use super::PatientRecords;

    #[test]
    fn records_decode_with_empty_sections() {
        let decoded: PatientRecords = serde_json::from_str(
            r#"{"medical_history":[],"medications":[],"test_results":[]}"#,
        )
        .expect("empty records should decode");
        assert!(decoded.medical_history.as_array().is_some_and(Vec::is_empty));
    }
}
