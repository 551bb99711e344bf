//! Client wrappers for patient record endpoints. The API refuses record
//! reads without an active consent unless the patient asks for their own.

use crate::app_lib::{AppError, get_json, post_json, put_json};
use crate::features::records::types::{
    CreateDoctorNoteRequest, DoctorNoteCreated, HistoryUpdated, PatientRecords,
    UpdateHistoryRequest,
};

/// Fetches the combined record bundle for a patient.
pub async fn patient_records(patient_id: &str, token: &str) -> Result<PatientRecords, AppError> {
    let path = format!("/patients/{patient_id}/records");
    get_json(&path, Some(token)).await
}

/// Replaces the patient's medical history items. Patient-only on the API.
pub async fn update_medical_history(
    patient_id: &str,
    request: &UpdateHistoryRequest,
    token: &str,
) -> Result<HistoryUpdated, AppError> {
    let path = format!("/patients/{patient_id}/medical-history");
    put_json(&path, request, Some(token)).await
}

/// Records a clinical note against a patient. Doctor-only on the API.
pub async fn create_doctor_note(
    request: &CreateDoctorNoteRequest,
    token: &str,
) -> Result<DoctorNoteCreated, AppError> {
    post_json("/doctor-notes", request, Some(token)).await
}
