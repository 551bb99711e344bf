//! Client wrapper for the symptom checker endpoint.

use crate::app_lib::{AppError, post_json};
use crate::features::symptoms::types::{AnalyzeSymptomsRequest, SymptomAnalysis};

/// Submits symptoms for rule-based analysis and returns assistive guidance.
pub async fn analyze_symptoms(
    request: &AnalyzeSymptomsRequest,
    token: &str,
) -> Result<SymptomAnalysis, AppError> {
    post_json("/symptoms", request, Some(token)).await
}
