//! Request and response types for the symptom checker. Insight and test
//! payloads are opaque to the client and rendered as formatted JSON.

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SymptomEntry {
    pub symptom: String,
    pub severity: u8,
    pub duration_days: u32,
    pub progression: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AnalyzeSymptomsRequest {
    /// Required when a doctor enters symptoms on a patient's behalf.
    pub patient_id: Option<String>,
    pub symptoms: Vec<SymptomEntry>,
    pub additional_notes: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SymptomAnalysis {
    pub session_id: Option<String>,
    pub urgency: String,
    pub insights: Vec<serde_json::Value>,
    pub recommended_tests: Vec<serde_json::Value>,
    pub safety_statement: String,
}

#[cfg(test)]
mod tests {
    use super::SymptomAnalysis;

    #[test]
    fn analysis_decodes_opaque_insight_payloads() {
        let decoded: SymptomAnalysis = serde_json::from_str(
            r#"{"session_id":"s1","urgency":"ROUTINE",
                "insights":[{"condition":"Respiratory infection","confidence":"Low"}],
                "recommended_tests":[{"test":"Chest X-ray","reason":"Evaluate lung pathology."}],
                "safety_statement":"Not a diagnosis."}"#,
        )
        .expect("analysis should decode");
        assert_eq!(decoded.urgency, "ROUTINE");
        assert_eq!(decoded.insights.len(), 1);
        assert!(decoded.recommended_tests[0].get("test").is_some());
    }
}
