//! Request and response types for reminder endpoints.

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CreateReminderRequest {
    pub remind_at: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub payload_json: serde_json::Value,
    pub patient_id: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Reminder {
    pub id: String,
    pub remind_at: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub status: Option<String>,
    pub created_at: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct RemindersResponse {
    pub items: Vec<Reminder>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ReminderCreated {
    pub ok: bool,
    pub reminder_id: String,
}

#[cfg(test)]
mod tests {
    use super::{CreateReminderRequest, RemindersResponse};
    use serde_json::json;

    #[test]
    fn reminder_kind_maps_to_the_type_field() {
        let request = CreateReminderRequest {
            remind_at: "2026-09-01T09:00:00Z".to_string(),
            kind: "MEDICATION".to_string(),
            payload_json: json!({"note": "blood pressure pill"}),
            patient_id: None,
        };
        let encoded = serde_json::to_string(&request).expect("request should encode");
        assert!(encoded.contains(r#""type":"MEDICATION""#));

        let decoded: RemindersResponse = serde_json::from_str(
            r#"{"items":[{"id":"r1","remind_at":"2026-09-01T09:00:00Z","type":"MEDICATION","status":"SCHEDULED"}]}"#,
        )
        .expect("row should decode");
        assert_eq!(decoded.items[0].kind, "MEDICATION");
    }
}
