//! Request and response types for consent endpoints.

use serde::{Deserialize, Serialize};

/// Who a patient grants access to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum GranteeType {
    Doctor,
    Institution,
}

impl GranteeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            GranteeType::Doctor => "DOCTOR",
            GranteeType::Institution => "INSTITUTION",
        }
    }

    pub fn parse(value: &str) -> Option<GranteeType> {
        match value.trim().to_ascii_uppercase().as_str() {
            "DOCTOR" => Some(GranteeType::Doctor),
            "INSTITUTION" => Some(GranteeType::Institution),
            _ => None,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct GrantConsentRequest {
    pub grantee_type: GranteeType,
    pub grantee_id: String,
    pub scope_json: serde_json::Value,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct RevokeConsentRequest {
    pub consent_id: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Consent {
    pub id: String,
    pub grantee_type: GranteeType,
    pub grantee_id: String,
    pub status: String,
    pub granted_at: Option<String>,
    pub revoked_at: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ConsentsResponse {
    pub items: Vec<Consent>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ConsentGranted {
    pub ok: bool,
    pub consent_id: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ConsentRevoked {
    pub ok: bool,
}

#[cfg(test)]
mod tests {
    use super::{ConsentsResponse, GranteeType};

    #[test]
    fn grantee_type_round_trips_uppercase() {
        assert_eq!(
            serde_json::to_string(&GranteeType::Doctor).expect("should encode"),
            r#""DOCTOR""#
        );
        assert_eq!(GranteeType::parse("institution"), Some(GranteeType::Institution));
        assert_eq!(GranteeType::parse("clinic"), None);
    }

    #[test]
    fn consent_rows_decode_with_revocation_state() {
        let decoded: ConsentsResponse = serde_json::from_str(
            r#"{"items":[{"id":"c1","grantee_type":"DOCTOR","grantee_id":"d9",
                          "status":"REVOKED","granted_at":"2026-01-01T00:00:00Z",
                          "revoked_at":"2026-02-01T00:00:00Z"}]}"#,
        )
        .expect("row should decode");
        assert_eq!(decoded.items[0].grantee_type, GranteeType::Doctor);
        assert_eq!(decoded.items[0].status, "REVOKED");
    }
}
