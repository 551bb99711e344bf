//! Request and response types for auth API calls, plus the role vocabulary
//! shared by the session store and the view guards.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Account roles recognized by the Medicheck API.
///
/// The API stores and returns roles in uppercase (`"PATIENT"`) but accepts
/// lowercase in registration payloads, so serialization emits the wire form
/// and parsing accepts either casing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Patient,
    Doctor,
    Institution,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Patient, Role::Doctor, Role::Institution];

    /// Canonical uppercase form used for storage and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Patient => "PATIENT",
            Role::Doctor => "DOCTOR",
            Role::Institution => "INSTITUTION",
        }
    }

    /// Lowercase form expected by auth request payloads.
    pub fn wire_name(&self) -> &'static str {
        match self {
            Role::Patient => "patient",
            Role::Doctor => "doctor",
            Role::Institution => "institution",
        }
    }

    /// Parses a role from any casing; unknown names yield `None`.
    pub fn parse(value: &str) -> Option<Role> {
        let trimmed = value.trim();
        Role::ALL
            .into_iter()
            .find(|role| role.as_str().eq_ignore_ascii_case(trimmed))
    }
}

impl Serialize for Role {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.wire_name())
    }
}

impl<'de> Deserialize<'de> for Role {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Role::parse(&value)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown role: {value}")))
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub role: Role,
}

/// Successful answer from `/auth/login` and `/auth/register`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
    pub role: Role,
}

fn default_token_type() -> String {
    "bearer".to_string()
}

#[cfg(test)]
mod tests {
    use super::{AuthResponse, RegisterRequest, Role};

    #[test]
    fn role_parses_any_casing() {
        assert_eq!(Role::parse("PATIENT"), Some(Role::Patient));
        assert_eq!(Role::parse("doctor"), Some(Role::Doctor));
        assert_eq!(Role::parse(" Institution "), Some(Role::Institution));
        assert_eq!(Role::parse("admin"), None);
        assert_eq!(Role::parse(""), None);
    }

    #[test]
    fn role_serializes_to_wire_form() {
        let request = RegisterRequest {
            email: "pat@example.com".to_string(),
            password: "secret".to_string(),
            role: Role::Patient,
        };
        let encoded = serde_json::to_string(&request).expect("request should encode");
        assert!(encoded.contains(r#""role":"patient""#));
    }

    #[test]
    fn auth_response_decodes_uppercase_role_and_defaults_token_type() {
        let decoded: AuthResponse =
            serde_json::from_str(r#"{"access_token":"tok-1","role":"DOCTOR"}"#)
                .expect("response should decode");
        assert_eq!(decoded.access_token, "tok-1");
        assert_eq!(decoded.token_type, "bearer");
        assert_eq!(decoded.role, Role::Doctor);
    }

    #[test]
    fn auth_response_rejects_unknown_role() {
        let result = serde_json::from_str::<AuthResponse>(
            r#"{"access_token":"tok-1","token_type":"bearer","role":"superuser"}"#,
        );
        assert!(result.is_err());
    }
}
