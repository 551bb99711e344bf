//! Request and response types for secure messaging endpoints.

use crate::features::auth::types::Role;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SendMessageRequest {
    pub patient_id: String,
    pub receiver_user_id: String,
    pub message_text: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Message {
    pub id: String,
    pub sender_role: Role,
    pub message_text: String,
    pub sender_user_id: Option<String>,
    pub receiver_user_id: Option<String>,
    pub created_at: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ConversationResponse {
    pub messages: Vec<Message>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct MessageSent {
    pub ok: bool,
    pub message_id: String,
}

#[cfg(test)]
mod tests {
    use super::ConversationResponse;
    use crate::features::auth::types::Role;

    #[test]
    fn conversation_decodes_sender_roles() {
        let decoded: ConversationResponse = serde_json::from_str(
            r#"{"messages":[
                 {"id":"m1","sender_role":"PATIENT","message_text":"hello doctor"},
                 {"id":"m2","sender_role":"DOCTOR","message_text":"hello","created_at":"2026-03-01T10:00:00Z"}
               ]}"#,
        )
        .expect("thread should decode");
        assert_eq!(decoded.messages[0].sender_role, Role::Patient);
        assert_eq!(decoded.messages[1].sender_role, Role::Doctor);
    }
}
