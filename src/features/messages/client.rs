//! Client wrappers for secure messaging endpoints. Message bodies are
//! non-diagnostic by policy; the API rejects senders without consent.

use crate::app_lib::{AppError, get_json, post_json};
use crate::features::messages::types::{ConversationResponse, MessageSent, SendMessageRequest};

/// Sends a message within a patient's thread.
pub async fn send_message(
    request: &SendMessageRequest,
    token: &str,
) -> Result<MessageSent, AppError> {
    post_json("/messages", request, Some(token)).await
}

/// Fetches the full message thread for a patient.
pub async fn conversation(patient_id: &str, token: &str) -> Result<ConversationResponse, AppError> {
    let path = format!("/messages/patient/{patient_id}");
    get_json(&path, Some(token)).await
}
