//! Request and response types for note endpoints.

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CreateNoteRequest {
    pub text: String,
    pub patient_id: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Note {
    pub id: String,
    pub text: String,
    pub patient_id: Option<String>,
    pub created_at: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct NotesResponse {
    pub items: Vec<Note>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct NoteCreated {
    pub ok: bool,
    pub note_id: String,
}

#[cfg(test)]
mod tests {
    use super::NotesResponse;

    #[test]
    fn notes_decode_without_timestamps() {
        let decoded: NotesResponse = serde_json::from_str(
            r#"{"items":[{"id":"n1","text":"hello","patient_id":null},
                         {"id":"n2","text":"world","patient_id":"p1","created_at":"2026-01-01T00:00:00Z"}]}"#,
        )
        .expect("rows without created_at should decode");

        assert_eq!(decoded.items.len(), 2);
        assert_eq!(decoded.items[0].created_at, None);
        assert_eq!(decoded.items[1].patient_id.as_deref(), Some("p1"));
    }
}
