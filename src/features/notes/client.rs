//! Client wrappers for note endpoints.

use crate::app_lib::{AppError, get_json, post_json};
use crate::features::notes::types::{CreateNoteRequest, NoteCreated, NotesResponse};

/// Fetches the caller's notes, newest first.
pub async fn list_notes(token: &str) -> Result<NotesResponse, AppError> {
    get_json("/notes", Some(token)).await
}

/// Creates a note owned by the caller.
pub async fn create_note(request: &CreateNoteRequest, token: &str) -> Result<NoteCreated, AppError> {
    post_json("/notes", request, Some(token)).await
}
