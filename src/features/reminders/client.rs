//! Client wrappers for reminder endpoints.

use crate::app_lib::{AppError, get_json, post_json};
use crate::features::reminders::types::{
    CreateReminderRequest, ReminderCreated, RemindersResponse,
};

/// Fetches the caller's reminders, newest first.
pub async fn list_reminders(token: &str) -> Result<RemindersResponse, AppError> {
    get_json("/reminders", Some(token)).await
}

/// Schedules a reminder for the caller.
pub async fn create_reminder(
    request: &CreateReminderRequest,
    token: &str,
) -> Result<ReminderCreated, AppError> {
    post_json("/reminders", request, Some(token)).await
}
