//! Client wrappers for consent endpoints. Grant and revoke are patient-only
//! on the API side.

use crate::app_lib::{AppError, get_json, post_json};
use crate::features::consents::types::{
    ConsentGranted, ConsentRevoked, ConsentsResponse, GrantConsentRequest, RevokeConsentRequest,
};

/// Fetches the consents visible to the caller.
pub async fn list_consents(token: &str) -> Result<ConsentsResponse, AppError> {
    get_json("/consents", Some(token)).await
}

/// Grants a doctor or institution access to the caller's records.
pub async fn grant_consent(
    request: &GrantConsentRequest,
    token: &str,
) -> Result<ConsentGranted, AppError> {
    post_json("/consents/grant", request, Some(token)).await
}

/// Revokes a previously granted consent.
pub async fn revoke_consent(
    request: &RevokeConsentRequest,
    token: &str,
) -> Result<ConsentRevoked, AppError> {
    post_json("/consents/revoke", request, Some(token)).await
}
