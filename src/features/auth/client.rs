//! Client wrappers for Medicheck auth endpoints. Credentials pass straight
//! through to the API and must never be logged.

use crate::app_lib::{AppError, post_json};
use crate::features::auth::types::{AuthResponse, LoginRequest, RegisterRequest};

/// Exchanges credentials for a bearer token and the account's role.
pub async fn login(request: &LoginRequest) -> Result<AuthResponse, AppError> {
    post_json("/auth/login", request, None).await
}

/// Creates an account and signs it in, returning the fresh session pair.
pub async fn register(request: &RegisterRequest) -> Result<AuthResponse, AppError> {
    post_json("/auth/register", request, None).await
}
