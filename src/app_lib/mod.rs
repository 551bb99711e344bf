//! Shared frontend utilities for API access, configuration, errors, and build metadata.
//!
//! ## Session and Request Flow
//!
//! 1. **Login or register:** The client POSTs credentials to `/auth/login` or
//!    `/auth/register` and receives `{access_token, role}`.
//! 2. **Storage:** The token/role pair is persisted through the session store
//!    (`features::auth::session`) so a reload restores the signed-in state.
//! 3. **Requests:** Feature clients call the helpers in [`api`] with the bearer
//!    token; every call shares the same timeout and error normalization, so a
//!    failing endpoint degrades into an inline message instead of a broken page.
//!
//! Centralizing these helpers keeps network behavior consistent and avoids
//! duplicated logic in routes and features. Tokens pass through as opaque
//! strings; callers must avoid logging them.

pub mod api;
pub mod build_info;
pub mod config;
pub mod errors;

pub use api::{get_json, post_json, put_json};
pub use errors::AppError;
