//! Auth feature module covering login/register calls, durable session
//! storage, and role-based view guards. The session pair (token + role) is
//! the only client-side credential state; everything else stays on the API.
//!
//! Flow overview: the landing page records a selected role, the login page
//! exchanges credentials for `{access_token, role}` and persists the pair,
//! and `RequireRole` keeps role-restricted pages from rendering (or fetching)
//! for anyone else. The guard is a UX convenience; the API re-checks every
//! request.

pub mod client;
pub mod guards;
pub mod policy;
pub mod session;
pub mod state;
pub mod types;

pub use guards::RequireRole;
