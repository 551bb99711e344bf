//! Medicheck web client: a role-based frontend for the Medicheck health
//! platform, compiled to WebAssembly and served as static files.
//!
//! Patients, doctors, and institutions sign in against the Medicheck API and
//! land on a role-specific dashboard; every page is a thin client over a REST
//! endpoint. The crate splits into:
//!
//! - [`app_lib`] — request gateway, configuration, errors, build metadata.
//! - [`features`] — per-domain API clients and the session/guard machinery.
//! - [`components`] — shared UI building blocks.
//! - [`routes`] — pages and the route table.
//!
//! All access-control checks here are UX only. The API re-validates the token
//! and role on every request.

pub mod app;
pub mod app_lib;
pub mod components;
pub mod features;
pub mod routes;
