//! Shared frontend utilities for API access, configuration, errors, telemetry,
//! and build metadata.
//!
//! ## Core Flows
//!
//! ### Sign-in
//!
//! 1. **Challenge:** The client POSTs `{email, password}` to `/auth/mfa/request`
//!    and the service issues a one-time code out of band.
//! 2. **Exchange:** The client POSTs `username`, `password` and `mfa_code` as a
//!    form to `/auth/token` and receives `{access_token}`.
//! 3. **Usage:** The token is kept in `localStorage` and sent as
//!    `Authorization: Bearer` on every `/admin/*` call until sign-out.
//!
//! ### Admin tables
//!
//! Each tab fetches `GET /admin/{kind}` and replaces its list wholesale. Edits
//! PUT the full record to `/admin/{kind}/{id}`, deletes call
//! `DELETE /admin/{kind}/{id}`, and both refetch afterwards.
//!
//! Centralizing these helpers keeps network behavior consistent and avoids
//! duplicated logic in routes and features. Callers must never log credentials,
//! codes, or tokens.

#[cfg(target_arch = "wasm32")]
pub mod api;
#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes, dead_code)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}
pub mod config;
pub mod errors;
pub mod telemetry;

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};

pub use errors::AppError;
