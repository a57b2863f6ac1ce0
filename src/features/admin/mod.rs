//! Admin tables for users, submissions and payments. The model in [`console`]
//! holds what the tabs show; [`types`] defines the record kinds and how each
//! kind renders; the HTTP client talks to `/admin/*` with the stored bearer
//! token. Authorization is enforced by the backend, not here.

#[cfg(target_arch = "wasm32")]
pub(crate) mod client;
pub mod console;
pub mod types;
