//! Auth feature module covering the two-step sign-in flow and the bearer token
//! it produces. It keeps authentication logic out of the UI and must stay
//! aligned with backend expectations. This module touches security boundaries
//! and must avoid logging secrets or token material.
//!
//! Flow Overview: step one posts email and password to request a one-time code;
//! step two posts the same credentials plus the code as a form and receives the
//! access token, which is handed to a [`token::TokenStore`].

#[cfg(target_arch = "wasm32")]
pub(crate) mod client;
pub mod flow;
#[cfg(target_arch = "wasm32")]
mod guards;
#[cfg(target_arch = "wasm32")]
pub(crate) mod state;
pub mod token;
pub mod types;

#[cfg(target_arch = "wasm32")]
pub(crate) use guards::RequireAuth;
