//! Admin console and two-step sign-in screens, rendered client-side with Leptos.
//!
//! Everything that decides *what* happens (the login state machine, the admin
//! list and dialog model, column formatting, configuration and error mapping)
//! lives in `features` and `app_lib` and builds on any target. The Leptos views
//! in `app`, `components` and `routes` only exist for `wasm32`.

#[path = "lib/mod.rs"]
pub mod app_lib;
pub mod features;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod components;
#[cfg(target_arch = "wasm32")]
mod routes;

#[cfg(target_arch = "wasm32")]
pub use app::App;
