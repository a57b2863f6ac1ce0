#[cfg(target_arch = "wasm32")]
use admin_console::{App, app_lib::config::AppConfig, app_lib::telemetry};
#[cfg(target_arch = "wasm32")]
use leptos::prelude::*;

#[cfg(target_arch = "wasm32")]
pub fn main() {
    let config = AppConfig::load();
    telemetry::init(&config.log_level);
    mount_to_body(move || view! { <App config=config.clone() /> });
}

#[cfg(not(target_arch = "wasm32"))]
pub fn main() {}
