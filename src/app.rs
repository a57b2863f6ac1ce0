use crate::app_lib::{GIT_COMMIT_HASH, config::AppConfig};
use crate::features::auth::state::AuthProvider;
use crate::routes::AppRoutes;
use leptos::prelude::*;
use leptos_router::components::Router;
use tracing::info;

/// Root component. The resolved [`AppConfig`] is shared through context so
/// pages can show where the console is pointed.
#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    info!(commit = GIT_COMMIT_HASH, api_base_url = %config.api_base_url, "admin console started");
    provide_context(config);

    view! {
        <AuthProvider>
            <Router>
                <AppRoutes />
            </Router>
        </AuthProvider>
    }
}
