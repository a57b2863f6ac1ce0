use crate::{features::auth::state::use_auth, routes::paths};
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

/// Redirects to the login screen when no token is stored. UX-only: the API
/// rejects unauthenticated admin calls on its own.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();

    Effect::new(move |_| {
        if !auth.is_authenticated.get() {
            navigate(paths::LOGIN, Default::default());
        }
    });

    view! {
        <Show when=move || auth.is_authenticated.get()>
            {children()}
        </Show>
    }
}
