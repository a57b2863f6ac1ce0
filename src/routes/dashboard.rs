//! Landing page. Points signed-in operators at the admin tables and everyone
//! else at the sign-in screen.

use crate::{components::AppShell, features::auth::state::use_auth, routes::paths};
use leptos::prelude::*;
use leptos_router::components::A;

/// Renders the dashboard page shell.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = use_auth();

    view! {
        <AppShell>
            <div class="max-w-xl mx-auto text-center space-y-6 py-8">
                <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">"Home"</h1>
                <Show
                    when=move || auth.is_authenticated.get()
                    fallback=|| view! {
                        <A
                            href=paths::LOGIN
                            {..}
                            class="inline-flex items-center px-5 py-2.5 text-sm font-medium text-white bg-blue-700 rounded-lg hover:bg-blue-800 transition-all"
                        >
                            "Sign in to continue"
                        </A>
                    }
                >
                    <A
                        href=paths::ADMIN
                        {..}
                        class="group inline-flex items-center gap-3 p-6 bg-white dark:bg-gray-800 rounded-xl border border-gray-200 dark:border-gray-700 shadow-sm hover:border-blue-500 transition-all"
                    >
                        <span class="material-symbols-outlined text-blue-600">"table_view"</span>
                        <span class="font-semibold text-gray-900 dark:text-white">
                            "Open the admin panel"
                        </span>
                    </A>
                </Show>
            </div>
        </AppShell>
    }
}
