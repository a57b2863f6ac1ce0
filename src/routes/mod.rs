mod admin;
mod dashboard;
mod health;
mod login;
mod not_found;

pub(crate) use admin::AdminPage;
pub(crate) use dashboard::DashboardPage;
pub(crate) use health::HealthPage;
pub(crate) use login::LoginPage;
pub(crate) use not_found::NotFoundPage;

use leptos::prelude::*;
use leptos_router::components::{Route, Routes};
use leptos_router::path;

/// Route paths shared by links, guards and redirects.
pub(crate) mod paths {
    pub const DASHBOARD: &str = "/";
    pub const LOGIN: &str = "/login";
    pub const ADMIN: &str = "/admin";
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <NotFoundPage /> }>
            <Route path=path!("/") view=DashboardPage />
            <Route path=path!("/login") view=LoginPage />
            <Route path=path!("/admin") view=AdminPage />
            <Route path=path!("/health") view=HealthPage />
        </Routes>
    }
}
