//! Inline banners for flow notices and failures. Text shown here comes from
//! fixed strings or a service `detail`, never from credentials or tokens.

use leptos::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlertKind {
    Error,
    Success,
}

impl AlertKind {
    fn class(self) -> &'static str {
        match self {
            AlertKind::Error => {
                "flex items-start gap-2 rounded-lg border border-red-200 bg-red-50 px-4 py-3 text-sm text-red-700 dark:border-red-400 dark:bg-red-900/30 dark:text-red-200"
            }
            AlertKind::Success => {
                "flex items-start gap-2 rounded-lg border border-emerald-200 bg-emerald-50 px-4 py-3 text-sm text-emerald-700 dark:border-emerald-400 dark:bg-emerald-900/30 dark:text-emerald-200"
            }
        }
    }

    fn icon(self) -> &'static str {
        match self {
            AlertKind::Error => "error",
            AlertKind::Success => "check_circle",
        }
    }
}

#[component]
pub fn Alert(kind: AlertKind, #[prop(into)] message: String) -> impl IntoView {
    let role = if kind == AlertKind::Error { "alert" } else { "status" };

    view! {
        <div class=kind.class() role=role>
            <span class="material-symbols-outlined text-base" aria-hidden="true">{kind.icon()}</span>
            <span>{message}</span>
        </div>
    }
}
