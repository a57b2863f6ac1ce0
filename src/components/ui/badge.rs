//! Small status pill used in admin table cells.

use crate::features::admin::types::Tone;
use leptos::prelude::*;

#[component]
pub fn Badge(label: String, tone: Tone) -> impl IntoView {
    let class = match tone {
        Tone::Success => {
            "inline-flex rounded-full bg-emerald-100 px-2.5 py-0.5 text-xs font-medium text-emerald-800 dark:bg-emerald-900/40 dark:text-emerald-200"
        }
        Tone::Warning => {
            "inline-flex rounded-full bg-amber-100 px-2.5 py-0.5 text-xs font-medium text-amber-800 dark:bg-amber-900/40 dark:text-amber-200"
        }
        Tone::Neutral => {
            "inline-flex rounded-full bg-gray-100 px-2.5 py-0.5 text-xs font-medium text-gray-700 dark:bg-gray-700 dark:text-gray-200"
        }
    };

    view! { <span class=class>{label}</span> }
}
