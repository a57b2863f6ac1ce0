use crate::app_lib::{GIT_COMMIT_HASH, config::AppConfig};
use crate::components::AppShell;
use leptos::prelude::*;

/// Build commit plus the endpoint and log level this bundle resolved at startup.
#[component]
pub fn HealthPage() -> impl IntoView {
    let config = use_context::<AppConfig>().unwrap_or_else(AppConfig::load);
    let api_base_url = if config.api_base_url.is_empty() {
        "(same origin)".to_string()
    } else {
        config.api_base_url
    };
    let rows = [
        ("Commit", GIT_COMMIT_HASH.to_string()),
        ("API base URL", api_base_url),
        ("Log level", config.log_level),
    ];

    view! {
        <AppShell>
            <div class="flex justify-center">
                <div class="w-full max-w-[38rem] rounded-lg border border-neutral-200 bg-white dark:border-neutral-300 dark:bg-neutral-600">
                    <div class="border-b-2 border-[#0000002d] px-6 py-3 text-neutral-600 dark:text-neutral-50 font-semibold">
                        "Console Status"
                    </div>
                    <dl class="divide-y divide-neutral-200 px-6 dark:divide-neutral-500">
                        {rows
                            .into_iter()
                            .map(|(label, value)| {
                                view! {
                                    <div class="flex justify-between gap-4 py-3 text-sm">
                                        <dt class="text-neutral-500 dark:text-neutral-300">{label}</dt>
                                        <dd class="font-mono text-black dark:text-neutral-50">{value}</dd>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </dl>
                </div>
            </div>
        </AppShell>
    }
}
