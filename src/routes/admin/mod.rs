//! Admin panel: one tab per record kind, a refresh button, the error banner and
//! the record dialog. State lives in a single [`AdminConsole`] signal; network
//! work runs in local actions that feed results back into it.

mod dialog;
mod table;

use crate::{
    components::{Alert, AlertKind, AppShell, Spinner},
    features::{
        admin::{
            client::HttpAdminService,
            console::{AdminConsole, LoadRequest, Mutation, load, mutate},
            types::RecordKind,
        },
        auth::RequireAuth,
    },
};
use dialog::RecordDialogView;
use leptos::{callback::Callback, prelude::*};
use table::RecordTable;

const TAB_CLASS: &str = "inline-block px-4 py-3 border-b-2 rounded-t-lg text-sm font-medium transition-colors";

/// Renders the admin panel behind the sign-in guard.
#[component]
pub fn AdminPage() -> impl IntoView {
    view! {
        <AppShell>
            <RequireAuth>
                <AdminPanel />
            </RequireAuth>
        </AppShell>
    }
}

#[component]
fn AdminPanel() -> impl IntoView {
    let console = RwSignal::new(AdminConsole::new());

    let load_action = Action::new_local(move |request: &LoadRequest| {
        let request = *request;
        async move {
            let result = load(&HttpAdminService, request).await;
            console.update(|console| console.apply_load(request, result));
        }
    });

    let mutate_action = Action::new_local(move |mutation: &Mutation| {
        let mutation = mutation.clone();
        async move {
            let result = mutate(&HttpAdminService, &mutation).await;
            let refetch = console
                .try_update(|console| console.apply_mutation(&mutation, result))
                .flatten();
            if let Some(request) = refetch {
                let rows = load(&HttpAdminService, request).await;
                console.update(|console| console.apply_load(request, rows));
            }
        }
    });

    let fetch = move |request: Option<LoadRequest>| {
        if let Some(request) = request {
            load_action.dispatch(request);
        }
    };
    let dispatch = Callback::new(move |mutation: Mutation| {
        mutate_action.dispatch(mutation);
    });

    fetch(console.try_update(AdminConsole::refresh));

    let active = Memo::new(move |_| console.with(AdminConsole::active));
    let loading = Memo::new(move |_| console.with(AdminConsole::is_loading));
    let error = Memo::new(move |_| console.with(|console| console.error().map(str::to_string)));

    view! {
        <div class="space-y-6">
            <div class="flex items-center justify-between">
                <div class="space-y-1">
                    <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">
                        "Admin Panel"
                    </h1>
                    <p class="text-sm text-gray-500 dark:text-gray-400">
                        "Review and correct users, submissions and payments."
                    </p>
                </div>
                <button
                    type="button"
                    class="inline-flex items-center gap-2 rounded-lg border border-gray-300 px-4 py-2 text-sm font-medium text-gray-700 hover:bg-gray-50 disabled:opacity-60 dark:border-gray-600 dark:text-gray-200 dark:hover:bg-gray-700"
                    disabled=move || loading.get()
                    on:click=move |_| fetch(console.try_update(AdminConsole::refresh))
                >
                    {move || {
                        if loading.get() {
                            view! { <Spinner small=true /> }.into_any()
                        } else {
                            view! { <span class="material-symbols-outlined text-base">"refresh"</span> }
                                .into_any()
                        }
                    }}
                    "Refresh Data"
                </button>
            </div>

            {move || error.get().map(|message| view! { <Alert kind=AlertKind::Error message=message /> })}

            <div class="overflow-hidden bg-white dark:bg-gray-800 shadow-sm border border-gray-200 dark:border-gray-700 rounded-lg">
                <ul class="flex flex-wrap border-b border-gray-200 dark:border-gray-700" role="tablist">
                    {RecordKind::ALL
                        .into_iter()
                        .map(|kind| {
                            view! {
                                <li role="presentation">
                                    <button
                                        type="button"
                                        role="tab"
                                        class=TAB_CLASS
                                        class=(["border-blue-600", "text-blue-600"], move || active.get() == kind)
                                        class=(["border-transparent", "text-gray-500"], move || active.get() != kind)
                                        aria-selected=move || (active.get() == kind).to_string()
                                        on:click=move |_| {
                                            fetch(console.try_update(|console| console.select_tab(kind)));
                                        }
                                    >
                                        {move || console.with(|console| console.tab_label(kind))}
                                    </button>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
                <div class="p-4" role="tabpanel">
                    {move || {
                        if loading.get() {
                            view! {
                                <div class="flex justify-center p-6">
                                    <Spinner />
                                </div>
                            }
                            .into_any()
                        } else {
                            view! { <RecordTable console=console kind=active.get() dispatch=dispatch /> }
                                .into_any()
                        }
                    }}
                </div>
            </div>

            <RecordDialogView console=console dispatch=dispatch />
        </div>
    }
}
