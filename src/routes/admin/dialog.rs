//! Key/value dialog for one record. The field list is rebuilt only when a
//! different record is opened. Inputs show the text exactly as typed, so typing
//! neither re-renders the form nor reformats the value under the caret.

use crate::features::admin::{
    console::{AdminConsole, DialogMode, Mutation},
    types::{RecordKind, field_label},
};
use leptos::{
    callback::{Callable, Callback},
    prelude::*,
};

const INPUT_CLASS: &str = "bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-blue-500 focus:border-blue-500 block w-full p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:text-white disabled:opacity-70";

#[derive(Clone, Debug, PartialEq)]
struct OpenDialog {
    kind: RecordKind,
    mode: DialogMode,
    id: Option<String>,
}

#[component]
pub(super) fn RecordDialogView(
    console: RwSignal<AdminConsole>,
    dispatch: Callback<Mutation>,
) -> impl IntoView {
    let opened = Memo::new(move |_| {
        console.with(|console| {
            console.dialog().map(|dialog| OpenDialog {
                kind: dialog.kind,
                mode: dialog.mode,
                id: dialog.record.id(),
            })
        })
    });

    let on_save = move |_| {
        if let Some(mutation) = console.with_untracked(AdminConsole::save) {
            dispatch.run(mutation);
        }
    };
    let on_dismiss = move |_| console.update(AdminConsole::close_dialog);

    move || {
        let opened = opened.get()?;
        let caption = format!("{} #{}", opened.kind.title(), opened.id.unwrap_or_default());
        let dialog = console.with_untracked(|console| console.dialog().cloned())?;
        let fields = dialog
            .record
            .fields()
            .map(|(key, _)| {
                let key = key.to_string();
                let editable = dialog.is_editable(&key);
                let label = field_label(&key);
                let value_key = key.clone();
                let value = move || {
                    console.with(|console| {
                        console
                            .dialog()
                            .map(|dialog| dialog.text(&value_key))
                            .unwrap_or_default()
                    })
                };
                view! {
                    <div>
                        <label class="block mb-2 text-xs font-medium text-gray-500 dark:text-gray-400">
                            {label}
                        </label>
                        <input
                            type="text"
                            class=INPUT_CLASS
                            prop:value=value
                            disabled={!editable}
                            on:input=move |ev| {
                                let text = event_target_value(&ev);
                                console.update(|console| {
                                    console.edit_field(&key, &text);
                                });
                            }
                        />
                    </div>
                }
            })
            .collect_view();

        Some(view! {
            <div class="fixed inset-0 z-50 flex items-center justify-center bg-gray-900/50 p-4">
                <div
                    class="w-full max-w-lg max-h-[90vh] overflow-y-auto rounded-lg bg-white shadow-lg dark:bg-gray-800"
                    role="dialog"
                    aria-modal="true"
                >
                    <div class="flex items-center justify-between border-b border-gray-200 p-4 dark:border-gray-700">
                        <h3 class="text-lg font-semibold text-gray-900 dark:text-white">
                            {dialog.title()}
                        </h3>
                        <span class="text-xs uppercase text-gray-400">{caption}</span>
                    </div>
                    <div class="space-y-4 p-4">{fields}</div>
                    <div class="flex justify-end gap-3 border-t border-gray-200 p-4 dark:border-gray-700">
                        <button
                            type="button"
                            class="rounded-lg border border-gray-300 px-4 py-2 text-sm font-medium text-gray-700 hover:bg-gray-50 dark:border-gray-600 dark:text-gray-200 dark:hover:bg-gray-700"
                            on:click=on_dismiss
                        >
                            {dialog.dismiss_label()}
                        </button>
                        {(opened.mode == DialogMode::Edit)
                            .then(|| {
                                view! {
                                    <button
                                        type="button"
                                        class="rounded-lg bg-blue-700 px-4 py-2 text-sm font-medium text-white hover:bg-blue-800 dark:bg-blue-600 dark:hover:bg-blue-700"
                                        on:click=on_save
                                    >
                                        "Save Changes"
                                    </button>
                                }
                            })}
                    </div>
                </div>
            </div>
        })
    }
}
