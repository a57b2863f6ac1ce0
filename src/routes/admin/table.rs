use crate::{
    components::Badge,
    features::admin::{
        client::BrowserConfirm,
        console::{AdminConsole, Mutation},
        types::{Cell, Record, RecordKind},
    },
};
use leptos::{
    callback::{Callable, Callback},
    prelude::*,
};

const VIEW_CLASS: &str = "font-medium text-blue-600 hover:underline dark:text-blue-500";
const EDIT_CLASS: &str = "font-medium text-amber-600 hover:underline dark:text-amber-500";
const DELETE_CLASS: &str = "font-medium text-red-600 hover:underline disabled:opacity-50 dark:text-red-500";

/// Table for one record kind. Columns come from the kind; actions are limited
/// to what the kind allows.
#[component]
pub(super) fn RecordTable(
    console: RwSignal<AdminConsole>,
    kind: RecordKind,
    dispatch: Callback<Mutation>,
) -> impl IntoView {
    let rows = Memo::new(move |_| console.with(|console| console.rows(kind).to_vec()));
    let columns = kind.columns();

    view! {
        <div class="relative overflow-x-auto">
            <table class="w-full text-sm text-left rtl:text-right text-gray-500 dark:text-gray-400">
                <thead class="text-xs text-gray-700 uppercase bg-gray-50 dark:bg-gray-700 dark:text-gray-400">
                    <tr>
                        {columns
                            .iter()
                            .map(|column| view! { <th scope="col" class="px-6 py-3">{column.header}</th> })
                            .collect_view()}
                        <th scope="col" class="px-6 py-3">"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let rows = rows.get();
                        if rows.is_empty() {
                            return view! {
                                <tr>
                                    <td class="px-6 py-4 text-center" colspan={(columns.len() + 1).to_string()}>
                                        "No records found."
                                    </td>
                                </tr>
                            }
                            .into_any();
                        }
                        rows.into_iter()
                            .enumerate()
                            .map(|(index, record)| {
                                view! { <RecordRow console=console kind=kind index=index record=record dispatch=dispatch /> }
                            })
                            .collect_view()
                            .into_any()
                    }}
                </tbody>
            </table>
        </div>
    }
}

#[component]
fn RecordRow(
    console: RwSignal<AdminConsole>,
    kind: RecordKind,
    index: usize,
    record: Record,
    dispatch: Callback<Mutation>,
) -> impl IntoView {
    let cells = kind
        .columns()
        .iter()
        .map(|column| {
            let content = match (column.cell)(&record) {
                Cell::Text(text) => text.into_any(),
                Cell::Badge { label, tone } => view! { <Badge label=label tone=tone /> }.into_any(),
            };
            view! { <td class="px-6 py-4">{content}</td> }
        })
        .collect_view();
    let id = record.id().unwrap_or_default();

    let on_delete = move |_| {
        let mutation =
            console.with_untracked(|console| console.request_delete(kind, &id, &BrowserConfirm));
        if let Some(mutation) = mutation {
            dispatch.run(mutation);
        }
    };

    view! {
        <tr class="bg-white border-b dark:bg-gray-800 dark:border-gray-700 border-gray-200">
            {cells}
            <td class="px-6 py-4 space-x-3 whitespace-nowrap">
                <button
                    type="button"
                    class=VIEW_CLASS
                    on:click=move |_| {
                        console.update(|console| {
                            console.open_view(kind, index);
                        });
                    }
                >
                    "View"
                </button>
                {kind
                    .can_edit()
                    .then(|| {
                        view! {
                            <button
                                type="button"
                                class=EDIT_CLASS
                                on:click=move |_| {
                                    console.update(|console| {
                                        console.open_edit(kind, index);
                                    });
                                }
                            >
                                "Edit"
                            </button>
                        }
                    })}
                {kind
                    .can_delete()
                    .then(|| {
                        view! {
                            <button
                                type="button"
                                class=DELETE_CLASS
                                on:click=on_delete
                            >
                                "Delete"
                            </button>
                        }
                    })}
            </td>
        </tr>
    }
}
