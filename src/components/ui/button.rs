use super::Spinner;
use leptos::prelude::*;

/// Full-width primary button. While `busy` is set the button is disabled and a
/// small spinner sits before its label.
#[component]
pub fn Button(
    #[prop(optional)] button_type: Option<&'static str>,
    #[prop(optional, into, default = Signal::from(false))] busy: Signal<bool>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type=button_type.unwrap_or("button")
            class="inline-flex items-center justify-center gap-2 text-white bg-blue-700 hover:bg-blue-800 focus:ring-4 focus:outline-none focus:ring-blue-300 font-medium rounded-lg text-sm w-full px-5 py-2.5 dark:bg-blue-600 dark:hover:bg-blue-700 dark:focus:ring-blue-800"
            class=(["cursor-not-allowed", "opacity-70"], move || busy.get())
            disabled=move || busy.get()
            aria-busy=move || busy.get().to_string()
        >
            <Show when=move || busy.get()>
                <Spinner small=true />
            </Show>
            {children()}
        </button>
    }
}
