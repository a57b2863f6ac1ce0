//! Two-step sign-in screen. The page only renders [`LoginFlow`] and forwards
//! input to it; the flow decides which request goes out and what happens with
//! the answer. Submits while a step is in flight are dropped by the flow.

use crate::{
    components::{Alert, AlertKind, AppShell, Button, Spinner},
    features::auth::{
        client::HttpAuthService,
        flow::{AuthRequest, LoginFlow, LoginStep, Transition, perform},
        state::use_auth,
    },
    routes::paths,
};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::{components::A, hooks::use_navigate};

const INPUT_CLASS: &str = "bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-blue-500 focus:border-blue-500 block w-full p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:placeholder-gray-400 dark:text-white dark:focus:ring-blue-500 dark:focus:border-blue-500 disabled:opacity-60";
const LABEL_CLASS: &str = "block mb-2 text-sm font-medium text-gray-900 dark:text-white";

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let flow = RwSignal::new(LoginFlow::new());

    let step_action = Action::new_local(move |request: &AuthRequest| {
        let request = request.clone();
        let navigate = navigate.clone();
        async move {
            let outcome = perform(&HttpAuthService, &request).await;
            let transition = flow.try_update(|flow| flow.resolve(outcome, &auth));
            if transition == Some(Transition::Authenticated) {
                navigate(paths::DASHBOARD, Default::default());
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        if let Some(request) = flow.try_update(LoginFlow::submit).flatten() {
            step_action.dispatch(request);
        }
    };

    let step = Memo::new(move |_| flow.with(LoginFlow::step));
    let busy = Signal::derive(move || flow.with(LoginFlow::is_busy));
    let email = move || flow.with(|flow| flow.draft().email.clone());

    view! {
        <AppShell>
            <div class="max-w-sm mx-auto space-y-5">
                <h1 class="text-2xl font-semibold text-blue-700 dark:text-blue-400">"Login"</h1>
                <Show
                    when=move || !auth.is_authenticated.get() || step.get() == LoginStep::Authenticated
                    fallback=|| view! { <AlreadySignedIn /> }
                >
                    <form class="space-y-5" on:submit=on_submit>
                        {move || match step.get() {
                            LoginStep::AwaitingCredentials => view! {
                                <div>
                                    <label class=LABEL_CLASS for="email">"Email"</label>
                                    <input
                                        id="email"
                                        type="email"
                                        class=INPUT_CLASS
                                        autocomplete="email"
                                        required
                                        prop:value=email
                                        disabled=move || busy.get()
                                        on:input=move |ev| {
                                            flow.update(|flow| flow.set_email(event_target_value(&ev)));
                                        }
                                    />
                                </div>
                                <div>
                                    <label class=LABEL_CLASS for="password">"Password"</label>
                                    <input
                                        id="password"
                                        type="password"
                                        class=INPUT_CLASS
                                        autocomplete="current-password"
                                        required
                                        prop:value=move || flow.with(|flow| flow.draft().password.clone())
                                        disabled=move || busy.get()
                                        on:input=move |ev| {
                                            flow.update(|flow| flow.set_password(event_target_value(&ev)));
                                        }
                                    />
                                </div>
                                <Button button_type="submit" busy=busy>
                                    {move || if busy.get() { "Requesting..." } else { "Request MFA" }}
                                </Button>
                            }
                            .into_any(),
                            LoginStep::AwaitingMfaCode => view! {
                                <div>
                                    <label class=LABEL_CLASS for="email">"Email"</label>
                                    <input id="email" type="email" class=INPUT_CLASS prop:value=email disabled />
                                </div>
                                <div>
                                    <label class=LABEL_CLASS for="mfa-code">"MFA Code"</label>
                                    <input
                                        id="mfa-code"
                                        type="text"
                                        inputmode="numeric"
                                        class=INPUT_CLASS
                                        autocomplete="one-time-code"
                                        required
                                        prop:value=move || flow.with(|flow| flow.draft().mfa_code.clone())
                                        disabled=move || busy.get()
                                        on:input=move |ev| {
                                            flow.update(|flow| flow.set_mfa_code(event_target_value(&ev)));
                                        }
                                    />
                                </div>
                                <Button button_type="submit" busy=busy>
                                    {move || if busy.get() { "Signing in..." } else { "Login" }}
                                </Button>
                                <button
                                    type="button"
                                    class="w-full text-sm font-medium text-gray-600 underline decoration-gray-300 underline-offset-4 hover:text-gray-900 disabled:opacity-60"
                                    disabled=move || busy.get()
                                    on:click=move |_| {
                                        flow.update(|flow| {
                                            flow.back();
                                        });
                                    }
                                >
                                    "Use a different account"
                                </button>
                            }
                            .into_any(),
                            LoginStep::Authenticated => view! { <Spinner /> }.into_any(),
                        }}
                    </form>
                </Show>
                {move || {
                    flow.with(LoginFlow::notice)
                        .map(|message| view! { <Alert kind=AlertKind::Success message=message /> })
                }}
                {move || {
                    flow.with(|flow| flow.error().map(ToString::to_string))
                        .map(|message| view! { <Alert kind=AlertKind::Error message=message /> })
                }}
            </div>
        </AppShell>
    }
}

/// Shown on `/login` when a token is already stored.
#[component]
fn AlreadySignedIn() -> impl IntoView {
    view! {
        <div class="text-center space-y-4 py-6">
            <p class="text-gray-500 dark:text-gray-400">"You are already signed in."</p>
            <A
                href=paths::ADMIN
                {..}
                class="w-full inline-flex justify-center items-center px-5 py-2.5 text-sm font-medium text-white bg-blue-700 rounded-lg hover:bg-blue-800 transition-all shadow-sm"
            >
                "Go to Admin Panel"
            </A>
        </div>
    }
}
