//! Auth token context for the frontend. The provider hydrates the token once on
//! mount from `localStorage` and exposes a derived signal for guards and the app
//! shell. The token value itself is never rendered or logged.

use crate::features::auth::token::{LocalStorageTokenStore, TokenStore};
use leptos::prelude::*;

#[derive(Clone, Copy)]
/// Auth context shared through Leptos.
pub struct AuthContext {
    pub token: RwSignal<Option<String>>,
    pub is_authenticated: Signal<bool>,
}

impl AuthContext {
    fn new(token: RwSignal<Option<String>>) -> Self {
        let is_authenticated = Signal::derive(move || token.with(Option::is_some));
        Self {
            token,
            is_authenticated,
        }
    }

    /// Clears the stored token, typically on sign-out.
    pub fn sign_out(&self) {
        self.clear();
        tracing::info!("signed out");
    }
}

/// Writes through to `localStorage` and keeps the reactive copy in sync, so the
/// login flow can hand its token straight to the context.
impl TokenStore for AuthContext {
    fn load(&self) -> Option<String> {
        self.token.get_untracked()
    }

    fn store(&self, token: &str) {
        LocalStorageTokenStore.store(token);
        self.token.set(Some(token.to_string()));
    }

    fn clear(&self) {
        LocalStorageTokenStore.clear();
        self.token.set(None);
    }
}

/// Provides auth context hydrated from browser storage.
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let token = RwSignal::new(LocalStorageTokenStore.load());
    provide_context(AuthContext::new(token));

    view! { {children()} }
}

/// Returns the current auth context or a fallback context backed by storage.
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>()
        .unwrap_or_else(|| AuthContext::new(RwSignal::new(LocalStorageTokenStore.load())))
}
