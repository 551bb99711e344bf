//! Session state and context for the frontend. The provider hydrates the
//! session once from browser storage and exposes derived signals for guards
//! and routes. Writes go through the context so storage and the reactive
//! mirror never disagree.

use crate::features::auth::{
    session::{BrowserStorage, Session, SessionStore},
    types::Role,
};
use leptos::prelude::*;

#[derive(Clone, Copy)]
/// Session context shared through Leptos.
pub struct SessionContext {
    store: SessionStore<BrowserStorage>,
    pub session: RwSignal<Option<Session>>,
    pub is_authenticated: Signal<bool>,
}

impl SessionContext {
    /// Builds a context around the provided store and session signal.
    fn new(store: SessionStore<BrowserStorage>, session: RwSignal<Option<Session>>) -> Self {
        let is_authenticated = Signal::derive(move || session.get().is_some());
        Self {
            store,
            session,
            is_authenticated,
        }
    }

    /// Persists and mirrors the session issued at login.
    pub fn set_session(&self, token: &str, role: Role) {
        self.store.set_session(token, role);
        self.session.set(Some(Session {
            token: token.to_string(),
            role,
        }));
    }

    /// Clears storage and the in-memory session, typically on logout.
    pub fn clear_session(&self) {
        self.store.clear_session();
        self.session.set(None);
    }

    /// Untracked token read for building requests inside actions.
    pub fn token(&self) -> Option<String> {
        self.session
            .get_untracked()
            .map(|session| session.token)
    }

    /// Untracked role read for one-shot navigation decisions.
    pub fn role(&self) -> Option<Role> {
        self.session.get_untracked().map(|session| session.role)
    }

    /// Remembers the landing-page role choice for the login form.
    pub fn set_selected_role(&self, role: Role) {
        self.store.set_selected_role(role);
    }

    pub fn selected_role(&self) -> Option<Role> {
        self.store.selected_role()
    }
}

/// Provides session context, hydrated once from browser storage so a reload
/// keeps the user signed in.
#[component]
pub fn SessionProvider(children: Children) -> impl IntoView {
    let store = SessionStore::browser();
    let session = RwSignal::new(store.session());
    let context = SessionContext::new(store, session);
    provide_context(context);

    view! { {children()} }
}

/// Returns the current session context or a fallback detached context.
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().unwrap_or_else(|| {
        let store = SessionStore::browser();
        let session = RwSignal::new(store.session());
        SessionContext::new(store, session)
    })
}
