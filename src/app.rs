//! Application root. The session context wraps the router so guards and
//! pages anywhere in the tree can read authentication state.

use crate::{features::auth::state::SessionProvider, routes::AppRoutes};
use leptos::prelude::*;
use leptos_router::components::Router;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <SessionProvider>
            <Router>
                <AppRoutes />
            </Router>
        </SessionProvider>
    }
}
