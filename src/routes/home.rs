//! Landing page: pick a role, then sign in. The choice is remembered so the
//! login form can default to it.

use crate::components::layout::AppShell;
use crate::features::auth::{state::use_session, types::Role};
use crate::routes::paths;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

fn role_card_copy(role: Role) -> (&'static str, &'static str) {
    match role {
        Role::Patient => (
            "Patient",
            "Track notes and reminders, manage sharing consent, and message your doctor.",
        ),
        Role::Doctor => (
            "Doctor",
            "Review consented patient records, write clinical notes, and message patients.",
        ),
        Role::Institution => (
            "Health Institution",
            "Coordinate organization notes and reminders.",
        ),
    }
}

/// Renders the role-selection entry page.
#[component]
pub fn HomePage() -> impl IntoView {
    let session = use_session();

    view! {
        <AppShell>
            <div class="max-w-3xl mx-auto text-center space-y-2">
                <h1 class="text-3xl font-semibold text-gray-900 dark:text-white">"Medicheck"</h1>
                <p class="text-gray-500 dark:text-gray-400">"Select your role to continue"</p>
            </div>
            <div class="max-w-3xl mx-auto mt-8 grid grid-cols-1 gap-4 sm:grid-cols-3">
                {Role::ALL
                    .into_iter()
                    .map(|role| {
                        let (title, blurb) = role_card_copy(role);
                        let navigate = use_navigate();
                        view! {
                            <button
                                type="button"
                                class="block p-6 text-left bg-white dark:bg-gray-800 rounded-lg border border-gray-200 dark:border-gray-700 hover:border-emerald-500 dark:hover:border-emerald-500 transition-colors shadow-sm"
                                on:click=move |_| {
                                    session.set_selected_role(role);
                                    navigate(paths::LOGIN, Default::default());
                                }
                            >
                                <h2 class="text-lg font-medium text-gray-900 dark:text-white">
                                    {title}
                                </h2>
                                <p class="mt-2 text-sm text-gray-500 dark:text-gray-400">{blurb}</p>
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        </AppShell>
    }
}
