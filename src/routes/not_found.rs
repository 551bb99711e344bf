//! Fallback page for unknown routes.

use crate::{components::layout::AppShell, routes::paths};
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <AppShell>
            <div class="max-w-md mx-auto py-16 text-center space-y-4">
                <p class="text-sm font-semibold uppercase tracking-wide text-emerald-600 dark:text-emerald-400">
                    "404"
                </p>
                <h1 class="text-3xl font-bold text-gray-900 dark:text-white">"Page not found"</h1>
                <p class="text-gray-500 dark:text-gray-400">
                    "The page you requested does not exist or has moved. Head back to the start and pick a role again."
                </p>
                <A
                    href={paths::HOME}
                    {..}
                    class="inline-flex items-center px-5 py-2.5 text-sm font-medium text-white bg-emerald-700 rounded-lg hover:bg-emerald-800 focus:ring-4 focus:outline-none focus:ring-emerald-300 dark:bg-emerald-600 dark:hover:bg-emerald-700 dark:focus:ring-emerald-800"
                >
                    "Go Home"
                </A>
            </div>
        </AppShell>
    }
}
