//! Role dashboards and the post-login dispatcher.

mod doctor;
mod institution;
mod patient;

pub use doctor::DoctorDashboardPage;
pub use institution::InstitutionDashboardPage;
pub use patient::PatientDashboardPage;

use crate::components::{Spinner, layout::AppShell};
use crate::features::auth::{RequireRole, state::use_session};
use crate::routes::paths;
use leptos::prelude::*;
use leptos_router::{NavigateOptions, components::A, hooks::use_navigate};

/// Sends a signed-in user to their role's dashboard. Visitors without a
/// session never reach the redirect; the guard bounces them first.
#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <AppShell>
            <RequireRole>
                <DashboardRedirect />
            </RequireRole>
        </AppShell>
    }
}

#[component]
fn DashboardRedirect() -> impl IntoView {
    let session = use_session();

    Effect::new(move |_| {
        if let Some(current) = session.session.get() {
            let navigate = use_navigate();
            navigate(
                paths::dashboard_for(current.role),
                NavigateOptions {
                    replace: true,
                    ..Default::default()
                },
            );
        }
    });

    view! {
        <div class="flex justify-center py-12">
            <Spinner />
        </div>
    }
}

/// Link card used by the role dashboards.
#[component]
fn DashCard(href: &'static str, title: &'static str, blurb: &'static str) -> impl IntoView {
    view! {
        <A
            href={href}
            {..}
            class="block p-6 bg-white dark:bg-gray-800 rounded-lg border border-gray-200 dark:border-gray-700 hover:border-emerald-500 dark:hover:border-emerald-500 transition-colors shadow-sm"
        >
            <h2 class="text-lg font-medium text-gray-900 dark:text-white">{title}</h2>
            <p class="mt-1 text-sm text-gray-500 dark:text-gray-400">{blurb}</p>
        </A>
    }
}
