use super::DashCard;
use crate::components::layout::AppShell;
use crate::features::auth::{RequireRole, policy};
use crate::routes::paths;
use leptos::prelude::*;

#[component]
pub fn InstitutionDashboardPage() -> impl IntoView {
    view! {
        <AppShell>
            <RequireRole allowed=policy::INSTITUTION_ONLY>
                <div class="space-y-6">
                    <div class="space-y-1">
                        <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">
                            "Institution Dashboard"
                        </h1>
                        <p class="text-sm text-gray-500 dark:text-gray-400">
                            "Organization notes and reminders."
                        </p>
                    </div>
                    <div class="grid grid-cols-1 gap-4 sm:grid-cols-2 lg:grid-cols-3">
                        <DashCard
                            href=paths::NOTES
                            title="Notes"
                            blurb="Organization notes."
                        />
                        <DashCard
                            href=paths::REMINDERS
                            title="Reminders"
                            blurb="Scheduled reminders."
                        />
                    </div>
                </div>
            </RequireRole>
        </AppShell>
    }
}
