use super::DashCard;
use crate::components::layout::AppShell;
use crate::features::auth::{RequireRole, policy};
use crate::routes::paths;
use leptos::prelude::*;

#[component]
pub fn PatientDashboardPage() -> impl IntoView {
    view! {
        <AppShell>
            <RequireRole allowed=policy::PATIENT_ONLY>
                <div class="space-y-6">
                    <div class="space-y-1">
                        <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">
                            "Patient Dashboard"
                        </h1>
                        <p class="text-sm text-gray-500 dark:text-gray-400">
                            "Your notes, reminders, records, and sharing controls."
                        </p>
                    </div>
                    <div class="grid grid-cols-1 gap-4 sm:grid-cols-2 lg:grid-cols-3">
                        <DashCard
                            href=paths::NOTES
                            title="Notes"
                            blurb="Personal health notes."
                        />
                        <DashCard
                            href=paths::REMINDERS
                            title="Reminders"
                            blurb="Medication and appointment reminders."
                        />
                        <DashCard
                            href=paths::SYMPTOMS
                            title="Symptom Checker"
                            blurb="Assistive, non-diagnostic guidance."
                        />
                        <DashCard
                            href=paths::PATIENT_RECORDS
                            title="My Records"
                            blurb="History, medications, and test results."
                        />
                        <DashCard
                            href=paths::CONSENT
                            title="Sharing / Consent"
                            blurb="Control who may see your records."
                        />
                        <DashCard
                            href=paths::MESSAGES
                            title="Messages"
                            blurb="Secure messaging with your doctor."
                        />
                    </div>
                </div>
            </RequireRole>
        </AppShell>
    }
}
