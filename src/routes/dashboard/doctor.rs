use super::DashCard;
use crate::components::layout::AppShell;
use crate::features::auth::{RequireRole, policy};
use crate::routes::paths;
use leptos::prelude::*;

#[component]
pub fn DoctorDashboardPage() -> impl IntoView {
    view! {
        <AppShell>
            <RequireRole allowed=policy::DOCTOR_ONLY>
                <div class="space-y-6">
                    <div class="space-y-1">
                        <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">
                            "Doctor Dashboard"
                        </h1>
                        <p class="text-sm text-gray-500 dark:text-gray-400">
                            "Consented patient records, clinical notes, and messaging."
                        </p>
                    </div>
                    <div class="grid grid-cols-1 gap-4 sm:grid-cols-2 lg:grid-cols-3">
                        <DashCard
                            href=paths::NOTES
                            title="Notes"
                            blurb="Personal working notes."
                        />
                        <DashCard
                            href=paths::SYMPTOMS
                            title="Symptom Checker"
                            blurb="Enter symptoms for a consented patient."
                        />
                        <DashCard
                            href=paths::REMINDERS
                            title="Reminders"
                            blurb="Follow-ups and scheduled checks."
                        />
                        <DashCard
                            href=paths::PATIENT_RECORDS
                            title="Patient Records"
                            blurb="Records of patients who granted consent."
                        />
                        <DashCard
                            href=paths::DOCTOR_NOTES
                            title="Doctor Notes"
                            blurb="Clinical notes on a patient's chart."
                        />
                        <DashCard
                            href=paths::MESSAGES
                            title="Messages"
                            blurb="Secure messaging with patients."
                        />
                    </div>
                </div>
            </RequireRole>
        </AppShell>
    }
}
