//! Symptom checker route. Submits a symptom entry for rule-based analysis
//! and renders the urgency, insights, and recommended tests that come back.
//! The guidance is assistive only; the safety statement from the API is
//! always shown with the result.

use crate::{
    app_lib::AppError,
    components::{Alert, AlertKind, Button, Spinner, layout::AppShell},
    features::{
        auth::{RequireRole, policy, state::use_session, types::Role},
        symptoms::{
            client,
            types::{AnalyzeSymptomsRequest, SymptomAnalysis, SymptomEntry},
        },
    },
};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

#[component]
pub fn SymptomsPage() -> impl IntoView {
    view! {
        <AppShell>
            <RequireRole allowed=policy::PATIENT_OR_DOCTOR>
                <SymptomsContent />
            </RequireRole>
        </AppShell>
    }
}

#[component]
fn SymptomsContent() -> impl IntoView {
    let session = use_session();
    let is_doctor = Signal::derive(move || {
        session.session.get().map(|current| current.role) == Some(Role::Doctor)
    });
    let (symptom, set_symptom) = signal(String::new());
    let (severity, set_severity) = signal("5".to_string());
    let (days, set_days) = signal("1".to_string());
    let (patient_id, set_patient_id) = signal(String::new());
    let (error, set_error) = signal::<Option<AppError>>(None);

    let analyze_action = Action::new_local(move |request: &AnalyzeSymptomsRequest| {
        let request = request.clone();
        let token = session.token().unwrap_or_default();
        async move { client::analyze_symptoms(&request, &token).await }
    });

    Effect::new(move |_| {
        if let Some(Err(err)) = analyze_action.value().get() {
            set_error.set(Some(err));
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);

        let symptom_value = symptom.get_untracked().trim().to_string();
        if symptom_value.is_empty() {
            set_error.set(Some(AppError::Config("Describe a symptom first.".to_string())));
            return;
        }
        let Ok(severity_value) = severity.get_untracked().trim().parse::<u8>() else {
            set_error.set(Some(AppError::Config(
                "Severity must be a number from 1 to 10.".to_string(),
            )));
            return;
        };
        if !(1..=10).contains(&severity_value) {
            set_error.set(Some(AppError::Config(
                "Severity must be a number from 1 to 10.".to_string(),
            )));
            return;
        }
        let Ok(days_value) = days.get_untracked().trim().parse::<u32>() else {
            set_error.set(Some(AppError::Config(
                "Duration must be a whole number of days.".to_string(),
            )));
            return;
        };

        // The API rejects doctor entries without a patient id.
        let patient_id_value = patient_id.get_untracked().trim().to_string();
        if is_doctor.get_untracked() && patient_id_value.is_empty() {
            set_error.set(Some(AppError::Config(
                "Patient id is required when entering symptoms for a patient.".to_string(),
            )));
            return;
        }

        analyze_action.dispatch(AnalyzeSymptomsRequest {
            patient_id: (!patient_id_value.is_empty()).then_some(patient_id_value),
            symptoms: vec![SymptomEntry {
                symptom: symptom_value,
                severity: severity_value,
                duration_days: days_value,
                progression: None,
            }],
            additional_notes: None,
        });
    };

    view! {
        <div class="space-y-6 max-w-3xl mx-auto">
            <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">
                "Symptom Checker"
            </h1>

            <form class="grid gap-3 max-w-md" on:submit=on_submit>
                <Show when=move || is_doctor.get()>
                    <input
                        class="bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-emerald-500 focus:border-emerald-500 block w-full p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:placeholder-gray-400 dark:text-white"
                        placeholder="Patient ID"
                        value=move || patient_id.get()
                        on:input=move |event| set_patient_id.set(event_target_value(&event))
                    />
                </Show>
                <input
                    class="bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-emerald-500 focus:border-emerald-500 block w-full p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:placeholder-gray-400 dark:text-white"
                    placeholder="Symptom"
                    value=move || symptom.get()
                    on:input=move |event| set_symptom.set(event_target_value(&event))
                />
                <div class="grid grid-cols-2 gap-3">
                    <label class="block">
                        <span class="text-sm text-gray-500 dark:text-gray-400">
                            "Severity (1-10)"
                        </span>
                        <input
                            type="number"
                            min="1"
                            max="10"
                            class="mt-1 bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-emerald-500 focus:border-emerald-500 block w-full p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:text-white"
                            value=move || severity.get()
                            on:input=move |event| set_severity.set(event_target_value(&event))
                        />
                    </label>
                    <label class="block">
                        <span class="text-sm text-gray-500 dark:text-gray-400">
                            "Duration (days)"
                        </span>
                        <input
                            type="number"
                            min="0"
                            class="mt-1 bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-emerald-500 focus:border-emerald-500 block w-full p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:text-white"
                            value=move || days.get()
                            on:input=move |event| set_days.set(event_target_value(&event))
                        />
                    </label>
                </div>
                <Button button_type="submit" disabled=analyze_action.pending()>
                    "Analyze"
                </Button>
            </form>

            {move || {
                error
                    .get()
                    .map(|err| {
                        view! { <Alert kind=AlertKind::Error message=err.message().to_string() /> }
                    })
            }}

            {move || {
                if analyze_action.pending().get() {
                    return view! { <Spinner /> }.into_any();
                }
                match analyze_action.value().get() {
                    Some(Ok(analysis)) => view! { <AnalysisResult analysis /> }.into_any(),
                    _ => ().into_any(),
                }
            }}
        </div>
    }
}

#[component]
fn AnalysisResult(analysis: SymptomAnalysis) -> impl IntoView {
    let insights = serde_json::to_string_pretty(&analysis.insights)
        .unwrap_or_else(|_| "[]".to_string());
    let tests = serde_json::to_string_pretty(&analysis.recommended_tests)
        .unwrap_or_else(|_| "[]".to_string());

    view! {
        <section class="space-y-4 p-4 bg-white dark:bg-gray-800 rounded-lg border border-gray-200 dark:border-gray-700">
            <h2 class="text-lg font-semibold text-gray-900 dark:text-white">
                "Urgency: " {analysis.urgency}
            </h2>

            <div>
                <h3 class="text-sm font-medium text-gray-900 dark:text-white">
                    "Possible Condition Insights"
                </h3>
                <pre class="mt-1 p-3 text-xs bg-gray-50 dark:bg-gray-900 text-gray-700 dark:text-gray-300 rounded-lg overflow-x-auto">
                    {insights}
                </pre>
            </div>

            <div>
                <h3 class="text-sm font-medium text-gray-900 dark:text-white">
                    "Recommended Tests"
                </h3>
                <pre class="mt-1 p-3 text-xs bg-gray-50 dark:bg-gray-900 text-gray-700 dark:text-gray-300 rounded-lg overflow-x-auto">
                    {tests}
                </pre>
            </div>

            <p class="text-sm italic text-gray-500 dark:text-gray-400">
                {analysis.safety_statement}
            </p>
        </section>
    }
}
