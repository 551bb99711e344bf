//! Patient records route. Loads the combined record bundle for a patient id
//! and renders each section as formatted JSON. Patients can additionally
//! replace their medical history; the API rejects that update for any other
//! role.

use crate::{
    app_lib::AppError,
    components::{Alert, AlertKind, Button, Spinner, layout::AppShell},
    features::{
        auth::{RequireRole, state::use_session, types::Role},
        records::{
            client,
            types::{PatientRecords, UpdateHistoryRequest},
        },
    },
};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

#[derive(Clone)]
struct HistoryInput {
    patient_id: String,
    items: Vec<serde_json::Value>,
}

#[component]
pub fn PatientRecordsPage() -> impl IntoView {
    view! {
        <AppShell>
            <RequireRole>
                <PatientRecordsContent />
            </RequireRole>
        </AppShell>
    }
}

#[component]
fn PatientRecordsContent() -> impl IntoView {
    let session = use_session();
    let is_patient = Signal::derive(move || {
        session.session.get().map(|current| current.role) == Some(Role::Patient)
    });
    let (patient_id, set_patient_id) = signal(String::new());
    let (history_draft, set_history_draft) = signal(String::new());
    let (error, set_error) = signal::<Option<AppError>>(None);
    let (saved, set_saved) = signal(false);

    let load_action = Action::new_local(move |patient_id: &String| {
        let patient_id = patient_id.clone();
        let token = session.token().unwrap_or_default();
        async move { client::patient_records(&patient_id, &token).await }
    });

    let save_action = Action::new_local(move |input: &HistoryInput| {
        let input = input.clone();
        let token = session.token().unwrap_or_default();
        async move {
            let request = UpdateHistoryRequest { items: input.items };
            client::update_medical_history(&input.patient_id, &request, &token).await
        }
    });

    Effect::new(move |_| {
        if let Some(result) = save_action.value().get() {
            match result {
                Ok(_) => {
                    set_saved.set(true);
                    let patient_id_value = patient_id.get_untracked().trim().to_string();
                    if !patient_id_value.is_empty() {
                        load_action.dispatch(patient_id_value);
                    }
                }
                Err(err) => set_error.set(Some(err)),
            }
        }
    });

    let on_load = move |_| {
        set_error.set(None);
        set_saved.set(false);

        let patient_id_value = patient_id.get_untracked().trim().to_string();
        if patient_id_value.is_empty() {
            set_error.set(Some(AppError::Config("Enter a patient id first.".to_string())));
            return;
        }

        load_action.dispatch(patient_id_value);
    };

    let on_save_history = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);
        set_saved.set(false);

        let patient_id_value = patient_id.get_untracked().trim().to_string();
        if patient_id_value.is_empty() {
            set_error.set(Some(AppError::Config("Enter a patient id first.".to_string())));
            return;
        }
        let draft = history_draft.get_untracked();
        let items = match serde_json::from_str::<Vec<serde_json::Value>>(draft.trim()) {
            Ok(items) => items,
            Err(_) => {
                set_error.set(Some(AppError::Config(
                    "History must be a JSON array of entries.".to_string(),
                )));
                return;
            }
        };

        save_action.dispatch(HistoryInput {
            patient_id: patient_id_value,
            items,
        });
    };

    view! {
        <div class="space-y-6 max-w-3xl mx-auto">
            <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">
                "Patient Records"
            </h1>

            <Show when=move || is_patient.get()>
                <p class="text-sm text-gray-500 dark:text-gray-400">
                    "You may view your records. Doctors require your consent."
                </p>
            </Show>

            <div class="flex flex-col sm:flex-row gap-3 max-w-xl">
                <input
                    class="flex-1 bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-emerald-500 focus:border-emerald-500 block w-full p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:placeholder-gray-400 dark:text-white"
                    placeholder="Patient ID"
                    value=move || patient_id.get()
                    on:input=move |event| set_patient_id.set(event_target_value(&event))
                />
                <Button disabled=load_action.pending() on:click=on_load>
                    "Load Records"
                </Button>
            </div>

            {move || {
                error
                    .get()
                    .map(|err| {
                        view! { <Alert kind=AlertKind::Error message=err.message().to_string() /> }
                    })
            }}

            <Show when=move || saved.get()>
                <Alert kind=AlertKind::Success message="Medical history updated.".to_string() />
            </Show>

            {move || {
                if load_action.pending().get() {
                    return view! { <Spinner /> }.into_any();
                }
                match load_action.value().get() {
                    Some(Ok(records)) => view! { <RecordsView records /> }.into_any(),
                    Some(Err(err)) => {
                        view! {
                            <Alert kind=AlertKind::Error message=err.message().to_string() />
                        }
                            .into_any()
                    }
                    None => ().into_any(),
                }
            }}

            <Show when=move || is_patient.get()>
                <form
                    class="grid gap-3 p-4 bg-white dark:bg-gray-800 rounded-lg border border-gray-200 dark:border-gray-700"
                    on:submit=on_save_history
                >
                    <h2 class="text-lg font-medium text-gray-900 dark:text-white">
                        "Update Medical History"
                    </h2>
                    <p class="text-sm text-gray-500 dark:text-gray-400">
                        "Paste the full history as a JSON array; it replaces the stored items."
                    </p>
                    <textarea
                        class="bg-gray-50 border border-gray-300 text-gray-900 text-sm font-mono rounded-lg focus:ring-emerald-500 focus:border-emerald-500 block w-full p-2.5 h-32 dark:bg-gray-700 dark:border-gray-600 dark:placeholder-gray-400 dark:text-white"
                        placeholder=r#"[{"condition": "Asthma", "since": "2019"}]"#
                        prop:value=move || history_draft.get()
                        on:input=move |event| set_history_draft.set(event_target_value(&event))
                    ></textarea>
                    <Button button_type="submit" disabled=save_action.pending()>
                        "Save History"
                    </Button>
                </form>
            </Show>
        </div>
    }
}

#[component]
fn RecordsView(records: PatientRecords) -> impl IntoView {
    let sections = [
        ("Medical History", &records.medical_history),
        ("Medications", &records.medications),
        ("Test Results", &records.test_results),
    ]
    .map(|(title, payload)| {
        let rendered =
            serde_json::to_string_pretty(payload).unwrap_or_else(|_| "null".to_string());
        view! {
            <div>
                <h3 class="text-sm font-medium text-gray-900 dark:text-white">{title}</h3>
                <pre class="mt-1 p-3 text-xs bg-gray-50 dark:bg-gray-900 text-gray-700 dark:text-gray-300 rounded-lg overflow-x-auto">
                    {rendered}
                </pre>
            </div>
        }
    });

    view! {
        <section class="space-y-4 p-4 bg-white dark:bg-gray-800 rounded-lg border border-gray-200 dark:border-gray-700">
            {sections.collect_view()}
        </section>
    }
}
