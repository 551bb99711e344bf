//! Doctor notes route. A doctor records a non-diagnostic clinical note
//! against a patient id; the API enforces consent before accepting it.

use crate::{
    app_lib::AppError,
    components::{Alert, AlertKind, Button, layout::AppShell},
    features::{
        auth::{RequireRole, policy, state::use_session},
        records::{client, types::CreateDoctorNoteRequest},
    },
};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

#[derive(Clone)]
struct NoteInput {
    patient_id: String,
    note_text: String,
}

#[component]
pub fn DoctorNotesPage() -> impl IntoView {
    view! {
        <AppShell>
            <RequireRole allowed=policy::DOCTOR_ONLY>
                <DoctorNotesContent />
            </RequireRole>
        </AppShell>
    }
}

#[component]
fn DoctorNotesContent() -> impl IntoView {
    let session = use_session();
    let (patient_id, set_patient_id) = signal(String::new());
    let (note, set_note) = signal(String::new());
    let (error, set_error) = signal::<Option<AppError>>(None);
    let (saved, set_saved) = signal(false);

    let save_action = Action::new_local(move |input: &NoteInput| {
        let request = CreateDoctorNoteRequest {
            patient_id: input.patient_id.clone(),
            note_text: input.note_text.clone(),
        };
        let token = session.token().unwrap_or_default();
        async move { client::create_doctor_note(&request, &token).await }
    });

    Effect::new(move |_| {
        if let Some(result) = save_action.value().get() {
            match result {
                Ok(_) => {
                    set_note.set(String::new());
                    set_saved.set(true);
                }
                Err(err) => set_error.set(Some(err)),
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);
        set_saved.set(false);

        let input = NoteInput {
            patient_id: patient_id.get_untracked().trim().to_string(),
            note_text: note.get_untracked().trim().to_string(),
        };
        if input.patient_id.is_empty() || input.note_text.is_empty() {
            set_error.set(Some(AppError::Config(
                "Patient id and note text are required.".to_string(),
            )));
            return;
        }

        save_action.dispatch(input);
    };

    view! {
        <div class="space-y-6 max-w-3xl mx-auto">
            <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">"Doctor Notes"</h1>
            <p class="text-sm text-gray-500 dark:text-gray-400">
                "Notes are stored against the patient's record and require an active consent."
            </p>

            <form class="grid gap-3 max-w-xl" on:submit=on_submit>
                <input
                    class="bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-emerald-500 focus:border-emerald-500 block w-full p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:placeholder-gray-400 dark:text-white"
                    placeholder="Patient ID"
                    value=move || patient_id.get()
                    on:input=move |event| set_patient_id.set(event_target_value(&event))
                />
                <textarea
                    class="bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-emerald-500 focus:border-emerald-500 block w-full p-2.5 h-32 dark:bg-gray-700 dark:border-gray-600 dark:placeholder-gray-400 dark:text-white"
                    placeholder="Clinical note (non-diagnostic)"
                    prop:value=move || note.get()
                    on:input=move |event| set_note.set(event_target_value(&event))
                ></textarea>
                <Button button_type="submit" disabled=save_action.pending()>
                    "Save Note"
                </Button>
            </form>

            {move || {
                error
                    .get()
                    .map(|err| {
                        view! { <Alert kind=AlertKind::Error message=err.message().to_string() /> }
                    })
            }}

            <Show when=move || saved.get()>
                <Alert kind=AlertKind::Success message="Note saved.".to_string() />
            </Show>
        </div>
    }
}
