//! Notes route: list the caller's notes and add new ones. The API scopes
//! reads and writes to the bearer token, so any signed-in role may use it.

use crate::{
    app_lib::AppError,
    components::{Alert, AlertKind, Button, Spinner, layout::AppShell},
    features::{
        auth::{RequireRole, state::use_session},
        notes::{client, types::CreateNoteRequest},
    },
};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

#[component]
pub fn NotesPage() -> impl IntoView {
    view! {
        <AppShell>
            <RequireRole>
                <NotesContent />
            </RequireRole>
        </AppShell>
    }
}

#[component]
fn NotesContent() -> impl IntoView {
    let session = use_session();
    let notes = LocalResource::new(move || {
        let token = session.token().unwrap_or_default();
        async move { client::list_notes(&token).await }
    });
    let (text, set_text) = signal(String::new());
    let (error, set_error) = signal::<Option<AppError>>(None);

    let create_action = Action::new_local(move |text: &String| {
        let text = text.clone();
        let token = session.token().unwrap_or_default();
        async move {
            let request = CreateNoteRequest {
                text,
                patient_id: None,
            };
            client::create_note(&request, &token).await
        }
    });

    Effect::new(move |_| {
        if let Some(result) = create_action.value().get() {
            match result {
                Ok(_) => {
                    set_text.set(String::new());
                    notes.refetch();
                }
                Err(err) => set_error.set(Some(err)),
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);

        let text_value = text.get_untracked().trim().to_string();
        if text_value.is_empty() {
            set_error.set(Some(AppError::Config("Note text is required.".to_string())));
            return;
        }

        create_action.dispatch(text_value);
    };

    view! {
        <div class="space-y-6 max-w-3xl mx-auto">
            <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">"Notes"</h1>

            <form class="flex gap-2" on:submit=on_submit>
                <input
                    class="flex-1 bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-emerald-500 focus:border-emerald-500 block p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:placeholder-gray-400 dark:text-white"
                    placeholder="Write a note..."
                    value=move || text.get()
                    on:input=move |event| set_text.set(event_target_value(&event))
                />
                <Button button_type="submit" disabled=create_action.pending()>
                    "Add"
                </Button>
            </form>

            {move || {
                error
                    .get()
                    .map(|err| {
                        view! { <Alert kind=AlertKind::Error message=err.message().to_string() /> }
                    })
            }}

            <Suspense fallback=move || view! { <Spinner /> }>
                {move || match notes.get() {
                    Some(Ok(response)) if response.items.is_empty() => {
                        view! {
                            <div class="text-center py-12 bg-white dark:bg-gray-800 rounded-lg border border-dashed border-gray-300 dark:border-gray-700">
                                <h3 class="text-sm font-medium text-gray-900 dark:text-white">
                                    "No notes yet"
                                </h3>
                                <p class="mt-1 text-sm text-gray-500 dark:text-gray-400">
                                    "Write your first note above."
                                </p>
                            </div>
                        }
                            .into_any()
                    }
                    Some(Ok(response)) => {
                        view! {
                            <ul class="space-y-3">
                                <For
                                    each=move || response.items.clone()
                                    key=|note| note.id.clone()
                                    children=|note| {
                                        view! {
                                            <li class="p-4 bg-white dark:bg-gray-800 rounded-lg border border-gray-200 dark:border-gray-700">
                                                <p class="text-gray-900 dark:text-white">
                                                    {note.text}
                                                </p>
                                                {note
                                                    .created_at
                                                    .map(|created| {
                                                        view! {
                                                            <p class="mt-1 text-xs text-gray-500 dark:text-gray-400">
                                                                {created}
                                                            </p>
                                                        }
                                                    })}
                                            </li>
                                        }
                                    }
                                />
                            </ul>
                        }
                            .into_any()
                    }
                    Some(Err(err)) => {
                        view! {
                            <Alert kind=AlertKind::Error message=err.message().to_string() />
                        }
                            .into_any()
                    }
                    None => view! { <Spinner /> }.into_any(),
                }}
            </Suspense>
        </div>
    }
}
