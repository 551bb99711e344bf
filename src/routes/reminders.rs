//! Reminders route: list scheduled reminders and add new ones.

use crate::{
    app_lib::AppError,
    components::{Alert, AlertKind, Button, Spinner, layout::AppShell},
    features::{
        auth::{RequireRole, state::use_session},
        reminders::{client, types::CreateReminderRequest},
    },
};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use serde_json::json;

#[derive(Clone)]
struct ReminderInput {
    remind_at: String,
    kind: String,
}

#[component]
pub fn RemindersPage() -> impl IntoView {
    view! {
        <AppShell>
            <RequireRole>
                <RemindersContent />
            </RequireRole>
        </AppShell>
    }
}

#[component]
fn RemindersContent() -> impl IntoView {
    let session = use_session();
    let reminders = LocalResource::new(move || {
        let token = session.token().unwrap_or_default();
        async move { client::list_reminders(&token).await }
    });
    let (remind_at, set_remind_at) = signal(String::new());
    let (kind, set_kind) = signal("APPOINTMENT".to_string());
    let (error, set_error) = signal::<Option<AppError>>(None);

    let create_action = Action::new_local(move |input: &ReminderInput| {
        let input = input.clone();
        let token = session.token().unwrap_or_default();
        async move {
            let request = CreateReminderRequest {
                remind_at: input.remind_at,
                kind: input.kind,
                payload_json: json!({}),
                patient_id: None,
            };
            client::create_reminder(&request, &token).await
        }
    });

    Effect::new(move |_| {
        if let Some(result) = create_action.value().get() {
            match result {
                Ok(_) => {
                    set_remind_at.set(String::new());
                    reminders.refetch();
                }
                Err(err) => set_error.set(Some(err)),
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);

        let remind_at_value = remind_at.get_untracked().trim().to_string();
        let kind_value = kind.get_untracked().trim().to_uppercase();
        if remind_at_value.is_empty() || kind_value.is_empty() {
            set_error.set(Some(AppError::Config(
                "Reminder time and type are required.".to_string(),
            )));
            return;
        }

        create_action.dispatch(ReminderInput {
            remind_at: remind_at_value,
            kind: kind_value,
        });
    };

    view! {
        <div class="space-y-6 max-w-3xl mx-auto">
            <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">"Reminders"</h1>

            <form class="grid gap-3 max-w-md" on:submit=on_submit>
                <input
                    class="bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-emerald-500 focus:border-emerald-500 block w-full p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:placeholder-gray-400 dark:text-white"
                    placeholder="2026-12-17T20:00:00Z"
                    value=move || remind_at.get()
                    on:input=move |event| set_remind_at.set(event_target_value(&event))
                />
                <input
                    class="bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-emerald-500 focus:border-emerald-500 block w-full p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:placeholder-gray-400 dark:text-white"
                    placeholder="Type (APPOINTMENT, MEDICATION, ...)"
                    value=move || kind.get()
                    on:input=move |event| set_kind.set(event_target_value(&event))
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
                {move || match reminders.get() {
                    Some(Ok(response)) if response.items.is_empty() => {
                        view! {
                            <div class="text-center py-12 bg-white dark:bg-gray-800 rounded-lg border border-dashed border-gray-300 dark:border-gray-700">
                                <h3 class="text-sm font-medium text-gray-900 dark:text-white">
                                    "No reminders scheduled"
                                </h3>
                                <p class="mt-1 text-sm text-gray-500 dark:text-gray-400">
                                    "Add your first reminder above."
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
                                    key=|reminder| reminder.id.clone()
                                    children=|reminder| {
                                        view! {
                                            <li class="p-4 bg-white dark:bg-gray-800 rounded-lg border border-gray-200 dark:border-gray-700">
                                                <p class="text-gray-900 dark:text-white">
                                                    <strong>{reminder.kind}</strong>
                                                    " at "
                                                    {reminder.remind_at}
                                                </p>
                                                {reminder
                                                    .status
                                                    .map(|status| {
                                                        view! {
                                                            <p class="mt-1 text-xs text-gray-500 dark:text-gray-400">
                                                                "Status: " {status}
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
