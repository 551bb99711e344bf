//! Secure messaging route. Patients and doctors exchange non-diagnostic
//! messages scoped to a patient; the thread loads on demand by patient id.

use crate::{
    app_lib::AppError,
    components::{Alert, AlertKind, Button, Spinner, layout::AppShell},
    features::{
        auth::{RequireRole, policy, state::use_session},
        messages::{client, types::SendMessageRequest},
    },
};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

#[derive(Clone)]
struct MessageInput {
    patient_id: String,
    receiver_user_id: String,
    message_text: String,
}

#[component]
pub fn MessagesPage() -> impl IntoView {
    view! {
        <AppShell>
            <RequireRole allowed=policy::PATIENT_OR_DOCTOR>
                <MessagesContent />
            </RequireRole>
        </AppShell>
    }
}

#[component]
fn MessagesContent() -> impl IntoView {
    let session = use_session();
    let (patient_id, set_patient_id) = signal(String::new());
    let (receiver_id, set_receiver_id) = signal(String::new());
    let (text, set_text) = signal(String::new());
    let (error, set_error) = signal::<Option<AppError>>(None);

    let load_action = Action::new_local(move |patient_id: &String| {
        let patient_id = patient_id.clone();
        let token = session.token().unwrap_or_default();
        async move { client::conversation(&patient_id, &token).await }
    });

    let send_action = Action::new_local(move |input: &MessageInput| {
        let input = input.clone();
        let token = session.token().unwrap_or_default();
        async move {
            let request = SendMessageRequest {
                patient_id: input.patient_id,
                receiver_user_id: input.receiver_user_id,
                message_text: input.message_text,
            };
            client::send_message(&request, &token).await
        }
    });

    Effect::new(move |_| {
        if let Some(result) = send_action.value().get() {
            match result {
                Ok(_) => {
                    set_text.set(String::new());
                    let patient_id_value = patient_id.get_untracked().trim().to_string();
                    if !patient_id_value.is_empty() {
                        load_action.dispatch(patient_id_value);
                    }
                }
                Err(err) => set_error.set(Some(err)),
            }
        }
    });

    let on_send = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);

        let input = MessageInput {
            patient_id: patient_id.get_untracked().trim().to_string(),
            receiver_user_id: receiver_id.get_untracked().trim().to_string(),
            message_text: text.get_untracked().trim().to_string(),
        };
        if input.patient_id.is_empty()
            || input.receiver_user_id.is_empty()
            || input.message_text.is_empty()
        {
            set_error.set(Some(AppError::Config(
                "Patient id, receiver id, and a message are required.".to_string(),
            )));
            return;
        }

        send_action.dispatch(input);
    };

    let on_load = move |_| {
        set_error.set(None);

        let patient_id_value = patient_id.get_untracked().trim().to_string();
        if patient_id_value.is_empty() {
            set_error.set(Some(AppError::Config(
                "Enter a patient id to load its conversation.".to_string(),
            )));
            return;
        }

        load_action.dispatch(patient_id_value);
    };

    view! {
        <div class="space-y-6 max-w-3xl mx-auto">
            <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">
                "Secure Messaging"
            </h1>

            <form class="grid gap-3 max-w-xl" on:submit=on_send>
                <input
                    class="bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-emerald-500 focus:border-emerald-500 block w-full p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:placeholder-gray-400 dark:text-white"
                    placeholder="Patient ID"
                    value=move || patient_id.get()
                    on:input=move |event| set_patient_id.set(event_target_value(&event))
                />
                <input
                    class="bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-emerald-500 focus:border-emerald-500 block w-full p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:placeholder-gray-400 dark:text-white"
                    placeholder="Receiver User ID"
                    value=move || receiver_id.get()
                    on:input=move |event| set_receiver_id.set(event_target_value(&event))
                />
                <textarea
                    class="bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-emerald-500 focus:border-emerald-500 block w-full p-2.5 h-24 dark:bg-gray-700 dark:border-gray-600 dark:placeholder-gray-400 dark:text-white"
                    placeholder="Write a message (non-diagnostic)"
                    prop:value=move || text.get()
                    on:input=move |event| set_text.set(event_target_value(&event))
                ></textarea>
                <div class="flex gap-3">
                    <Button button_type="submit" disabled=send_action.pending()>
                        "Send"
                    </Button>
                    <button
                        type="button"
                        class="text-gray-900 bg-white border border-gray-300 hover:bg-gray-100 focus:ring-4 focus:outline-none focus:ring-gray-200 font-medium rounded-lg text-sm px-5 py-2.5 dark:bg-gray-800 dark:text-white dark:border-gray-600 dark:hover:bg-gray-700"
                        on:click=on_load
                    >
                        "Load Conversation"
                    </button>
                </div>
            </form>

            {move || {
                error
                    .get()
                    .map(|err| {
                        view! { <Alert kind=AlertKind::Error message=err.message().to_string() /> }
                    })
            }}

            {move || match load_action.value().get() {
                Some(Ok(response)) if response.messages.is_empty() => {
                    view! {
                        <p class="text-sm text-gray-500 dark:text-gray-400">
                            "No messages in this conversation yet."
                        </p>
                    }
                        .into_any()
                }
                Some(Ok(response)) => {
                    view! {
                        <ul class="divide-y divide-gray-200 dark:divide-gray-700 bg-white dark:bg-gray-800 rounded-lg border border-gray-200 dark:border-gray-700">
                            <For
                                each=move || response.messages.clone()
                                key=|message| message.id.clone()
                                children=|message| {
                                    view! {
                                        <li class="p-4">
                                            <p class="text-gray-900 dark:text-white">
                                                <strong>{message.sender_role.as_str()}</strong>
                                                ": "
                                                {message.message_text}
                                            </p>
                                            {message
                                                .created_at
                                                .map(|created_at| {
                                                    view! {
                                                        <p class="mt-1 text-xs text-gray-500 dark:text-gray-400">
                                                            {created_at}
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
                    view! { <Alert kind=AlertKind::Error message=err.message().to_string() /> }
                        .into_any()
                }
                None => {
                    if load_action.pending().get() {
                        view! { <Spinner /> }.into_any()
                    } else {
                        view! {
                            <p class="text-sm text-gray-500 dark:text-gray-400">
                                "Enter a patient id and load its conversation."
                            </p>
                        }
                            .into_any()
                    }
                }
            }}
        </div>
    }
}
