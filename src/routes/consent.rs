//! Sharing and consent route. Patients grant doctors or institutions access
//! to their records and can revoke a grant later.

use crate::{
    app_lib::AppError,
    components::{Alert, AlertKind, Button, Spinner, layout::AppShell},
    features::{
        auth::{RequireRole, policy, state::use_session},
        consents::{
            client,
            types::{GrantConsentRequest, GranteeType, RevokeConsentRequest},
        },
    },
};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use serde_json::json;

#[derive(Clone)]
struct GrantInput {
    grantee_type: GranteeType,
    grantee_id: String,
}

#[component]
pub fn ConsentPage() -> impl IntoView {
    view! {
        <AppShell>
            <RequireRole allowed=policy::PATIENT_ONLY>
                <ConsentContent />
            </RequireRole>
        </AppShell>
    }
}

#[component]
fn ConsentContent() -> impl IntoView {
    let session = use_session();
    let consents = LocalResource::new(move || {
        let token = session.token().unwrap_or_default();
        async move { client::list_consents(&token).await }
    });
    let (grantee_type, set_grantee_type) = signal(GranteeType::Doctor);
    let (grantee_id, set_grantee_id) = signal(String::new());
    let (error, set_error) = signal::<Option<AppError>>(None);

    let grant_action = Action::new_local(move |input: &GrantInput| {
        let input = input.clone();
        let token = session.token().unwrap_or_default();
        async move {
            let request = GrantConsentRequest {
                grantee_type: input.grantee_type,
                grantee_id: input.grantee_id,
                scope_json: json!({}),
            };
            client::grant_consent(&request, &token).await
        }
    });

    let revoke_action = Action::new_local(move |consent_id: &String| {
        let request = RevokeConsentRequest {
            consent_id: consent_id.clone(),
        };
        let token = session.token().unwrap_or_default();
        async move { client::revoke_consent(&request, &token).await }
    });

    Effect::new(move |_| {
        if let Some(result) = grant_action.value().get() {
            match result {
                Ok(_) => {
                    set_grantee_id.set(String::new());
                    consents.refetch();
                }
                Err(err) => set_error.set(Some(err)),
            }
        }
    });

    Effect::new(move |_| {
        if let Some(result) = revoke_action.value().get() {
            match result {
                Ok(_) => consents.refetch(),
                Err(err) => set_error.set(Some(err)),
            }
        }
    });

    let on_grant = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);

        let grantee_id_value = grantee_id.get_untracked().trim().to_string();
        if grantee_id_value.is_empty() {
            set_error.set(Some(AppError::Config("Grantee id is required.".to_string())));
            return;
        }

        grant_action.dispatch(GrantInput {
            grantee_type: grantee_type.get_untracked(),
            grantee_id: grantee_id_value,
        });
    };

    view! {
        <div class="space-y-6 max-w-3xl mx-auto">
            <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">
                "Sharing and Consent"
            </h1>
            <p class="text-sm text-gray-500 dark:text-gray-400">
                "Grant a doctor or institution access to your records. You can revoke at any time."
            </p>

            <form class="flex flex-col sm:flex-row gap-3 max-w-xl" on:submit=on_grant>
                <select
                    class="bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-emerald-500 focus:border-emerald-500 p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:text-white"
                    on:change=move |event| {
                        if let Some(parsed) = GranteeType::parse(&event_target_value(&event)) {
                            set_grantee_type.set(parsed);
                        }
                    }
                >
                    <option
                        value="DOCTOR"
                        selected=move || grantee_type.get() == GranteeType::Doctor
                    >
                        "Doctor"
                    </option>
                    <option
                        value="INSTITUTION"
                        selected=move || grantee_type.get() == GranteeType::Institution
                    >
                        "Institution"
                    </option>
                </select>
                <input
                    class="flex-1 bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-emerald-500 focus:border-emerald-500 block w-full p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:placeholder-gray-400 dark:text-white"
                    placeholder="Grantee ID (UUID)"
                    value=move || grantee_id.get()
                    on:input=move |event| set_grantee_id.set(event_target_value(&event))
                />
                <Button button_type="submit" disabled=grant_action.pending()>
                    "Grant"
                </Button>
            </form>

            {move || {
                error
                    .get()
                    .map(|err| {
                        view! { <Alert kind=AlertKind::Error message=err.message().to_string() /> }
                    })
            }}

            <h2 class="text-lg font-medium text-gray-900 dark:text-white">"Your consents"</h2>

            <Suspense fallback=move || view! { <Spinner /> }>
                {move || match consents.get() {
                    Some(Ok(response)) if response.items.is_empty() => {
                        view! {
                            <div class="text-center py-12 bg-white dark:bg-gray-800 rounded-lg border border-dashed border-gray-300 dark:border-gray-700">
                                <h3 class="text-sm font-medium text-gray-900 dark:text-white">
                                    "Nothing shared yet"
                                </h3>
                                <p class="mt-1 text-sm text-gray-500 dark:text-gray-400">
                                    "Grant access above to share your records."
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
                                    key=|consent| consent.id.clone()
                                    children=move |consent| {
                                        let consent_id = consent.id.clone();
                                        let revocable = consent.status == "GRANTED";
                                        view! {
                                            <li class="p-4 bg-white dark:bg-gray-800 rounded-lg border border-gray-200 dark:border-gray-700">
                                                <p class="text-gray-900 dark:text-white">
                                                    <strong>{consent.grantee_type.as_str()}</strong>
                                                    " "
                                                    {consent.grantee_id}
                                                </p>
                                                <p class="mt-1 text-xs text-gray-500 dark:text-gray-400">
                                                    "Status: " {consent.status}
                                                </p>
                                                {revocable
                                                    .then(move || {
                                                        view! {
                                                            <button
                                                                type="button"
                                                                class="mt-2 text-sm font-medium text-red-600 hover:underline dark:text-red-400"
                                                                on:click=move |_| {
                                                                    set_error.set(None);
                                                                    revoke_action.dispatch(consent_id.clone());
                                                                }
                                                            >
                                                                "Revoke"
                                                            </button>
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
