use crate::app_lib::AppError;
use crate::components::{Alert, AlertKind, Button, Spinner, layout::AppShell};
use crate::features::auth::state::use_session;
use crate::features::auth::types::{AuthResponse, LoginRequest, RegisterRequest, Role};
use crate::features::auth::client;
use crate::routes::paths;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Mode {
    SignIn,
    Register,
}

#[derive(Clone)]
struct CredentialsInput {
    mode: Mode,
    email: String,
    password: String,
    role: Role,
}

/// Sign-in and registration form. Both succeed with the same session pair,
/// which is persisted before navigating to the role's dashboard.
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();
    let (mode, set_mode) = signal(Mode::SignIn);
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let initial_role = session.selected_role().unwrap_or(Role::Patient);
    let (role, set_role) = signal(initial_role);
    let (error, set_error) = signal::<Option<AppError>>(None);

    let submit_action = Action::new_local(move |input: &CredentialsInput| {
        let input = input.clone();
        async move {
            match input.mode {
                Mode::SignIn => {
                    let request = LoginRequest {
                        email: input.email,
                        password: input.password,
                    };
                    client::login(&request).await
                }
                Mode::Register => {
                    let request = RegisterRequest {
                        email: input.email,
                        password: input.password,
                        role: input.role,
                    };
                    client::register(&request).await
                }
            }
        }
    });

    Effect::new(move |_| {
        if let Some(result) = submit_action.value().get() {
            match result {
                Ok(AuthResponse {
                    access_token, role, ..
                }) => {
                    session.set_session(&access_token, role);
                    navigate(paths::dashboard_for(role), Default::default());
                }
                Err(err) => set_error.set(Some(err)),
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);

        let email_value = email.get_untracked().trim().to_string();
        let password_value = password.get_untracked();
        if email_value.is_empty() || password_value.trim().is_empty() {
            set_error.set(Some(AppError::Config(
                "Email and password are required.".to_string(),
            )));
            return;
        }

        submit_action.dispatch(CredentialsInput {
            mode: mode.get_untracked(),
            email: email_value,
            password: password_value,
            role: role.get_untracked(),
        });
    };

    let mode_tab_class = "px-4 py-2 text-sm font-medium rounded-lg border border-gray-200 dark:border-gray-600 text-gray-900 dark:text-white";

    view! {
        <AppShell>
            <form class="max-w-sm mx-auto" on:submit=on_submit>
                <div class="mb-5 text-sm text-gray-500 dark:text-gray-400">
                    "Signing in as " <strong>{move || role.get().as_str()}</strong>
                </div>
                <div class="flex gap-2 mb-5">
                    <button
                        type="button"
                        class=mode_tab_class
                        class:bg-emerald-100=move || mode.get() == Mode::SignIn
                        class:dark:bg-emerald-900=move || mode.get() == Mode::SignIn
                        on:click=move |_| set_mode.set(Mode::SignIn)
                    >
                        "Login"
                    </button>
                    <button
                        type="button"
                        class=mode_tab_class
                        class:bg-emerald-100=move || mode.get() == Mode::Register
                        class:dark:bg-emerald-900=move || mode.get() == Mode::Register
                        on:click=move |_| set_mode.set(Mode::Register)
                    >
                        "Register"
                    </button>
                </div>
                <div class="mb-5">
                    <label
                        class="block mb-2 text-sm font-medium text-gray-900 dark:text-white"
                        for="email"
                    >
                        "Your email"
                    </label>
                    <input
                        id="email"
                        type="email"
                        class="bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-emerald-500 focus:border-emerald-500 block w-full p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:placeholder-gray-400 dark:text-white dark:focus:ring-emerald-500 dark:focus:border-emerald-500"
                        autocomplete="email"
                        placeholder="name@inbox.im"
                        required
                        on:input=move |event| set_email.set(event_target_value(&event))
                    />
                </div>
                <div class="mb-5">
                    <label
                        class="block mb-2 text-sm font-medium text-gray-900 dark:text-white"
                        for="password"
                    >
                        "Your password"
                    </label>
                    <input
                        id="password"
                        type="password"
                        class="bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-emerald-500 focus:border-emerald-500 block w-full p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:placeholder-gray-400 dark:text-white dark:focus:ring-emerald-500 dark:focus:border-emerald-500"
                        autocomplete="current-password"
                        required
                        on:input=move |event| set_password.set(event_target_value(&event))
                    />
                </div>
                <div class="mb-5">
                    <label
                        class="block mb-2 text-sm font-medium text-gray-900 dark:text-white"
                        for="role"
                    >
                        "Role"
                    </label>
                    <select
                        id="role"
                        class="bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-emerald-500 focus:border-emerald-500 block w-full p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:text-white dark:focus:ring-emerald-500 dark:focus:border-emerald-500"
                        on:change=move |event| {
                            if let Some(picked) = Role::parse(&event_target_value(&event)) {
                                set_role.set(picked);
                            }
                        }
                    >
                        {Role::ALL
                            .into_iter()
                            .map(|option| {
                                view! {
                                    <option
                                        value=option.as_str()
                                        selected=move || role.get() == option
                                    >
                                        {option.as_str()}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                </div>
                <Button button_type="submit" disabled=submit_action.pending()>
                    {move || {
                        if submit_action.pending().get() {
                            "Please wait..."
                        } else if mode.get() == Mode::SignIn {
                            "Login"
                        } else {
                            "Create account"
                        }
                    }}
                </Button>
                {move || {
                    submit_action
                        .pending()
                        .get()
                        .then_some(view! { <div class="mt-4"><Spinner /></div> })
                }}
                {move || {
                    error
                        .get()
                        .map(|err| {
                            view! {
                                <div class="mt-4">
                                    <Alert kind=AlertKind::Error message=err.message().to_string() />
                                </div>
                            }
                        })
                }}
            </form>
        </AppShell>
    }
}
