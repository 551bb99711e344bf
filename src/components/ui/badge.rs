use crate::features::auth::types::Role;
use leptos::prelude::*;

/// Small pill showing which role the session is signed in as.
#[component]
pub fn RoleBadge(role: Role) -> impl IntoView {
    let class = match role {
        Role::Patient => {
            "rounded-full bg-emerald-100 px-2.5 py-0.5 text-xs font-medium text-emerald-800 dark:bg-emerald-900 dark:text-emerald-200"
        }
        Role::Doctor => {
            "rounded-full bg-sky-100 px-2.5 py-0.5 text-xs font-medium text-sky-800 dark:bg-sky-900 dark:text-sky-200"
        }
        Role::Institution => {
            "rounded-full bg-violet-100 px-2.5 py-0.5 text-xs font-medium text-violet-800 dark:bg-violet-900 dark:text-violet-200"
        }
    };

    view! { <span class=class>{role.as_str()}</span> }
}
