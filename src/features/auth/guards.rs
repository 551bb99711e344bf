use crate::features::auth::{policy::can_view, state::use_session, types::Role};
use crate::routes::paths;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

/// Wraps a page that only certain roles may see. Denied visitors are sent to
/// the landing page and the wrapped content is never built, so a protected
/// page issues no API calls while signed out.
#[component]
pub fn RequireRole(
    /// Roles admitted to the wrapped content; empty admits any signed-in role.
    #[prop(optional)]
    allowed: &'static [Role],
    children: ChildrenFn,
) -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();
    let permitted = Signal::derive(move || can_view(session.session.get().as_ref(), allowed));

    Effect::new(move |_| {
        if !permitted.get() {
            // UX-only guard; real access control must live on the API.
            navigate(paths::HOME, Default::default());
        }
    });

    view! { <Show when=move || permitted.get()>{children()}</Show> }
}
