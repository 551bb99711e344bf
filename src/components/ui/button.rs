use leptos::prelude::*;

const BASE_CLASSES: &str = "text-white bg-emerald-700 hover:bg-emerald-800 focus:ring-4 focus:outline-none focus:ring-emerald-300 font-medium rounded-lg text-sm w-full sm:w-auto px-5 py-2.5 text-center dark:bg-emerald-600 dark:hover:bg-emerald-700 dark:focus:ring-emerald-800";

/// Primary action button. Pages wire `disabled` to an action's `pending()`
/// signal so a request cannot be double-submitted.
#[component]
pub fn Button(
    #[prop(optional)] button_type: Option<&'static str>,
    #[prop(optional, into, default = Signal::from(false))] disabled: Signal<bool>,
    children: Children,
) -> impl IntoView {
    let button_type = button_type.unwrap_or("button");
    let class = move || {
        if disabled.get() {
            format!("{BASE_CLASSES} cursor-not-allowed opacity-70")
        } else {
            BASE_CLASSES.to_string()
        }
    };

    view! {
        <button type=button_type class=class disabled=move || disabled.get()>
            {children()}
        </button>
    }
}
