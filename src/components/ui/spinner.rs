use leptos::prelude::*;

/// Centered loading indicator shown while a fetch is in flight.
#[component]
pub fn Spinner() -> impl IntoView {
    view! {
        <div class="flex justify-center py-4" role="status" aria-live="polite">
            <span class="inline-block h-7 w-7 animate-spin rounded-full border-4 border-emerald-200 border-t-emerald-600"></span>
            <span class="sr-only">"Loading"</span>
        </div>
    }
}
