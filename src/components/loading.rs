use leptos::prelude::*;

/// Inline loading line; the spinner is drawn by the `loading-spinner` class
#[component]
pub fn LoadingText(message: &'static str) -> impl IntoView {
    view! {
        <p class="loading" aria-busy="true">
            <span class="loading-spinner"></span>
            {message}
        </p>
    }
}
