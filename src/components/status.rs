use leptos::prelude::*;

/// Status line under a form; renders nothing while the message is empty
#[component]
pub fn StatusMessage(#[prop(into)] message: Signal<String>) -> impl IntoView {
    view! {
        <Show when=move || !message.get().is_empty()>
            <p class="status">{move || message.get()}</p>
        </Show>
    }
}
