//! Project creation form

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions::projects::submit_and_notify;
use crate::components::StatusMessage;
use crate::state::AppState;
use crate::types::NewProject;

/// Create-project form.
///
/// Calls `on_created` after a successful submit so the owner can refresh its
/// list; never fetches anything itself.
#[component]
pub fn CreateProject(
    /// Called after a successful create
    on_created: impl Fn() + Clone + 'static,
    #[prop(optional)] title: Option<&'static str>,
) -> impl IntoView {
    let state = expect_context::<AppState>();

    let name = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let is_submitting = RwSignal::new(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let draft = NewProject {
            name: name.get(),
            description: description.get(),
        };
        let client = state.client();
        let on_created = on_created.clone();

        spawn_local(async move {
            is_submitting.set(true);
            let result = submit_and_notify(&client, &draft, || {
                name.set(String::new());
                description.set(String::new());
                on_created();
            })
            .await;
            is_submitting.set(false);

            match result {
                Ok(msg) => message.set(msg.to_string()),
                Err(e) => message.set(e),
            }
        });
    };

    view! {
        <div class="create-project">
            {title.map(|title| view! { <h3>{title}</h3> })}
            <form on:submit=on_submit>
                <input
                    type="text"
                    placeholder="Название"
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                    class="input"
                />
                <input
                    type="text"
                    placeholder="Описание"
                    prop:value=move || description.get()
                    on:input=move |ev| description.set(event_target_value(&ev))
                    class="input"
                />
                <button
                    type="submit"
                    disabled=move || is_submitting.get()
                    class="btn btn-primary"
                >
                    "Создать"
                </button>
            </form>
            <StatusMessage message=message />
        </div>
    }
}
