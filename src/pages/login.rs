//! Login page

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::Title;
use leptos_router::hooks::use_navigate;

use crate::actions::auth::{submit_login, Credentials};
use crate::components::StatusMessage;
use crate::state::AppState;

#[component]
pub fn LoginPage() -> impl IntoView {
    let state = expect_context::<AppState>();
    let navigate = use_navigate();

    // Form state
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let is_loading = RwSignal::new(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let credentials = Credentials {
            email: email.get(),
            password: password.get(),
        };
        let state = state.clone();
        let navigate = navigate.clone();

        spawn_local(async move {
            is_loading.set(true);
            let result = submit_login(&state.client(), &credentials).await;
            is_loading.set(false);

            match result {
                Ok(success) => {
                    message.set(success.message.to_string());
                    state.sync_token();
                    TimeoutFuture::new(success.redirect.after_ms).await;
                    navigate(success.redirect.path, Default::default());
                }
                Err(e) => message.set(e),
            }
        });
    };

    view! {
        <Title text="Вход" />
        <div class="auth">
            <h2>"Вход"</h2>
            <form on:submit=on_submit class="auth-form">
                <input
                    type="email"
                    placeholder="Email"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                    class="input"
                />
                <input
                    type="password"
                    placeholder="Пароль"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                    class="input"
                />
                <button
                    type="submit"
                    disabled=move || is_loading.get()
                    class="btn btn-primary"
                >
                    "Войти"
                </button>
            </form>
            <StatusMessage message=message />
        </div>
    }
}
