//! Registration page

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::Title;
use leptos_router::hooks::use_navigate;

use crate::actions::auth::{submit_register, Credentials, Registration, DEFAULT_ROLE};
use crate::components::StatusMessage;
use crate::state::AppState;

/// Sign-up form; a successful registration signs the user in as well
#[component]
pub fn RegisterPage() -> impl IntoView {
    let state = expect_context::<AppState>();
    let navigate = use_navigate();

    let name = RwSignal::new(String::new());
    let role = RwSignal::new(DEFAULT_ROLE.to_string());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let is_loading = RwSignal::new(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let registration = Registration {
            credentials: Credentials {
                email: email.get(),
                password: password.get(),
            },
            name: name.get(),
            role: role.get(),
        };
        let state = state.clone();
        let navigate = navigate.clone();

        spawn_local(async move {
            is_loading.set(true);
            let result = submit_register(&state.client(), &registration).await;
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
        <Title text="Регистрация" />
        <div class="auth">
            <h2>"Регистрация"</h2>
            <form on:submit=on_submit class="auth-form">
                <input
                    type="text"
                    placeholder="Имя"
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                    class="input"
                />
                <input
                    type="text"
                    placeholder="Роль"
                    prop:value=move || role.get()
                    on:input=move |ev| role.set(event_target_value(&ev))
                    class="input"
                />
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
                    "Зарегистрироваться"
                </button>
            </form>
            <StatusMessage message=message />
        </div>
    }
}
