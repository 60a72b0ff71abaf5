//! Navigation bar

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::routes::{HOME, NAV_LINKS};
use crate::state::AppState;

/// Static links to every route, plus sign-out when a token is held
#[component]
pub fn Nav() -> impl IntoView {
    let state = expect_context::<AppState>();
    let navigate = use_navigate();

    let links = NAV_LINKS
        .iter()
        .enumerate()
        .map(|(i, &(href, label))| {
            view! {
                {(i > 0).then_some(" | ")}
                <a href=href class="nav-link">{label}</a>
            }
        })
        .collect_view();

    view! {
        <nav class="nav">
            {links}
            {move || {
                if state.is_authenticated() {
                    let state = state.clone();
                    let navigate = navigate.clone();
                    view! {
                        " | "
                        <button
                            class="nav-link"
                            on:click=move |_| {
                                state.sign_out();
                                navigate(HOME, Default::default());
                            }
                        >
                            "Выход"
                        </button>
                    }.into_any()
                } else {
                    ().into_any()
                }
            }}
        </nav>
    }
}
