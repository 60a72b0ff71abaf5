//! Project Finder UI - Leptos frontend
//!
//! Registration, login and a project list for the project-finder API. Each
//! page owns its own view state and talks to the API through
//! [`api::ApiClient`]; the session token is the only state shared between
//! pages.

pub mod actions;
pub mod api;
pub mod components;
pub mod config;
pub mod error;
pub mod pages;
pub mod routes;
pub mod session;
pub mod state;
pub mod types;

use leptos::prelude::*;
use leptos_meta::provide_meta_context;
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

use components::Nav;
use pages::{home::HomePage, login::LoginPage, projects::ProjectsPage, register::RegisterPage};
use state::AppState;

/// Main application component
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let app_state = AppState::new();
    tracing::info!(api = app_state.config.base_url(), "starting");
    provide_context(app_state);

    view! {
        <Router>
            <Nav />
            <main class="container">
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/register") view=RegisterPage />
                    <Route path=path!("/login") view=LoginPage />
                    <Route path=path!("/projects") view=ProjectsPage />
                </Routes>
            </main>
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"404"</h1>
            <p>"Страница не найдена"</p>
            <a href={routes::HOME}>"На главную"</a>
        </div>
    }
}
