//! Home/landing page

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::CreateProject;
use crate::routes::{LOGIN, PROJECTS, REGISTER};
use crate::state::AppState;

#[component]
pub fn HomePage() -> impl IntoView {
    let state = expect_context::<AppState>();
    let is_auth = move || state.is_authenticated();

    // Bumped by the quick-create form so the link below can appear
    let created = RwSignal::new(0u32);

    view! {
        <Title text="Project Finder" />
        <section class="home">
            <h1>"Project Finder"</h1>
            <p>"Находите проекты и собирайте команду."</p>
            <Show
                when=is_auth
                fallback=|| view! {
                    <p>
                        <a href=REGISTER>"Зарегистрируйтесь"</a>
                        " или "
                        <a href=LOGIN>"войдите"</a>
                        ", чтобы создавать проекты."
                    </p>
                }
            >
                <CreateProject
                    title="Создать проект"
                    on_created=move || created.update(|n| *n += 1)
                />
                <Show when=move || { created.get() > 0 }>
                    <p><a href=PROJECTS>"Перейти к списку проектов"</a></p>
                </Show>
            </Show>
        </section>
    }
}
