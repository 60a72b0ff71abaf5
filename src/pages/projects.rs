//! Project list page

use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::Title;

use crate::actions::projects::{ListSink, ListState, ProjectList, EMPTY, LOADING};
use crate::components::{CreateProject, LoadingText};
use crate::state::AppState;

/// Signals backing the project list on this page
#[derive(Clone, Copy)]
pub struct ProjectListHandle {
    pub state: RwSignal<ListState>,
    generation: RwSignal<u64>,
}

impl ProjectListHandle {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(ListState::Loading),
            generation: RwSignal::new(0),
        }
    }
}

impl Default for ProjectListHandle {
    fn default() -> Self {
        Self::new()
    }
}

impl ListSink for ProjectListHandle {
    fn generation(&self) -> u64 {
        self.generation.get_untracked()
    }

    fn set_generation(&self, generation: u64) {
        self.generation.set(generation);
    }

    fn publish(&self, state: ListState) {
        self.state.set(state);
    }
}

#[component]
pub fn ProjectsPage() -> impl IntoView {
    let state = expect_context::<AppState>();

    let handle = ProjectListHandle::new();
    let list = Rc::new(ProjectList::new(state.client(), handle));

    // Load on mount
    let list_for_mount = list.clone();
    Effect::new(move |_| {
        let list = list_for_mount.clone();
        spawn_local(async move {
            list.load().await;
        });
    });

    let on_created = move || {
        let list = list.clone();
        spawn_local(async move {
            list.invalidate().await;
        });
    };

    view! {
        <Title text="Проекты" />
        <div class="projects">
            <h2>"Список проектов"</h2>
            <CreateProject on_created=on_created />
            {move || match handle.state.get() {
                ListState::Loading => view! { <LoadingText message=LOADING /> }.into_any(),
                ListState::Empty => view! { <p>{EMPTY}</p> }.into_any(),
                ListState::Failed(message) => view! { <p class="error">{message}</p> }.into_any(),
                ListState::Loaded(projects) => view! {
                    <ul class="project-list">
                        {projects
                            .into_iter()
                            .map(|project| {
                                view! { <li data-id={project.id.to_string()}>{project.label()}</li> }
                            })
                            .collect_view()}
                    </ul>
                }
                .into_any(),
            }}
        </div>
    }
}
