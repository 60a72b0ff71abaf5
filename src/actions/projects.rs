//! Project listing and creation

use crate::api::{self, ApiClient, Transport};
use crate::error::ApiError;
use crate::types::{NewProject, Project};

pub const LOADING: &str = "Загрузка...";
pub const EMPTY: &str = "Проекты не найдены.";
pub const LOAD_FAILED: &str = "Ошибка загрузки проектов";
pub const CREATED: &str = "Проект создан!";
pub const CREATE_FAILED: &str = "Ошибка создания проекта";

/// What the project list is showing
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ListState {
    #[default]
    Loading,
    Empty,
    Loaded(Vec<Project>),
    Failed(String),
}

impl ListState {
    pub fn from_result(result: Result<Vec<Project>, ApiError>) -> Self {
        match result {
            Ok(projects) if projects.is_empty() => Self::Empty,
            Ok(projects) => Self::Loaded(projects),
            Err(e) => {
                tracing::warn!(error = %e, "failed to load projects");
                Self::Failed(LOAD_FAILED.to_string())
            }
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Rendered entries, empty unless loaded
    pub fn labels(&self) -> Vec<String> {
        match self {
            Self::Loaded(projects) => projects.iter().map(Project::label).collect(),
            _ => vec![],
        }
    }
}

/// Fetch the full list
pub async fn load_projects<T: Transport>(client: &ApiClient<T>) -> ListState {
    ListState::from_result(api::fetch_projects(client).await)
}

/// Post a new project. Callers invalidate their list on `Ok`.
pub async fn submit_project<T: Transport>(
    client: &ApiClient<T>,
    draft: &NewProject,
) -> Result<&'static str, String> {
    match api::create_project(client, draft).await {
        Ok(project) => {
            tracing::info!(id = %project.id, "project created");
            Ok(CREATED)
        }
        Err(e) => {
            tracing::warn!(error = %e, "failed to create project");
            Err(e.user_message(CREATE_FAILED))
        }
    }
}

/// Post a new project and run `on_created` only if the server accepted it
pub async fn submit_and_notify<T: Transport>(
    client: &ApiClient<T>,
    draft: &NewProject,
    on_created: impl FnOnce(),
) -> Result<&'static str, String> {
    let message = submit_project(client, draft).await?;
    on_created();
    Ok(message)
}

/// Where a [`ProjectList`] keeps its generation counter and publishes state
pub trait ListSink {
    fn generation(&self) -> u64;
    fn set_generation(&self, generation: u64);
    fn publish(&self, state: ListState);
}

/// Project list with an invalidate-and-reload contract.
///
/// Every [`invalidate`](ProjectList::invalidate) starts exactly one fetch.
/// A response that lands after a newer invalidation is dropped.
pub struct ProjectList<T, S> {
    client: ApiClient<T>,
    sink: S,
}

impl<T: Transport, S: ListSink> ProjectList<T, S> {
    pub fn new(client: ApiClient<T>, sink: S) -> Self {
        Self { client, sink }
    }

    pub fn client(&self) -> &ApiClient<T> {
        &self.client
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Fetch for the current generation. Returns `false` if the result was
    /// superseded before it arrived.
    pub async fn load(&self) -> bool {
        let generation = self.sink.generation();
        self.sink.publish(ListState::Loading);

        let next = load_projects(&self.client).await;
        if self.sink.generation() != generation {
            tracing::debug!(generation, "dropping stale project list");
            return false;
        }
        self.sink.publish(next);
        true
    }

    pub async fn invalidate(&self) -> bool {
        self.sink.set_generation(self.sink.generation() + 1);
        self.load().await
    }
}
