//! API client for communicating with the project-finder server

mod http;

pub use http::GlooTransport;

use crate::error::ApiError;
use crate::session::Session;
use crate::types::*;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

pub const LOGIN_PATH: &str = "/v1/auth/login";
pub const REGISTER_PATH: &str = "/v1/auth/register";
pub const PROJECTS_PATH: &str = "/v1/projects";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// A request as handed to a [`Transport`]
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    /// Path relative to the API base, e.g. `/v1/projects`
    pub path: String,
    pub body: Option<Value>,
    pub bearer: Option<String>,
}

/// Moves a request over the wire and returns the decoded JSON body.
///
/// Non-2xx responses must come back as [`ApiError::Status`].
#[async_trait(?Send)]
pub trait Transport {
    async fn send(&self, request: ApiRequest) -> Result<Value, ApiError>;
}

/// Typed client shared by every page
#[derive(Debug, Clone)]
pub struct ApiClient<T> {
    transport: T,
    session: Session,
}

impl<T: Transport> ApiClient<T> {
    pub fn new(transport: T, session: Session) -> Self {
        Self { transport, session }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub async fn get<R: DeserializeOwned>(&self, path: &str) -> Result<R, ApiError> {
        self.dispatch(Method::Get, path, None).await
    }

    pub async fn post<B, R>(&self, path: &str, body: &B) -> Result<R, ApiError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let body = serde_json::to_value(body).map_err(|e| ApiError::Serialize(e.to_string()))?;
        self.dispatch(Method::Post, path, Some(body)).await
    }

    async fn dispatch<R: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<R, ApiError> {
        let request = ApiRequest {
            method,
            path: path.to_string(),
            body,
            bearer: self.session.token(),
        };
        tracing::debug!(?method, path, "api request");

        let value = self.transport.send(request).await?;
        serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

/// Login to the API
pub async fn login<T: Transport>(
    client: &ApiClient<T>,
    email: &str,
    password: &str,
) -> Result<TokenResponse, ApiError> {
    let body = LoginRequest {
        email: email.to_string(),
        password: password.to_string(),
    };
    client.post(LOGIN_PATH, &body).await
}

/// Register a new user
pub async fn register<T: Transport>(
    client: &ApiClient<T>,
    request: &RegisterRequest,
) -> Result<RegisteredUser, ApiError> {
    client.post(REGISTER_PATH, request).await
}

/// Fetch all projects
pub async fn fetch_projects<T: Transport>(client: &ApiClient<T>) -> Result<Vec<Project>, ApiError> {
    client.get(PROJECTS_PATH).await
}

/// Create a new project
pub async fn create_project<T: Transport>(
    client: &ApiClient<T>,
    project: &NewProject,
) -> Result<Project, ApiError> {
    client.post(PROJECTS_PATH, project).await
}
