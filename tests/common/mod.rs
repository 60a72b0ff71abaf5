//! In-memory stand-in for the project-finder API

#![allow(dead_code)]

use async_trait::async_trait;
use project_finder_ui::api::{ApiRequest, Method, Transport, LOGIN_PATH, PROJECTS_PATH, REGISTER_PATH};
use project_finder_ui::error::ApiError;
use serde_json::{json, Value};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use tokio::sync::Notify;

pub const ISSUED_TOKEN: &str = "token-for-";

#[derive(Default)]
pub struct FakeBackend {
    users: RefCell<HashMap<String, String>>,
    projects: RefCell<Vec<Value>>,
    next_id: Cell<u64>,
    fail_listing: Cell<bool>,
    hold_listing: Cell<bool>,
    release: Notify,
    pub requests: RefCell<Vec<ApiRequest>>,
}

impl FakeBackend {
    pub fn with_user(email: &str, password: &str) -> Self {
        let backend = Self::default();
        backend
            .users
            .borrow_mut()
            .insert(email.to_string(), password.to_string());
        backend
    }

    pub fn fail_listing(&self) {
        self.fail_listing.set(true);
    }

    /// The next project listing answers with the list as it was when the
    /// request arrived, but only after [`release_listing`](Self::release_listing)
    pub fn hold_next_listing(&self) {
        self.hold_listing.set(true);
    }

    pub fn release_listing(&self) {
        self.release.notify_one();
    }

    pub fn requests_to(&self, path: &str) -> Vec<ApiRequest> {
        self.requests
            .borrow()
            .iter()
            .filter(|r| r.path == path)
            .cloned()
            .collect()
    }

    fn login(&self, body: &Value) -> Result<Value, ApiError> {
        let email = body["email"].as_str().unwrap_or_default();
        let password = body["password"].as_str().unwrap_or_default();
        match self.users.borrow().get(email) {
            Some(stored) if stored == password => Ok(json!({
                "access_token": format!("{ISSUED_TOKEN}{email}"),
                "token_type": "bearer"
            })),
            _ => Err(ApiError::from_status(
                401,
                Some(&json!({"detail": "Incorrect email or password"})),
            )),
        }
    }

    fn register(&self, body: &Value) -> Result<Value, ApiError> {
        let email = body["email"].as_str().unwrap_or_default().to_string();
        if email.is_empty() {
            return Err(ApiError::from_status(
                422,
                Some(&json!({"detail": [{"loc": ["body", "email"], "msg": "field required"}]})),
            ));
        }
        if self.users.borrow().contains_key(&email) {
            return Err(ApiError::from_status(
                400,
                Some(&json!({"detail": "Email already registered"})),
            ));
        }
        let password = body["password"].as_str().unwrap_or_default().to_string();
        self.users.borrow_mut().insert(email.clone(), password);
        Ok(json!({"id": 1, "email": email, "name": body["name"], "role": body["role"]}))
    }

    fn authorize(&self, request: &ApiRequest) -> Result<(), ApiError> {
        match request.bearer.as_deref() {
            Some(token) if token.starts_with(ISSUED_TOKEN) => Ok(()),
            _ => Err(ApiError::from_status(
                401,
                Some(&json!({"detail": "Not authenticated"})),
            )),
        }
    }
}

#[async_trait(?Send)]
impl Transport for FakeBackend {
    async fn send(&self, request: ApiRequest) -> Result<Value, ApiError> {
        self.requests.borrow_mut().push(request.clone());
        let body = request.body.clone().unwrap_or(Value::Null);

        match (request.method, request.path.as_str()) {
            (Method::Post, LOGIN_PATH) => self.login(&body),
            (Method::Post, REGISTER_PATH) => self.register(&body),
            (Method::Get, PROJECTS_PATH) => {
                self.authorize(&request)?;
                if self.fail_listing.get() {
                    return Err(ApiError::Network("connection reset".into()));
                }
                let snapshot = self.projects.borrow().clone();
                if self.hold_listing.replace(false) {
                    self.release.notified().await;
                }
                Ok(Value::Array(snapshot))
            }
            (Method::Post, PROJECTS_PATH) => {
                self.authorize(&request)?;
                let id = self.next_id.get() + 1;
                self.next_id.set(id);
                let project = json!({
                    "id": id,
                    "name": body["name"],
                    "description": body["description"],
                });
                self.projects.borrow_mut().push(project.clone());
                Ok(project)
            }
            _ => Err(ApiError::from_status(404, Some(&json!({"detail": "Not Found"})))),
        }
    }
}
