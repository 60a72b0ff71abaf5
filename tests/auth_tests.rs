mod common;

use common::{FakeBackend, ISSUED_TOKEN};
use project_finder_ui::actions::auth::{
    submit_login, submit_register, Credentials, Registration, DEFAULT_ROLE, LOGIN_FAILED,
    LOGIN_SUCCESS, REDIRECT_DELAY_MS, REGISTER_FAILED, REGISTER_SUCCESS,
};
use project_finder_ui::api::{ApiClient, LOGIN_PATH, REGISTER_PATH};
use project_finder_ui::error::ApiError;
use project_finder_ui::routes;
use project_finder_ui::session::Session;
use serde_json::{json, Value};

fn credentials(email: &str, password: &str) -> Credentials {
    Credentials {
        email: email.to_string(),
        password: password.to_string(),
    }
}

// ============= Login =============

#[tokio::test]
async fn test_login_stores_token_and_redirects_to_projects() {
    let client = ApiClient::new(FakeBackend::with_user("ann@example.com", "hunter22"), Session::in_memory());

    let success = submit_login(&client, &credentials("ann@example.com", "hunter22"))
        .await
        .unwrap();

    assert_eq!(success.message, LOGIN_SUCCESS);
    assert_eq!(success.redirect.path, routes::PROJECTS);
    assert_eq!(success.redirect.after_ms, REDIRECT_DELAY_MS);
    assert_eq!(
        client.session().token(),
        Some(format!("{ISSUED_TOKEN}ann@example.com"))
    );
}

#[tokio::test]
async fn test_login_failure_shows_detail_and_keeps_session() {
    let session = Session::in_memory();
    session.set_token(Some("previous"));
    let client = ApiClient::new(FakeBackend::with_user("ann@example.com", "hunter22"), session);

    let err = submit_login(&client, &credentials("ann@example.com", "wrong"))
        .await
        .unwrap_err();

    assert_eq!(err, "Incorrect email or password");
    assert_eq!(client.session().token().as_deref(), Some("previous"));
}

#[tokio::test]
async fn test_login_failure_without_token_leaves_storage_empty() {
    let client = ApiClient::new(FakeBackend::default(), Session::in_memory());

    submit_login(&client, &credentials("nobody@example.com", "x"))
        .await
        .unwrap_err();

    assert_eq!(client.session().token(), None);
}

#[tokio::test]
async fn test_login_sends_json_credentials_without_bearer() {
    let client = ApiClient::new(FakeBackend::with_user("ann@example.com", "hunter22"), Session::in_memory());

    submit_login(&client, &credentials("ann@example.com", "hunter22"))
        .await
        .unwrap();

    let sent = client.transport().requests_to(LOGIN_PATH);
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].bearer, None);
    assert_eq!(
        sent[0].body,
        Some(json!({"email": "ann@example.com", "password": "hunter22"}))
    );
}

/// Transport that always fails with a network error
struct Offline;

#[async_trait::async_trait(?Send)]
impl project_finder_ui::api::Transport for Offline {
    async fn send(&self, _request: project_finder_ui::api::ApiRequest) -> Result<Value, ApiError> {
        Err(ApiError::Network("Failed to fetch".into()))
    }
}

#[tokio::test]
async fn test_network_failure_uses_fallback_message() {
    let client = ApiClient::new(Offline, Session::in_memory());

    let err = submit_login(&client, &credentials("ann@example.com", "hunter22"))
        .await
        .unwrap_err();

    assert_eq!(err, LOGIN_FAILED);
}

// ============= Register =============

#[tokio::test]
async fn test_register_then_signs_in() {
    let client = ApiClient::new(FakeBackend::default(), Session::in_memory());
    let registration = Registration {
        credentials: credentials("bob@example.com", "s3cret!!"),
        name: "Bob".into(),
        role: String::new(),
    };

    let success = submit_register(&client, &registration).await.unwrap();

    assert_eq!(success.message, REGISTER_SUCCESS);
    assert_eq!(success.redirect.path, routes::PROJECTS);
    assert_eq!(
        client.session().token(),
        Some(format!("{ISSUED_TOKEN}bob@example.com"))
    );

    let sent = client.transport().requests_to(REGISTER_PATH);
    assert_eq!(sent[0].body.as_ref().unwrap()["role"], DEFAULT_ROLE);
    assert_eq!(sent[0].body.as_ref().unwrap()["name"], "Bob");
}

#[tokio::test]
async fn test_register_duplicate_email_shows_detail() {
    let client = ApiClient::new(FakeBackend::with_user("bob@example.com", "old"), Session::in_memory());
    let registration = Registration {
        credentials: credentials("bob@example.com", "new"),
        name: "Bob".into(),
        role: "designer".into(),
    };

    let err = submit_register(&client, &registration).await.unwrap_err();

    assert_eq!(err, "Email already registered");
    assert_eq!(client.session().token(), None);
    assert!(client.transport().requests_to(LOGIN_PATH).is_empty());
}

#[tokio::test]
async fn test_register_validation_error_shows_message() {
    let client = ApiClient::new(FakeBackend::default(), Session::in_memory());

    let err = submit_register(&client, &Registration::default()).await.unwrap_err();

    assert_eq!(err, "field required");
    assert_ne!(err, REGISTER_FAILED);
}
