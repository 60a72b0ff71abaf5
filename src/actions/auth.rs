//! Login and registration submits

use crate::api::{self, ApiClient, Transport};
use crate::routes;
use crate::types::RegisterRequest;

pub const LOGIN_SUCCESS: &str = "Вход выполнен успешно!";
pub const LOGIN_FAILED: &str = "Ошибка входа";
pub const REGISTER_SUCCESS: &str = "Регистрация прошла успешно!";
pub const REGISTER_FAILED: &str = "Ошибка регистрации";

/// Pause between a successful sign-in and the redirect
pub const REDIRECT_DELAY_MS: u32 = 1000;

/// Role sent when the register form leaves it blank
pub const DEFAULT_ROLE: &str = "developer";

/// Delayed navigation requested by a successful submit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Redirect {
    pub path: &'static str,
    pub after_ms: u32,
}

/// What the page shows after a successful submit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthSuccess {
    pub message: &'static str,
    pub redirect: Redirect,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registration {
    pub credentials: Credentials,
    pub name: String,
    pub role: String,
}

/// Exchange credentials for a token and store it in the session.
///
/// On failure the session is left untouched and the error is the message to
/// display.
pub async fn submit_login<T: Transport>(
    client: &ApiClient<T>,
    credentials: &Credentials,
) -> Result<AuthSuccess, String> {
    sign_in(client, credentials, LOGIN_SUCCESS).await
}

/// Create an account, then sign in with the same credentials
pub async fn submit_register<T: Transport>(
    client: &ApiClient<T>,
    registration: &Registration,
) -> Result<AuthSuccess, String> {
    let role = registration.role.trim();
    let request = RegisterRequest {
        email: registration.credentials.email.clone(),
        password: registration.credentials.password.clone(),
        name: registration.name.clone(),
        role: if role.is_empty() { DEFAULT_ROLE } else { role }.to_string(),
    };

    if let Err(e) = api::register(client, &request).await {
        tracing::warn!(error = %e, "registration failed");
        return Err(e.user_message(REGISTER_FAILED));
    }
    tracing::info!(email = %request.email, "registered");

    sign_in(client, &registration.credentials, REGISTER_SUCCESS).await
}

async fn sign_in<T: Transport>(
    client: &ApiClient<T>,
    credentials: &Credentials,
    message: &'static str,
) -> Result<AuthSuccess, String> {
    match api::login(client, &credentials.email, &credentials.password).await {
        Ok(token) => {
            client.session().set_token(Some(&token.access_token));
            tracing::info!("signed in");
            Ok(AuthSuccess {
                message,
                redirect: Redirect {
                    path: routes::PROJECTS,
                    after_ms: REDIRECT_DELAY_MS,
                },
            })
        }
        Err(e) => {
            tracing::warn!(error = %e, "login failed");
            Err(e.user_message(LOGIN_FAILED))
        }
    }
}
