//! Global application state

use leptos::prelude::*;

use crate::api::{ApiClient, GlooTransport};
use crate::config::ApiConfig;
use crate::session::Session;

/// Shared across pages through context.
///
/// The only cross-page state is the session token; everything else lives in
/// the page that owns it.
#[derive(Clone)]
pub struct AppState {
    /// Mirror of the persisted token, for reactive rendering
    pub token: RwSignal<Option<String>>,
    pub session: Session,
    pub config: ApiConfig,
}

impl AppState {
    pub fn new() -> Self {
        Self::with(Session::browser(), ApiConfig::from_environment())
    }

    pub fn with(session: Session, config: ApiConfig) -> Self {
        Self {
            token: RwSignal::new(session.token()),
            session,
            config,
        }
    }

    /// Client bound to the configured API and this session
    pub fn client(&self) -> ApiClient<GlooTransport> {
        ApiClient::new(GlooTransport::new(self.config.clone()), self.session.clone())
    }

    /// Pick up a token written to the session by a page action
    pub fn sync_token(&self) {
        self.token.set(self.session.token());
    }

    pub fn sign_out(&self) {
        self.session.set_token(None);
        self.token.set(None);
        tracing::info!("signed out");
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.get().is_some()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
