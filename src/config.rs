//! API endpoint configuration

use gloo_storage::{LocalStorage, Storage};

/// Fallback API base URL when nothing else is configured
pub const DEFAULT_API_BASE: &str = "http://localhost:8000";

/// Local storage key that overrides the API base URL at runtime
pub const API_BASE_STORAGE_KEY: &str = "api_base_url";

/// Where the API lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Resolve the base URL from local storage, then the build environment,
    /// then [`DEFAULT_API_BASE`].
    pub fn from_environment() -> Self {
        let stored = LocalStorage::raw()
            .get_item(API_BASE_STORAGE_KEY)
            .ok()
            .flatten();
        Self::resolve(stored, option_env!("PROJECT_FINDER_API_BASE"))
    }

    fn resolve(stored: Option<String>, compiled: Option<&str>) -> Self {
        let base = stored
            .filter(|url| !url.trim().is_empty())
            .or_else(|| compiled.map(str::to_string))
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());
        Self::new(base.trim())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Join a relative API path onto the base URL
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE)
    }
}
