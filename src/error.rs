//! Errors surfaced by the API client

use serde_json::Value;

/// Failure of a single API call
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Request failed with status {status}")]
    Status { status: u16, detail: Option<String> },

    #[error("Failed to serialize request: {0}")]
    Serialize(String),

    #[error("Failed to parse response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Build a status error from a non-2xx response and its (optional) JSON body
    pub fn from_status(status: u16, body: Option<&Value>) -> Self {
        Self::Status {
            status,
            detail: body.and_then(extract_detail),
        }
    }

    /// Server-provided detail, if the response carried one
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Status { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }

    /// The single status line shown to the user
    pub fn user_message(&self, fallback: &str) -> String {
        self.detail()
            .map(str::to_string)
            .unwrap_or_else(|| fallback.to_string())
    }
}

/// Pull a displayable message out of an error body.
///
/// Accepts `{"detail": "..."}`, validation errors of the form
/// `{"detail": [{"msg": "..."}, ...]}`, and `{"error": "..."}`.
fn extract_detail(body: &Value) -> Option<String> {
    let detail = body.get("detail").or_else(|| body.get("error"))?;
    match detail {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Array(items) => {
            let messages: Vec<&str> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(Value::as_str))
                .collect();
            if messages.is_empty() {
                None
            } else {
                Some(messages.join("; "))
            }
        }
        _ => None,
    }
}
