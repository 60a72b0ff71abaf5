//! API types matching the project-finder server

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Login request
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Register request
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub name: String,
    pub role: String,
}

/// Token issued by `/v1/auth/login`
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
}

/// User returned by `/v1/auth/register`
#[derive(Debug, Clone, Deserialize)]
pub struct RegisteredUser {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

/// Server-assigned project identifier.
///
/// Numeric and string ids are both held as text; an empty id never
/// deserializes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProjectId(String);

impl ProjectId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for ProjectId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match serde_json::Value::deserialize(deserializer)? {
            serde_json::Value::String(s) if !s.is_empty() => Ok(Self(s)),
            serde_json::Value::Number(n) => Ok(Self(n.to_string())),
            other => Err(D::Error::custom(format!("invalid project id: {other}"))),
        }
    }
}

/// Project as listed by the server
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    #[serde(alias = "title")]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl Project {
    /// List entry text, `"{name} — {description}"`
    pub fn label(&self) -> String {
        format!("{} — {}", self.name, self.description.as_deref().unwrap_or_default())
    }
}

/// Body of `POST /v1/projects`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NewProject {
    pub name: String,
    pub description: String,
}
