//! API types matching the DeQCode backend

use serde::{Deserialize, Serialize};

/// Login request
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Authentication response
///
/// Registration may answer without a key, so the field is optional for both.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct AuthResponse {
    #[serde(default)]
    pub session_key: Option<String>,
}

impl AuthResponse {
    /// The session key, if the backend issued a non-empty one.
    pub fn key(&self) -> Option<&str> {
        self.session_key.as_deref().filter(|k| !k.is_empty())
    }
}

/// Design-circuit request
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DesignRequest {
    pub username: String,
    pub statements: String,
}

/// Generated artifact returned by the design endpoint
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GenerationResult {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl GenerationResult {
    /// Application-reported error, if the body carries a non-empty one.
    pub fn reported_error(&self) -> Option<&str> {
        self.error
            .as_deref()
            .map(str::trim)
            .filter(|e| !e.is_empty())
    }
}

/// View-circuits request
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CircuitsRequest {
    pub username: String,
}

/// View-circuits response
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CircuitsResponse {
    #[serde(default)]
    pub circuits: Vec<HistoryEntry>,
}

/// A previously generated artifact
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct HistoryEntry {
    #[serde(default, alias = "_id", alias = "identifier")]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
}

impl From<HistoryEntry> for GenerationResult {
    fn from(entry: HistoryEntry) -> Self {
        Self {
            url: entry.url,
            content: entry.content,
            code: entry.code,
            error: None,
        }
    }
}

/// A chat line typed by the user
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub id: String,
    pub content: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            content: content.into(),
            timestamp: chrono::Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generation_result_tolerates_missing_fields() {
        let result: GenerationResult = serde_json::from_str("{}").unwrap();
        assert_eq!(result, GenerationResult::default());
        assert!(result.reported_error().is_none());
    }

    #[test]
    fn blank_error_field_is_not_an_error() {
        let result: GenerationResult =
            serde_json::from_str(r#"{"url":"https://sim/abc","error":"  "}"#).unwrap();
        assert!(result.reported_error().is_none());

        let failed: GenerationResult =
            serde_json::from_str(r#"{"error":"model overloaded"}"#).unwrap();
        assert_eq!(failed.reported_error(), Some("model overloaded"));
    }

    #[test]
    fn circuits_response_accepts_backend_identifiers() {
        let body = r#"{"circuits":[{"_id":"a1","url":"https://sim/a"},{"name":"Bell"}]}"#;
        let resp: CircuitsResponse = serde_json::from_str(body).unwrap();
        assert_eq!(resp.circuits.len(), 2);
        assert_eq!(resp.circuits[0].id.as_deref(), Some("a1"));
        assert_eq!(resp.circuits[1].name.as_deref(), Some("Bell"));
    }

    #[test]
    fn empty_session_key_is_no_key() {
        let auth: AuthResponse = serde_json::from_str(r#"{"session_key":""}"#).unwrap();
        assert!(auth.key().is_none());
        let auth: AuthResponse = serde_json::from_str(r#"{"session_key":"k1"}"#).unwrap();
        assert_eq!(auth.key(), Some("k1"));
    }

    #[test]
    fn design_request_uses_statements_field() {
        let req = DesignRequest {
            username: "ada".into(),
            statements: "build a 2-qubit circuit".into(),
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["statements"], "build a 2-qubit circuit");
        assert_eq!(json["username"], "ada");
    }
}
