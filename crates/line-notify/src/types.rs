//! Wire types returned by the LINE Notify API

use serde::{Deserialize, Serialize};

/// Whether a token is bound to a single user or to a group chat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TargetType {
    User,
    Group,
}

/// Response from `GET /api/status`.
///
/// Returned as the service sent it. `target` is the user or group name, and
/// the service sends the literal string `"null"` when it has none.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenStatus {
    pub status: u16,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_type: Option<TargetType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
}

/// Response from `POST /api/notify`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotifyResponse {
    pub status: u16,
    pub message: String,
}

/// Token endpoint body. Only `access_token` is used.
#[derive(Debug, Deserialize)]
pub(crate) struct TokenResponse {
    pub access_token: String,
}

/// Error body shape shared by both servers.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_status_deserializes_user_target() {
        let json = r#"{"status":200,"message":"ok","targetType":"USER","target":"Alice"}"#;
        let status: TokenStatus = serde_json::from_str(json).unwrap();
        assert_eq!(status.status, 200);
        assert_eq!(status.message, "ok");
        assert_eq!(status.target_type, Some(TargetType::User));
        assert_eq!(status.target.as_deref(), Some("Alice"));
    }

    #[test]
    fn token_status_keeps_literal_null_target() {
        let json = r#"{"status":200,"message":"ok","targetType":"GROUP","target":"null"}"#;
        let status: TokenStatus = serde_json::from_str(json).unwrap();
        assert_eq!(status.target_type, Some(TargetType::Group));
        assert_eq!(status.target.as_deref(), Some("null"));
    }

    #[test]
    fn target_type_tags_are_exact() {
        assert_eq!(serde_json::to_string(&TargetType::User).unwrap(), "\"USER\"");
        assert_eq!(
            serde_json::to_string(&TargetType::Group).unwrap(),
            "\"GROUP\""
        );
        assert!(serde_json::from_str::<TargetType>("\"user\"").is_err());
    }

    #[test]
    fn token_status_serializes_camel_case() {
        let status = TokenStatus {
            status: 200,
            message: "ok".into(),
            target_type: Some(TargetType::Group),
            target: Some("team".into()),
        };
        let json = serde_json::to_string(&status).unwrap();
        assert!(json.contains("\"targetType\":\"GROUP\""));
        assert!(json.contains("\"target\":\"team\""));
    }

    #[test]
    fn token_response_ignores_extra_fields() {
        let json = r#"{"access_token":"at_abc","token_type":"Bearer"}"#;
        let token: TokenResponse = serde_json::from_str(json).unwrap();
        assert_eq!(token.access_token, "at_abc");
    }

    #[test]
    fn error_body_without_message() {
        let body: ErrorBody = serde_json::from_str(r#"{"status":500}"#).unwrap();
        assert!(body.message.is_none());
    }
}
