//! Client-side view of backend failures

use serde_json::Value;
use std::collections::BTreeMap;
use thiserror::Error;

use crate::session::SessionError;

/// Errors returned by [`ApiClient`](super::ApiClient) calls
#[derive(Debug, Error)]
pub enum ApiError {
    /// An auth-required call was attempted without a session; nothing was sent
    #[error("Login required")]
    AuthRequired,

    #[error("Unauthorized (401)")]
    Unauthorized { body: Value },

    #[error("Forbidden (403)")]
    Forbidden { body: Value },

    #[error("Not found (404)")]
    NotFound { body: Value },

    /// 400 with DRF-style field errors
    #[error("Invalid request (400): {}", first_message(.fields).unwrap_or("no details"))]
    Validation {
        fields: BTreeMap<String, Vec<String>>,
        body: Value,
    },

    #[error("HTTP {status}")]
    Http { status: u16, body: Value },

    #[error("Request timed out")]
    Timeout,

    #[error("Backend unavailable")]
    Unavailable,

    #[error("Request failed: {0}")]
    Transport(String),

    #[error("Failed to decode response: {0}")]
    Decode(String),

    #[error(transparent)]
    Session(#[from] SessionError),
}

fn first_message(fields: &BTreeMap<String, Vec<String>>) -> Option<&str> {
    fields
        .values()
        .flat_map(|messages| messages.iter())
        .map(String::as_str)
        .next()
}

/// Keys DRF and the custom views use for a single human-readable message
const MESSAGE_KEYS: [&str; 3] = ["detail", "message", "error"];

impl ApiError {
    /// Map a non-2xx response to its variant
    pub(crate) fn from_status(status: u16, text: &str) -> Self {
        let body = parse_body(text);
        match status {
            400 => ApiError::Validation {
                fields: field_errors(&body),
                body,
            },
            401 => ApiError::Unauthorized { body },
            403 => ApiError::Forbidden { body },
            404 => ApiError::NotFound { body },
            _ => ApiError::Http { status, body },
        }
    }

    pub(crate) fn from_transport(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            ApiError::Timeout
        } else if e.is_connect() {
            ApiError::Unavailable
        } else {
            ApiError::Transport(e.to_string())
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Unauthorized { .. } => Some(401),
            ApiError::Forbidden { .. } => Some(403),
            ApiError::NotFound { .. } => Some(404),
            ApiError::Validation { .. } => Some(400),
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// True when the user should be sent to the login dialog
    pub fn requires_login(&self) -> bool {
        matches!(
            self,
            ApiError::AuthRequired | ApiError::Unauthorized { .. } | ApiError::Forbidden { .. }
        )
    }

    fn body(&self) -> Option<&Value> {
        match self {
            ApiError::Unauthorized { body }
            | ApiError::Forbidden { body }
            | ApiError::NotFound { body }
            | ApiError::Validation { body, .. }
            | ApiError::Http { body, .. } => Some(body),
            _ => None,
        }
    }

    /// Message to show the user
    ///
    /// Uses the server's `detail`, `message` or `error` text when present,
    /// then the first field error, then a generic message for the variant.
    pub fn user_message(&self) -> String {
        let from_body = self.body().and_then(|body| {
            MESSAGE_KEYS
                .iter()
                .find_map(|key| body.get(*key).and_then(message_text))
        });
        if let Some(message) = from_body {
            return message;
        }

        if let ApiError::Validation { fields, .. } = self {
            if let Some(message) = first_message(fields) {
                return message.to_string();
            }
        }

        let fallback = match self {
            ApiError::AuthRequired => "로그인이 필요합니다.",
            ApiError::Unauthorized { .. } => "로그인이 만료되었습니다. 다시 로그인해주세요.",
            ApiError::Forbidden { .. } => "접근 권한이 없습니다.",
            ApiError::NotFound { .. } => "요청한 항목을 찾을 수 없습니다.",
            ApiError::Validation { .. } => "입력값을 확인해주세요.",
            ApiError::Timeout => "서버 응답 시간이 초과되었습니다.",
            ApiError::Unavailable => "서버에 연결할 수 없습니다.",
            _ => "요청 처리 중 오류가 발생했습니다.",
        };
        fallback.to_string()
    }
}

fn parse_body(text: &str) -> Value {
    if text.trim().is_empty() {
        return Value::Null;
    }
    serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_string()))
}

/// A message value may be a string or a list of strings
fn message_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Array(items) => items.iter().find_map(message_text),
        _ => None,
    }
}

/// `{"field": ["msg", ...]}` or `{"field": "msg"}` into a field map
fn field_errors(body: &Value) -> BTreeMap<String, Vec<String>> {
    let Some(object) = body.as_object() else {
        return BTreeMap::new();
    };

    object
        .iter()
        .filter(|(key, _)| !MESSAGE_KEYS.contains(&key.as_str()))
        .filter_map(|(key, value)| {
            let messages: Vec<String> = match value {
                Value::String(s) => vec![s.clone()],
                Value::Array(items) => items
                    .iter()
                    .filter_map(|v| v.as_str().map(str::to_string))
                    .collect(),
                _ => Vec::new(),
            };
            (!messages.is_empty()).then(|| (key.clone(), messages))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert!(matches!(ApiError::from_status(401, ""), ApiError::Unauthorized { .. }));
        assert!(matches!(ApiError::from_status(403, ""), ApiError::Forbidden { .. }));
        assert!(matches!(ApiError::from_status(404, ""), ApiError::NotFound { .. }));
        assert!(matches!(
            ApiError::from_status(502, "<html>bad gateway</html>"),
            ApiError::Http { status: 502, .. }
        ));
    }

    #[test]
    fn test_user_message_prefers_server_text() {
        let err = ApiError::from_status(403, r#"{"detail": "이 문의에 접근할 권한이 없습니다."}"#);
        assert_eq!(err.user_message(), "이 문의에 접근할 권한이 없습니다.");
        assert!(err.requires_login());

        let err = ApiError::from_status(400, r#"{"error": "이메일 또는 비밀번호가 올바르지 않습니다."}"#);
        assert_eq!(err.user_message(), "이메일 또는 비밀번호가 올바르지 않습니다.");
    }

    #[test]
    fn test_drf_field_errors() {
        let err = ApiError::from_status(
            400,
            r#"{"phone": ["올바른 연락처 형식이 아닙니다."], "student_count": "too many"}"#,
        );

        match &err {
            ApiError::Validation { fields, .. } => {
                assert_eq!(fields.len(), 2);
                assert_eq!(fields["student_count"], vec!["too many".to_string()]);
            }
            other => panic!("unexpected {:?}", other),
        }
        assert_eq!(err.user_message(), "올바른 연락처 형식이 아닙니다.");
        assert_eq!(err.status(), Some(400));
        assert!(!err.requires_login());
    }

    #[test]
    fn test_fallback_messages() {
        assert_eq!(ApiError::AuthRequired.user_message(), "로그인이 필요합니다.");
        assert_eq!(
            ApiError::from_status(500, "oops").user_message(),
            "요청 처리 중 오류가 발생했습니다."
        );
        assert_eq!(ApiError::Unavailable.status(), None);
    }
}
