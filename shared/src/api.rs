use serde::{Deserialize, Serialize};

// ============================================================================
// Endpoints
// ============================================================================

pub const USER_INFO_PATH: &str = "/user/info";
pub const CHANGE_PASSWORD_PATH: &str = "/user/change-password";

// ============================================================================
// User API Types
// ============================================================================

/// Body of a successful `GET /user/info`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserInfoResponse {
    pub username: String,
    pub tokens: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    pub old_password: String,
    pub new_password: String,
}

// ============================================================================
// Error Types
// ============================================================================

/// Failure body of `PUT /user/change-password`. The backend may omit `error`
/// or send something other than a string in it.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub error: Option<serde_json::Value>,
}

impl ErrorResponse {
    /// The `error` field, when it is a non-empty string.
    pub fn message(&self) -> Option<&str> {
        self.error
            .as_ref()
            .and_then(serde_json::Value::as_str)
            .filter(|message| !message.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_change_password_request_uses_camel_case() {
        let request = ChangePasswordRequest {
            old_password: "hunter2".to_string(),
            new_password: "correct horse".to_string(),
        };

        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(
            json,
            r#"{"oldPassword":"hunter2","newPassword":"correct horse"}"#
        );
    }

    #[test]
    fn test_error_response_without_error_field() {
        let parsed: ErrorResponse = serde_json::from_str(r#"{"status":"nope"}"#).unwrap();
        assert!(parsed.error.is_none());
        assert_eq!(parsed.message(), None);
    }

    #[test]
    fn test_error_response_message_only_for_strings() {
        let parsed: ErrorResponse =
            serde_json::from_str(r#"{"error":"Old password is incorrect"}"#).unwrap();
        assert_eq!(parsed.message(), Some("Old password is incorrect"));

        let parsed: ErrorResponse =
            serde_json::from_str(r#"{"error":{"message":"nested"}}"#).unwrap();
        assert_eq!(parsed.message(), None);
    }
}
