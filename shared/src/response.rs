//! Interpretation of raw HTTP responses from the user endpoints.
//!
//! The frontend hands over status, content type and body text; everything
//! here is independent of the browser fetch API.

use crate::api::{ErrorResponse, UserInfoResponse};
use crate::error::{InvalidResponse, SettingsError};
use crate::models::UserProfile;

pub const DEFAULT_CHANGE_PASSWORD_ERROR: &str = "Failed to change password";

/// Upper bound on how much of an error body is echoed back to the user.
pub const MAX_ERROR_BODY_CHARS: usize = 512;

pub fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Validate a `GET /user/info` response and extract the profile.
///
/// Checks run in order: HTTP status, then content type, then body shape.
pub fn parse_user_info(
    status: u16,
    content_type: Option<&str>,
    body: &str,
) -> Result<UserProfile, SettingsError> {
    if !is_success(status) {
        return Err(SettingsError::http(
            status,
            format!("HTTP error! status: {}, body: {}", status, truncate_body(body)),
        ));
    }

    match content_type {
        Some(content_type) if content_type.contains("application/json") => {}
        other => return Err(InvalidResponse::ContentType(other.map(str::to_string)).into()),
    }

    let value: serde_json::Value =
        serde_json::from_str(body).map_err(|e| InvalidResponse::Json(e.to_string()))?;
    // Derived `Deserialize` also takes sequences; only an object is a profile.
    if !value.is_object() {
        return Err(InvalidResponse::MalformedBody.into());
    }
    let info: UserInfoResponse =
        serde_json::from_value(value).map_err(|_| InvalidResponse::MalformedBody)?;

    UserProfile::try_from(info)
}

/// Interpret a `PUT /user/change-password` response.
///
/// A failing response must carry a JSON body; its `error` field becomes the
/// message when it is a non-empty string, falling back to
/// [`DEFAULT_CHANGE_PASSWORD_ERROR`] otherwise. A body that is
/// not JSON surfaces the decoder's own message.
pub fn parse_change_password(status: u16, body: &str) -> Result<(), SettingsError> {
    if is_success(status) {
        return Ok(());
    }

    let response: ErrorResponse =
        serde_json::from_str(body).map_err(|e| SettingsError::http(status, e.to_string()))?;

    let message = response
        .message()
        .unwrap_or(DEFAULT_CHANGE_PASSWORD_ERROR)
        .to_string();

    Err(SettingsError::http(status, message))
}

fn truncate_body(body: &str) -> String {
    if body.chars().count() <= MAX_ERROR_BODY_CHARS {
        return body.to_string();
    }

    let mut truncated: String = body.chars().take(MAX_ERROR_BODY_CHARS).collect();
    truncated.push_str("...");
    truncated
}

#[cfg(test)]
mod tests {
    use super::*;

    const JSON: Option<&str> = Some("application/json; charset=utf-8");

    #[test]
    fn test_user_info_success() {
        let profile = parse_user_info(200, JSON, r#"{"username":"alice","tokens":42}"#)
            .expect("should parse profile");

        assert_eq!(profile.username, "alice");
        assert_eq!(profile.tokens, 42);
    }

    #[test]
    fn test_user_info_ignores_extra_fields() {
        let profile = parse_user_info(
            200,
            JSON,
            r#"{"username":"bob","tokens":0,"email":"bob@example.com"}"#,
        )
        .expect("should parse profile");

        assert_eq!(profile.username, "bob");
        assert_eq!(profile.tokens, 0);
    }

    #[test]
    fn test_user_info_http_failure_reports_status_and_body() {
        let err = parse_user_info(401, JSON, "Unauthorized").unwrap_err();

        assert_eq!(
            err,
            SettingsError::http(401, "HTTP error! status: 401, body: Unauthorized")
        );
    }

    #[test]
    fn test_user_info_http_failure_checked_before_content_type() {
        let err = parse_user_info(500, Some("text/html"), "<h1>boom</h1>").unwrap_err();
        assert!(matches!(
            err,
            SettingsError::TransportFailure {
                status: Some(500),
                ..
            }
        ));
    }

    #[test]
    fn test_user_info_long_error_body_truncated() {
        let body = "x".repeat(MAX_ERROR_BODY_CHARS + 100);
        let err = parse_user_info(502, None, &body).unwrap_err();

        let message = err.to_string();
        assert!(message.ends_with("..."));
        assert!(message.len() < body.len());
    }

    #[test]
    fn test_user_info_wrong_content_type() {
        let err = parse_user_info(200, Some("text/html"), "<html></html>").unwrap_err();
        assert_eq!(
            err,
            SettingsError::InvalidResponse(InvalidResponse::ContentType(Some(
                "text/html".to_string()
            )))
        );
    }

    #[test]
    fn test_user_info_missing_content_type() {
        let err = parse_user_info(200, None, r#"{"username":"alice","tokens":1}"#).unwrap_err();
        assert_eq!(
            err,
            SettingsError::InvalidResponse(InvalidResponse::ContentType(None))
        );
    }

    #[test]
    fn test_user_info_not_json() {
        let err = parse_user_info(200, JSON, "not json").unwrap_err();
        assert!(matches!(
            err,
            SettingsError::InvalidResponse(InvalidResponse::Json(_))
        ));
    }

    #[test]
    fn test_user_info_missing_fields() {
        for body in [
            r#"{"username":"alice"}"#,
            r#"{"tokens":5}"#,
            r#"{"username":"","tokens":5}"#,
            r#"{"username":"alice","tokens":null}"#,
            r#"[]"#,
            r#"["alice", 42]"#,
            r#""alice""#,
        ] {
            let err = parse_user_info(200, JSON, body).unwrap_err();
            assert_eq!(
                err,
                SettingsError::InvalidResponse(InvalidResponse::MalformedBody),
                "body: {}",
                body
            );
        }
    }

    #[test]
    fn test_change_password_success() {
        assert_eq!(parse_change_password(200, ""), Ok(()));
        assert_eq!(parse_change_password(204, ""), Ok(()));
    }

    #[test]
    fn test_change_password_error_message_forwarded() {
        let err = parse_change_password(400, r#"{"error":"Old password is incorrect"}"#)
            .unwrap_err();
        assert_eq!(err.to_string(), "Old password is incorrect");
    }

    #[test]
    fn test_change_password_default_message() {
        for body in [
            r#"{}"#,
            r#"{"error":null}"#,
            r#"{"error":""}"#,
            r#"{"error":{"message":"nested"}}"#,
            r#"{"error":403}"#,
        ] {
            let err = parse_change_password(500, body).unwrap_err();
            assert_eq!(err.to_string(), DEFAULT_CHANGE_PASSWORD_ERROR);
        }
    }

    #[test]
    fn test_change_password_unparseable_body() {
        let err = parse_change_password(502, "Bad Gateway").unwrap_err();

        assert!(matches!(
            err,
            SettingsError::TransportFailure {
                status: Some(502),
                ..
            }
        ));
        assert_ne!(err.to_string(), DEFAULT_CHANGE_PASSWORD_ERROR);
    }
}
