use thiserror::Error;

/// Everything that can go wrong on the settings page. Each variant ends up as
/// a single status line shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    #[error("No authentication token found")]
    MissingCredential,

    /// Connectivity failure (`status` is `None`) or a non-success HTTP status.
    #[error("{message}")]
    TransportFailure { status: Option<u16>, message: String },

    #[error(transparent)]
    InvalidResponse(#[from] InvalidResponse),

    #[error("{0}")]
    ValidationError(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidResponse {
    #[error("Expected JSON, got {}", .0.as_deref().unwrap_or("none"))]
    ContentType(Option<String>),

    #[error("Invalid JSON body: {0}")]
    Json(String),

    #[error("Invalid user data structure")]
    MalformedBody,
}

impl SettingsError {
    pub fn network(message: impl Into<String>) -> Self {
        Self::TransportFailure {
            status: None,
            message: message.into(),
        }
    }

    pub fn http(status: u16, message: impl Into<String>) -> Self {
        Self::TransportFailure {
            status: Some(status),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_failure_displays_message_only() {
        let err = SettingsError::http(400, "Old password is incorrect");
        assert_eq!(err.to_string(), "Old password is incorrect");
    }

    #[test]
    fn test_content_type_without_header() {
        let err = SettingsError::from(InvalidResponse::ContentType(None));
        assert_eq!(err.to_string(), "Expected JSON, got none");
    }

    #[test]
    fn test_content_type_with_header() {
        let err = InvalidResponse::ContentType(Some("text/html; charset=utf-8".to_string()));
        assert_eq!(err.to_string(), "Expected JSON, got text/html; charset=utf-8");
    }
}
