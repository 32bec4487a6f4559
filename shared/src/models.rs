use validator::Validate;

use crate::api::{ChangePasswordRequest, UserInfoResponse};
use crate::error::{InvalidResponse, SettingsError};

pub const PASSWORD_MISMATCH: &str = "Passwords do not match";

/// Account summary shown at the top of the settings page.
///
/// Only ever built from a complete [`UserInfoResponse`], so a profile that
/// exists always has a non-empty username.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub username: String,
    pub tokens: i64,
}

impl TryFrom<UserInfoResponse> for UserProfile {
    type Error = SettingsError;

    fn try_from(info: UserInfoResponse) -> Result<Self, Self::Error> {
        if info.username.is_empty() {
            return Err(InvalidResponse::MalformedBody.into());
        }

        Ok(Self {
            username: info.username,
            tokens: info.tokens,
        })
    }
}

/// The three password inputs of the change-password form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Validate)]
pub struct PasswordForm {
    pub old_password: String,

    #[validate(must_match(other = "confirm_password", message = "Passwords do not match"))]
    pub new_password: String,

    pub confirm_password: String,
}

impl PasswordForm {
    /// Check that the new password was confirmed and build the request body.
    pub fn to_request(&self) -> Result<ChangePasswordRequest, SettingsError> {
        self.validate().map_err(|errors| {
            let message = errors
                .field_errors()
                .values()
                .flat_map(|errors| errors.iter())
                .find_map(|error| error.message.as_ref().map(|m| m.to_string()))
                .unwrap_or_else(|| PASSWORD_MISMATCH.to_string());
            SettingsError::ValidationError(message)
        })?;

        Ok(ChangePasswordRequest {
            old_password: self.old_password.clone(),
            new_password: self.new_password.clone(),
        })
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
