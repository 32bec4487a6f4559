use std::rc::Rc;

use shared::api::ChangePasswordRequest;
use shared::{PasswordForm, SettingsError, UserProfile};
use yew::Reducible;

use crate::services::credentials::CredentialProvider;

pub const PASSWORD_CHANGED: &str = "Password changed successfully";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusMessage {
    Success(String),
    Error(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordField {
    Old,
    New,
    Confirm,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SettingsAction {
    ProfileRequested,
    ProfileLoaded(UserProfile),
    ProfileFailed(SettingsError),
    FieldChanged(PasswordField, String),
    SubmitStarted,
    /// Rejected before any request went out.
    SubmitRejected(SettingsError),
    PasswordChanged,
    PasswordChangeFailed(SettingsError),
}

/// Everything the settings page renders from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SettingsState {
    pub profile: Option<UserProfile>,
    pub form: PasswordForm,
    pub status: Option<StatusMessage>,
    pub loading: bool,
    pub submitting: bool,
}

impl SettingsState {
    pub fn success_message(&self) -> Option<&str> {
        match &self.status {
            Some(StatusMessage::Success(message)) => Some(message.as_str()),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.status {
            Some(StatusMessage::Error(message)) => Some(message.as_str()),
            _ => None,
        }
    }
}

impl Reducible for SettingsState {
    type Action = SettingsAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();

        match action {
            SettingsAction::ProfileRequested => {
                next.loading = true;
                next.status = None;
            }
            SettingsAction::ProfileLoaded(profile) => {
                next.profile = Some(profile);
                next.loading = false;
            }
            SettingsAction::ProfileFailed(err) => {
                next.loading = false;
                next.status = Some(StatusMessage::Error(format!(
                    "Error fetching user info: {}",
                    err
                )));
            }
            SettingsAction::FieldChanged(field, value) => match field {
                PasswordField::Old => next.form.old_password = value,
                PasswordField::New => next.form.new_password = value,
                PasswordField::Confirm => next.form.confirm_password = value,
            },
            SettingsAction::SubmitStarted => {
                next.submitting = true;
                next.status = None;
            }
            SettingsAction::SubmitRejected(err) | SettingsAction::PasswordChangeFailed(err) => {
                next.submitting = false;
                next.status = Some(StatusMessage::Error(err.to_string()));
            }
            SettingsAction::PasswordChanged => {
                next.submitting = false;
                next.form.clear();
                next.status = Some(StatusMessage::Success(PASSWORD_CHANGED.to_string()));
            }
        }

        Rc::new(next)
    }
}

/// Everything a password change needs before a request can be sent.
///
/// The confirmation check runs first so a mismatch never touches the
/// credential store.
pub fn prepare_password_change(
    form: &PasswordForm,
    credentials: &dyn CredentialProvider,
) -> Result<(String, ChangePasswordRequest), SettingsError> {
    let request = form.to_request()?;
    let token = credentials
        .auth_token()
        .ok_or(SettingsError::MissingCredential)?;

    Ok((token, request))
}
