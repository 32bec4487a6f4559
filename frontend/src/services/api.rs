use gloo_net::http::Request;
use shared::api::{ChangePasswordRequest, CHANGE_PASSWORD_PATH, USER_INFO_PATH};
use shared::response::{is_success, parse_change_password, parse_user_info};
use shared::{SettingsError, UserProfile};
use web_sys::{AbortSignal, RequestCache};

use crate::config::ClientConfig;

const NO_CACHE: &str = "no-store, no-cache, must-revalidate, max-age=0";

#[derive(Debug, Clone, PartialEq)]
pub struct ApiService {
    config: ClientConfig,
}

impl ApiService {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }

    /// `GET /user/info`, bypassing every cache layer.
    pub async fn fetch_user_info(
        &self,
        token: &str,
        signal: Option<&AbortSignal>,
    ) -> Result<UserProfile, SettingsError> {
        let url = self.config.endpoint(USER_INFO_PATH);
        tracing::debug!(%url, "Fetching user info");

        let response = Request::get(&url)
            .header("Authorization", &bearer(token))
            .header("Content-Type", "application/json")
            .header("Cache-Control", NO_CACHE)
            .header("Pragma", "no-cache")
            .cache(RequestCache::NoStore)
            .abort_signal(signal)
            .send()
            .await
            .map_err(transport)?;

        let content_type = response.headers().get("content-type");
        tracing::debug!(status = response.status(), ?content_type, "User info response");

        let body = response.text().await.map_err(transport)?;
        parse_user_info(response.status(), content_type.as_deref(), &body)
    }

    /// `PUT /user/change-password`.
    pub async fn change_password(
        &self,
        token: &str,
        request: &ChangePasswordRequest,
        signal: Option<&AbortSignal>,
    ) -> Result<(), SettingsError> {
        let url = self.config.endpoint(CHANGE_PASSWORD_PATH);
        tracing::debug!(%url, "Changing password");

        let response = Request::put(&url)
            .header("Authorization", &bearer(token))
            .abort_signal(signal)
            .json(request)
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;

        let status = response.status();
        if is_success(status) {
            return Ok(());
        }

        let body = response.text().await.map_err(transport)?;
        parse_change_password(status, &body)
    }
}

fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}

fn transport(err: gloo_net::Error) -> SettingsError {
    SettingsError::network(err.to_string())
}
