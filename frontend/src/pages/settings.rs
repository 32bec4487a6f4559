use shared::SettingsError;
use wasm_bindgen_futures::spawn_local;
use web_sys::{AbortController, HtmlInputElement};
use yew::prelude::*;

use crate::config::ClientConfig;
use crate::services::api::ApiService;
use crate::services::credentials::Credentials;
use crate::services::lifecycle::{deliver_if_live, lifecycle_signal, SubmitGuard};
use crate::state::{prepare_password_change, PasswordField, SettingsAction, SettingsState};

#[derive(Properties, PartialEq)]
pub struct SettingsPageProps {
    /// Token source; defaults to browser local storage under the configured key.
    #[prop_or_default]
    pub credentials: Option<Credentials>,
}

#[function_component(SettingsPage)]
pub fn settings_page(props: &SettingsPageProps) -> Html {
    let config = use_context::<ClientConfig>().unwrap_or_else(ClientConfig::from_env);
    let credentials = props
        .credentials
        .clone()
        .unwrap_or_else(|| Credentials::local_storage(&config.auth_token_key));
    let api = ApiService::new(&config);

    let state = use_reducer(SettingsState::default);
    // Aborted when the page is torn down; every request listens on it.
    let lifecycle = use_memo((), |_| match AbortController::new() {
        Ok(controller) => Some(controller),
        Err(e) => {
            tracing::warn!(error = ?e, "AbortController unavailable, requests cannot be cancelled");
            None
        }
    });
    let submit_guard = use_memo((), |_| SubmitGuard::default());

    // Fetch the profile once on mount
    {
        let state = state.clone();
        let api = api.clone();
        let credentials = credentials.clone();
        let lifecycle = lifecycle.clone();

        use_effect_with((), move |_| {
            state.dispatch(SettingsAction::ProfileRequested);

            match credentials.auth_token() {
                Some(token) => {
                    let signal = lifecycle_signal(&lifecycle);
                    spawn_local(async move {
                        let action = match api.fetch_user_info(&token, signal.as_ref()).await {
                            Ok(profile) => {
                                tracing::info!(username = %profile.username, "Loaded user info");
                                SettingsAction::ProfileLoaded(profile)
                            }
                            Err(e) => {
                                tracing::warn!(error = %e, "Failed to fetch user info");
                                SettingsAction::ProfileFailed(e)
                            }
                        };
                        deliver_if_live(&signal, action, |action| state.dispatch(action));
                    });
                }
                None => {
                    tracing::warn!("No authentication token, skipping user info request");
                    state.dispatch(SettingsAction::ProfileFailed(
                        SettingsError::MissingCredential,
                    ));
                }
            }

            move || {
                if let Some(controller) = &*lifecycle {
                    controller.abort();
                }
            }
        });
    }

    let onsubmit = {
        let state = state.clone();
        let lifecycle = lifecycle.clone();
        let submit_guard = submit_guard.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let Some(ticket) = submit_guard.try_begin() else {
                tracing::debug!("Password change already in flight, ignoring submit");
                return;
            };

            state.dispatch(SettingsAction::SubmitStarted);

            let (token, request) = match prepare_password_change(&state.form, &credentials) {
                Ok(prepared) => prepared,
                Err(e) => {
                    tracing::warn!(error = %e, "Password change rejected");
                    state.dispatch(SettingsAction::SubmitRejected(e));
                    return;
                }
            };

            let state = state.clone();
            let api = api.clone();
            let signal = lifecycle_signal(&lifecycle);

            spawn_local(async move {
                let result = api.change_password(&token, &request, signal.as_ref()).await;
                drop(ticket);

                let action = match result {
                    Ok(()) => {
                        tracing::info!("Password changed");
                        SettingsAction::PasswordChanged
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, "Failed to change password");
                        SettingsAction::PasswordChangeFailed(e)
                    }
                };
                deliver_if_live(&signal, action, |action| state.dispatch(action));
            });
        })
    };

    let on_input = |field: PasswordField| {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            state.dispatch(SettingsAction::FieldChanged(field, input.value()));
        })
    };

    html! {
        <div class="container">
            <h1 class="title">{ "Settings" }</h1>
            if let Some(profile) = &state.profile {
                <h2 class="username">{ format!("Welcome, {}!", profile.username) }</h2>
            }

            <div class="section">
                <h2 class="subtitle">{ "Total Tokens" }</h2>
                if state.loading {
                    <div class="loading">
                        <div class="spinner"></div>
                    </div>
                }
                if let Some(profile) = &state.profile {
                    <p class="tokens">{ profile.tokens }</p>
                }
            </div>

            <div class="section">
                <h2 class="subtitle">{ "Change Password" }</h2>

                <form {onsubmit}>
                    <div class="formGroup">
                        <label class="label">{ "Old Password" }</label>
                        <input
                            type="password"
                            value={state.form.old_password.clone()}
                            oninput={on_input(PasswordField::Old)}
                            required=true
                            class="input"
                        />
                    </div>

                    <div class="formGroup">
                        <label class="label">{ "New Password" }</label>
                        <input
                            type="password"
                            value={state.form.new_password.clone()}
                            oninput={on_input(PasswordField::New)}
                            required=true
                            class="input"
                        />
                    </div>

                    <div class="formGroup">
                        <label class="label">{ "Confirm Password" }</label>
                        <input
                            type="password"
                            value={state.form.confirm_password.clone()}
                            oninput={on_input(PasswordField::Confirm)}
                            required=true
                            class="input"
                        />
                    </div>

                    <button type="submit" class="button" disabled={state.submitting}>
                        { "Change Password" }
                    </button>
                </form>

                if let Some(message) = state.success_message() {
                    <p class="successMessage">{ message }</p>
                }
                if let Some(message) = state.error_message() {
                    <p class="errorMessage">{ message }</p>
                }
            </div>
        </div>
    }
}
