//! # Authentication Handlers
//!
//! Handlers for register, verify, login, password reset, nickname and logout.
//!
//! Each submit handler parses its form into a typed input, claims the single
//! `in_flight` slot and spawns the request. The result comes back as an
//! [`AppEvent`] and is applied in `event_handler`.

use std::sync::Arc;

use async_channel::Sender;
use parking_lot::RwLock;

use crate::app::events::{AppEvent, Secret};
use crate::app::state::{AppState, AuthAction, Dialog, NotificationKind, VerifyMode};
use crate::core::error::AppError;
use crate::core::service::ApiService;
use crate::i18n::Notice;
use crate::utils::validation::{
    ForgotPasswordInput, LoginInput, NicknameInput, RegisterInput, ResetPasswordInput,
    ValidationError, VerifyCodeInput, VerifyPasswordInput,
};

/// Claim the in-flight slot and hand out the API client.
fn begin_request(state: &Arc<RwLock<AppState>>, action: AuthAction) -> Option<Arc<dyn ApiService>> {
    let mut state = state.write();

    if let Some(outstanding) = state.in_flight {
        tracing::debug!(?action, ?outstanding, "Request rejected, another one is in flight");
        state.notify(NotificationKind::Info, Notice::RequestInProgress);
        return None;
    }

    match state.api_client.clone() {
        Some(client) => {
            state.in_flight = Some(action);
            Some(client)
        }
        None => {
            let err = AppError::State("API client not available".to_string());
            state.notify_error(&err, action.generic_error());
            None
        }
    }
}

fn reject(state: &Arc<RwLock<AppState>>, action: AuthAction, err: ValidationError) {
    tracing::debug!(?action, error = %err, "Form rejected");
    let mut state = state.write();
    state.notify_error(&AppError::Validation(err), action.generic_error());
}

fn send(event_tx: Sender<AppEvent>, event: AppEvent) {
    if let Err(e) = event_tx.try_send(event) {
        tracing::error!(error = %e, "Failed to deliver request result");
    }
}

/// Handle register form submit
///
/// Internal handler function - use [`crate::app::App::handle_register_submit`] instead.
pub(crate) fn handle_register_submit(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let parsed = {
        let s = state.read();
        let form = &s.forms.register;
        RegisterInput::parse(&form.email, &form.password, &form.nickname)
    };
    let input = match parsed {
        Ok(input) => input,
        Err(e) => return reject(&state, AuthAction::Register, e),
    };

    let Some(api_client) = begin_request(&state, AuthAction::Register) else {
        return;
    };

    tokio::spawn(async move {
        let password = Secret(input.password.clone());
        let result = api_client
            .register(input.email, input.password, input.nickname)
            .await;
        send(event_tx, AppEvent::RegisterResult { password, result });
    });
}

/// Handle verify dialog submit in whichever mode is active
///
/// Internal handler function - use [`crate::app::App::handle_verify_submit`] instead.
pub(crate) fn handle_verify_submit(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let (pending, code, password) = {
        let s = state.read();
        (
            s.session.pending_verification.clone(),
            s.forms.verify.code.clone(),
            s.forms.verify.password.clone(),
        )
    };

    let Some(pending) = pending else {
        tracing::warn!("Verify submitted without a pending verification");
        let mut s = state.write();
        s.dialog = None;
        s.notify_error(
            &AppError::State("No pending verification".to_string()),
            Notice::VerificationError,
        );
        return;
    };

    match pending.mode {
        VerifyMode::Code => {
            let input = match VerifyCodeInput::parse(&code) {
                Ok(input) => input,
                Err(e) => return reject(&state, AuthAction::Verify, e),
            };
            let Some(api_client) = begin_request(&state, AuthAction::Verify) else {
                return;
            };
            tokio::spawn(async move {
                let result = api_client.verify(pending.user_id, input.code).await;
                send(event_tx, AppEvent::VerifyResult(result));
            });
        }
        VerifyMode::Password => {
            let input = match VerifyPasswordInput::parse(&password) {
                Ok(input) => input,
                Err(e) => return reject(&state, AuthAction::VerifyWithPassword, e),
            };
            let Some(api_client) = begin_request(&state, AuthAction::VerifyWithPassword) else {
                return;
            };
            tokio::spawn(async move {
                let result = api_client
                    .verify_with_password(pending.user_id, input.password)
                    .await;
                send(event_tx, AppEvent::VerifyWithPasswordResult(result));
            });
        }
    }
}

/// Toggle the verify dialog between code and password mode.
///
/// Switching to password mode pre-fills the password kept from register/login.
pub(crate) fn handle_switch_verify_mode(state: Arc<RwLock<AppState>>) {
    let mut state = state.write();
    let Some(pending) = state.session.pending_verification.as_mut() else {
        return;
    };

    pending.mode = match pending.mode {
        VerifyMode::Code => VerifyMode::Password,
        VerifyMode::Password => VerifyMode::Code,
    };
    let (mode, stored_password) = (pending.mode, pending.password.clone());

    if mode == VerifyMode::Password && state.forms.verify.password.is_empty() {
        state.forms.verify.password = stored_password;
    }
    tracing::debug!(?mode, "Verify mode switched");
}

/// Handle login form submit
///
/// Internal handler function - use [`crate::app::App::handle_login_submit`] instead.
pub(crate) fn handle_login_submit(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let parsed = {
        let s = state.read();
        LoginInput::parse(&s.forms.login.email, &s.forms.login.password)
    };
    let input = match parsed {
        Ok(input) => input,
        Err(e) => return reject(&state, AuthAction::Login, e),
    };

    let Some(api_client) = begin_request(&state, AuthAction::Login) else {
        return;
    };

    tokio::spawn(async move {
        let password = Secret(input.password.clone());
        let result = api_client.login(input.email, input.password).await;
        send(event_tx, AppEvent::LoginResult { password, result });
    });
}

/// Handle forgot-password form submit
///
/// Internal handler function - use [`crate::app::App::handle_forgot_password_submit`] instead.
pub(crate) fn handle_forgot_password_submit(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
) {
    let parsed = ForgotPasswordInput::parse(&state.read().forms.forgot_password.email);
    let input = match parsed {
        Ok(input) => input,
        Err(e) => return reject(&state, AuthAction::ForgotPassword, e),
    };

    let Some(api_client) = begin_request(&state, AuthAction::ForgotPassword) else {
        return;
    };

    tokio::spawn(async move {
        let result = api_client.forgot_password(input.email).await;
        send(event_tx, AppEvent::ForgotPasswordResult(result));
    });
}

/// Handle reset-password form submit
///
/// Internal handler function - use [`crate::app::App::handle_reset_password_submit`] instead.
pub(crate) fn handle_reset_password_submit(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
) {
    let (user_id, parsed) = {
        let s = state.read();
        let form = &s.forms.reset_password;
        (
            s.session.pending_reset,
            ResetPasswordInput::parse(&form.code, &form.new_password),
        )
    };

    let Some(user_id) = user_id else {
        tracing::warn!("Reset submitted without a pending reset");
        let mut s = state.write();
        s.dialog = None;
        s.notify_error(
            &AppError::State("No pending password reset".to_string()),
            Notice::GenericError,
        );
        return;
    };
    let input = match parsed {
        Ok(input) => input,
        Err(e) => return reject(&state, AuthAction::ResetPassword, e),
    };

    let Some(api_client) = begin_request(&state, AuthAction::ResetPassword) else {
        return;
    };

    tokio::spawn(async move {
        let result = api_client
            .reset_password(user_id, input.code, input.new_password)
            .await;
        send(event_tx, AppEvent::ResetPasswordResult(result));
    });
}

/// Handle nickname dialog submit
///
/// Internal handler function - use [`crate::app::App::handle_nickname_submit`] instead.
pub(crate) fn handle_nickname_submit(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let (user_id, parsed) = {
        let s = state.read();
        (
            s.session.current_user.as_ref().map(|u| u.id),
            NicknameInput::parse(&s.forms.nickname),
        )
    };

    let Some(user_id) = user_id else {
        let mut s = state.write();
        s.notify_error(&AppError::NotAuthenticated, Notice::GenericError);
        return;
    };
    let input = match parsed {
        Ok(input) => input,
        Err(e) => return reject(&state, AuthAction::UpdateNickname, e),
    };

    let Some(api_client) = begin_request(&state, AuthAction::UpdateNickname) else {
        return;
    };

    tokio::spawn(async move {
        let result = api_client.update_nickname(user_id, input.nickname).await;
        send(event_tx, AppEvent::NicknameResult { user_id, result });
    });
}

/// Handle logout click
///
/// Internal handler function - use [`crate::app::App::handle_logout_click`] instead.
pub(crate) fn handle_logout_click(state: Arc<RwLock<AppState>>) {
    state.write().logout();
}

/// Open the given dialog, preparing its form
pub(crate) fn open_dialog(state: Arc<RwLock<AppState>>, dialog: Dialog) {
    let mut state = state.write();

    if dialog.requires_auth() && !state.is_authenticated() {
        tracing::info!(?dialog, "Access denied: dialog requires authentication");
        state.notify_error(&AppError::NotAuthenticated, Notice::GenericError);
        return;
    }

    if dialog == Dialog::UpdateNickname {
        let current = state
            .session
            .current_user
            .as_ref()
            .and_then(|u| u.nickname.clone())
            .unwrap_or_default();
        state.forms.nickname = current;
    }

    tracing::debug!(?dialog, "Dialog opened");
    state.dialog = Some(dialog);
}

/// Close whatever dialog is open
pub(crate) fn close_dialog(state: Arc<RwLock<AppState>>) {
    let mut state = state.write();
    if let Some(dialog) = state.dialog.take() {
        tracing::debug!(?dialog, "Dialog closed");
    }
}
