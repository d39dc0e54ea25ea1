//! # Event Handler
//!
//! Applies results of spawned auth requests to the application state.
//!
//! Every event releases the `in_flight` slot, then either advances the
//! session or queues a localized error notification.

use shared::{AckResponse, ForgotPasswordResponse, RegisterResponse, User};

use crate::app::events::{AppEvent, Secret};
use crate::app::state::{
    AppState, AuthAction, Dialog, NotificationKind, PendingVerification, ResetPasswordForm,
    VerifyForm, VerifyMode,
};
use crate::app::App;
use crate::core::error::AppError;
use crate::i18n::Notice;

/// Trait for event handling implementation
pub(crate) trait AppEventHandler {
    fn handle_event_impl(&mut self, event: AppEvent);
}

impl AppEventHandler for App {
    /// Handle async event results
    ///
    /// Acquires the write lock once per event.
    fn handle_event_impl(&mut self, event: AppEvent) {
        tracing::debug!(event = event.name(), success = event.is_ok(), "Processing event");

        let mut state = self.state.write();
        state.in_flight = None;

        match event {
            AppEvent::RegisterResult { password, result } => {
                apply_register_result(&mut state, password, result)
            }
            AppEvent::VerifyResult(result) => apply_verify_result(&mut state, result),
            AppEvent::VerifyWithPasswordResult(result) => {
                apply_verify_with_password_result(&mut state, result)
            }
            AppEvent::LoginResult { password, result } => {
                apply_login_result(&mut state, password, result)
            }
            AppEvent::ForgotPasswordResult(result) => apply_forgot_password_result(&mut state, result),
            AppEvent::ResetPasswordResult(result) => apply_reset_password_result(&mut state, result),
            AppEvent::NicknameResult { user_id, result } => {
                apply_nickname_result(&mut state, user_id, result)
            }
        }
    }
}

fn start_verification(state: &mut AppState, user_id: i64, password: Secret) {
    state.session.pending_verification = Some(PendingVerification {
        user_id,
        password: password.0,
        mode: VerifyMode::Code,
    });
    state.forms.verify = VerifyForm::default();
    state.dialog = Some(Dialog::Verify);
}

fn apply_register_result(
    state: &mut AppState,
    password: Secret,
    result: Result<RegisterResponse, AppError>,
) {
    match result {
        Ok(response) => {
            tracing::info!(user_id = response.user_id, "Registered, awaiting verification");
            start_verification(state, response.user_id, password);
            state.forms.register = Default::default();

            let notice = if state.insecure_echo_codes {
                Notice::VerificationCode(response.verification_code)
            } else {
                Notice::VerificationCodeSent
            };
            state.notify(NotificationKind::Success, notice);
        }
        Err(e) => state.notify_error(&e, AuthAction::Register.generic_error()),
    }
}

fn apply_verify_result(state: &mut AppState, result: Result<AckResponse, AppError>) {
    match result {
        Ok(_) => {
            tracing::info!("Email verified");
            state.session.pending_verification = None;
            state.forms.verify = VerifyForm::default();
            if state.dialog == Some(Dialog::Verify) {
                state.dialog = None;
            }
            state.notify(NotificationKind::Success, Notice::EmailVerified);
        }
        Err(e) => state.notify_error(&e, AuthAction::Verify.generic_error()),
    }
}

fn apply_verify_with_password_result(state: &mut AppState, result: Result<User, AppError>) {
    match result {
        Ok(user) => {
            tracing::info!(user_id = user.id, "Verified with password, logged in");
            state.session.current_user = Some(user);
            state.session.pending_verification = None;
            state.forms.verify = VerifyForm::default();
            if state.dialog == Some(Dialog::Verify) {
                state.dialog = None;
            }
            state.notify(NotificationKind::Success, Notice::LoggedInWithPassword);
        }
        Err(e) => state.notify_error(&e, AuthAction::VerifyWithPassword.generic_error()),
    }
}

fn apply_login_result(state: &mut AppState, password: Secret, result: Result<User, AppError>) {
    match result {
        Ok(user) => {
            tracing::info!(user_id = user.id, "Logged in");
            state.session.current_user = Some(user);
            state.session.pending_verification = None;
            state.forms.login = Default::default();
            if state.dialog == Some(Dialog::Login) {
                state.dialog = None;
            }
            state.notify(NotificationKind::Success, Notice::LoggedIn);
        }
        Err(AppError::Unverified { user_id }) => {
            tracing::info!(user_id, "Login requires email verification");
            start_verification(state, user_id, password);
            state.notify(NotificationKind::Error, Notice::PleaseVerifyEmail);
        }
        Err(e) => state.notify_error(&e, AuthAction::Login.generic_error()),
    }
}

fn apply_forgot_password_result(
    state: &mut AppState,
    result: Result<ForgotPasswordResponse, AppError>,
) {
    match result {
        Ok(response) => {
            tracing::info!(user_id = response.user_id, "Password reset requested");
            state.session.pending_reset = Some(response.user_id);
            state.forms.forgot_password = Default::default();
            state.forms.reset_password = ResetPasswordForm::default();
            state.dialog = Some(Dialog::ResetPassword);

            let notice = if state.insecure_echo_codes {
                Notice::ResetCode(response.reset_code)
            } else {
                Notice::ResetCodeSent
            };
            state.notify(NotificationKind::Success, notice);
        }
        Err(e) => state.notify_error(&e, AuthAction::ForgotPassword.generic_error()),
    }
}

fn apply_reset_password_result(state: &mut AppState, result: Result<AckResponse, AppError>) {
    match result {
        Ok(_) => {
            tracing::info!("Password reset");
            state.session.pending_reset = None;
            state.forms.reset_password = ResetPasswordForm::default();
            if state.dialog == Some(Dialog::ResetPassword) {
                state.dialog = None;
            }
            state.notify(NotificationKind::Success, Notice::PasswordReset);
        }
        Err(e) => state.notify_error(&e, AuthAction::ResetPassword.generic_error()),
    }
}

fn apply_nickname_result(state: &mut AppState, user_id: i64, result: Result<String, AppError>) {
    match result {
        Ok(nickname) => {
            let Some(user) = state.session.current_user.as_mut().filter(|u| u.id == user_id) else {
                tracing::warn!(user_id, "Nickname result no longer matches the session, ignoring");
                return;
            };
            tracing::info!(user_id = user.id, nickname = %nickname, "Nickname updated");
            user.nickname = Some(nickname);
            state.forms.nickname.clear();
            if state.dialog == Some(Dialog::UpdateNickname) {
                state.dialog = None;
            }
            state.notify(NotificationKind::Success, Notice::NicknameUpdated);
        }
        Err(e) => state.notify_error(&e, AuthAction::UpdateNickname.generic_error()),
    }
}
