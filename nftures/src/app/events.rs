//! # Application Events
//!
//! Results of spawned auth requests, sent back to the main thread.

use shared::{AckResponse, ForgotPasswordResponse, RegisterResponse, User};

use crate::core::error::AppError;

/// Password carried through an event without showing up in `Debug` output
#[derive(Clone, PartialEq, Eq)]
pub struct Secret(pub String);

impl std::fmt::Debug for Secret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Secret(***)")
    }
}

/// Async task results sent to main thread
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Registration completed; `password` is kept for verify-with-password
    RegisterResult {
        password: Secret,
        result: Result<RegisterResponse, AppError>,
    },
    /// Email verification by code completed
    VerifyResult(Result<AckResponse, AppError>),
    /// Email verification by password completed
    VerifyWithPasswordResult(Result<User, AppError>),
    /// Login completed; `password` is kept for an unverified account
    LoginResult {
        password: Secret,
        result: Result<User, AppError>,
    },
    /// Reset code requested
    ForgotPasswordResult(Result<ForgotPasswordResponse, AppError>),
    /// Password reset completed
    ResetPasswordResult(Result<AckResponse, AppError>),
    /// Nickname change completed for `user_id`
    NicknameResult {
        user_id: i64,
        result: Result<String, AppError>,
    },
}

impl AppEvent {
    /// Short name for logging
    pub fn name(&self) -> &'static str {
        match self {
            AppEvent::RegisterResult { .. } => "RegisterResult",
            AppEvent::VerifyResult(_) => "VerifyResult",
            AppEvent::VerifyWithPasswordResult(_) => "VerifyWithPasswordResult",
            AppEvent::LoginResult { .. } => "LoginResult",
            AppEvent::ForgotPasswordResult(_) => "ForgotPasswordResult",
            AppEvent::ResetPasswordResult(_) => "ResetPasswordResult",
            AppEvent::NicknameResult { .. } => "NicknameResult",
        }
    }

    pub fn is_ok(&self) -> bool {
        match self {
            AppEvent::RegisterResult { result, .. } => result.is_ok(),
            AppEvent::VerifyResult(result) => result.is_ok(),
            AppEvent::VerifyWithPasswordResult(result) => result.is_ok(),
            AppEvent::LoginResult { result, .. } => result.is_ok(),
            AppEvent::ForgotPasswordResult(result) => result.is_ok(),
            AppEvent::ResetPasswordResult(result) => result.is_ok(),
            AppEvent::NicknameResult { result, .. } => result.is_ok(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_debug_hides_password() {
        let event = AppEvent::LoginResult {
            password: Secret("Hunter2Hunter2".to_string()),
            result: Err(AppError::Unverified { user_id: 5 }),
        };
        let debug = format!("{:?}", event);
        assert!(!debug.contains("Hunter2Hunter2"));
        assert_eq!(event.name(), "LoginResult");
        assert!(!event.is_ok());
    }
}
