//! # Common Error Types
//!
//! Consolidated error handling for the NFTures client.
//!
//! ## Error Categories
//!
//! Errors are categorized by where they originate:
//!
//! - **Network**: transport or parse failure talking to the auth endpoint. The
//!   details are logged, the user only sees a generic localized message.
//! - **Api**: the endpoint answered with `{ "error": "..." }`. Shown verbatim.
//! - **Unverified**: `login` answered 403, the account needs email verification.
//! - **Validation**: typed input rejected before anything was dispatched.
//! - **NotAuthenticated** / **InsufficientBalance** / **State**: local guards.
//!
//! ## Usage Pattern
//!
//! ```rust,no_run
//! use nftures::core::error::{AppError, Result};
//!
//! fn require_login(logged_in: bool) -> Result<()> {
//!     if !logged_in {
//!         return Err(AppError::NotAuthenticated);
//!     }
//!     Ok(())
//! }
//! ```

use thiserror::Error;

use crate::utils::validation::ValidationError;

/// Application-wide error type.
///
/// No variant is fatal to the session: every handler that produces one leaves
/// the prior state intact and surfaces a notification instead.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AppError {
    /// Transport or response-parse failure.
    ///
    /// Covers connection refused, timeouts, DNS errors and bodies that are not
    /// the JSON we expected.
    #[error("Network error: {0}")]
    Network(String),

    /// Application-level failure reported by the server in `{error}`.
    #[error("{0}")]
    Api(String),

    /// `login` was refused with 403 because the email is not verified yet.
    #[error("Email not verified (user {user_id})")]
    Unverified { user_id: i64 },

    /// Boundary validation of a typed input failed.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// A protected action was attempted without a logged-in user.
    #[error("Login required")]
    NotAuthenticated,

    /// Upload guard: the balance does not cover the listing fee.
    #[error("Not enough eneftix: have {balance}, need {required}")]
    InsufficientBalance { balance: u64, required: u64 },

    /// Invalid state transition, e.g. verifying without a pending registration.
    #[error("State error: {0}")]
    State(String),
}

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Network(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Network(format!("Failed to parse response: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_displays_server_message_verbatim() {
        let err = AppError::Api("Nickname already taken".to_string());
        assert_eq!(err.to_string(), "Nickname already taken");
    }

    #[test]
    fn test_validation_error_converts() {
        let err: AppError = ValidationError::EmailRequired.into();
        assert!(matches!(err, AppError::Validation(ValidationError::EmailRequired)));
    }

    #[test]
    fn test_parse_error_maps_to_network() {
        let parse_err = serde_json::from_str::<serde_json::Value>("<html>").unwrap_err();
        let err: AppError = parse_err.into();
        assert!(matches!(err, AppError::Network(_)));
    }
}
