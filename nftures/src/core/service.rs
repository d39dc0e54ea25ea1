//! # Service Traits
//!
//! Traits for dependency injection, enabling handler tests without a live endpoint.

use async_trait::async_trait;
use shared::{AckResponse, ForgotPasswordResponse, RegisterResponse, User};

use crate::core::error::Result;

/// Operations of the remote auth endpoint.
///
/// [`crate::services::api::ApiClient`] is the production implementation; tests
/// substitute a scripted mock.
#[async_trait]
pub trait ApiService: Send + Sync {
    /// Register a new account. The nickname is optional.
    async fn register(
        &self,
        email: String,
        password: String,
        nickname: Option<String>,
    ) -> Result<RegisterResponse>;

    /// Confirm an email with the code sent at registration
    async fn verify(&self, user_id: i64, code: String) -> Result<AckResponse>;

    /// Confirm an email with the account password and receive the user
    async fn verify_with_password(&self, user_id: i64, password: String) -> Result<User>;

    /// Login with email and password.
    ///
    /// Returns [`crate::core::AppError::Unverified`] when the server answers 403.
    async fn login(&self, email: String, password: String) -> Result<User>;

    /// Request a password reset code
    async fn forgot_password(&self, email: String) -> Result<ForgotPasswordResponse>;

    /// Set a new password using the reset code
    async fn reset_password(
        &self,
        user_id: i64,
        code: String,
        new_password: String,
    ) -> Result<AckResponse>;

    /// Change the nickname; returns the nickname the server stored
    async fn update_nickname(&self, user_id: i64, nickname: String) -> Result<String>;
}
