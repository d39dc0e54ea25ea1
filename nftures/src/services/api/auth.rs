//! # Authentication Endpoints
//!
//! One function per `action` of the auth endpoint.

use reqwest::StatusCode;
use shared::{
    AckResponse, AuthRequest, ForgotPasswordResponse, NicknameResponse, RegisterResponse,
    UnverifiedResponse, User, UserResponse,
};

use super::client::{decode, ApiClient};
use crate::core::error::{AppError, Result};

/// Register a new account.
#[tracing::instrument(skip(client, password), fields(email = %email))]
pub async fn register(
    client: &ApiClient,
    email: String,
    password: String,
    nickname: Option<String>,
) -> Result<RegisterResponse> {
    tracing::info!("Attempting registration");
    let request = AuthRequest::Register {
        email,
        password,
        nickname,
    };

    let (status, body) = client.post(&request).await?;
    let result = decode::<RegisterResponse>(status, &body);
    log_outcome("register", status, &result);
    result
}

/// Verify an email with the emailed code.
#[tracing::instrument(skip(client, code))]
pub async fn verify(client: &ApiClient, user_id: i64, code: String) -> Result<AckResponse> {
    let request = AuthRequest::Verify { user_id, code };

    let (status, body) = client.post(&request).await?;
    let result = decode::<AckResponse>(status, &body);
    log_outcome("verify", status, &result);
    result
}

/// Verify an email with the account password.
#[tracing::instrument(skip(client, password))]
pub async fn verify_with_password(
    client: &ApiClient,
    user_id: i64,
    password: String,
) -> Result<User> {
    let request = AuthRequest::VerifyWithPassword { user_id, password };

    let (status, body) = client.post(&request).await?;
    let result = decode::<UserResponse>(status, &body).map(|r| r.user);
    log_outcome("verify_with_password", status, &result);
    result
}

/// Login with email and password.
///
/// A 403 means the account exists but its email is unverified; the body
/// carries the `user_id` needed to continue verification.
#[tracing::instrument(skip(client, password), fields(email = %email))]
pub async fn login(client: &ApiClient, email: String, password: String) -> Result<User> {
    tracing::info!("Attempting login");
    let start = std::time::Instant::now();

    let request = AuthRequest::Login { email, password };
    let (status, body) = client.post(&request).await?;

    if status == StatusCode::FORBIDDEN {
        let unverified = serde_json::from_slice::<UnverifiedResponse>(&body)?;
        tracing::info!(
            user_id = unverified.user_id,
            duration_ms = start.elapsed().as_millis(),
            "Login refused, email not verified"
        );
        return Err(AppError::Unverified {
            user_id: unverified.user_id,
        });
    }

    let result = decode::<UserResponse>(status, &body).map(|r| r.user);
    if result.is_ok() {
        tracing::info!(duration_ms = start.elapsed().as_millis(), "Login successful");
    } else {
        log_outcome("login", status, &result);
    }
    result
}

/// Request a password reset code.
#[tracing::instrument(skip(client), fields(email = %email))]
pub async fn forgot_password(client: &ApiClient, email: String) -> Result<ForgotPasswordResponse> {
    let request = AuthRequest::ForgotPassword { email };

    let (status, body) = client.post(&request).await?;
    let result = decode::<ForgotPasswordResponse>(status, &body);
    log_outcome("forgot_password", status, &result);
    result
}

/// Set a new password with the reset code.
#[tracing::instrument(skip(client, code, new_password))]
pub async fn reset_password(
    client: &ApiClient,
    user_id: i64,
    code: String,
    new_password: String,
) -> Result<AckResponse> {
    let request = AuthRequest::ResetPassword {
        user_id,
        code,
        new_password,
    };

    let (status, body) = client.post(&request).await?;
    let result = decode::<AckResponse>(status, &body);
    log_outcome("reset_password", status, &result);
    result
}

/// Change the nickname of an existing user.
#[tracing::instrument(skip(client))]
pub async fn update_nickname(client: &ApiClient, user_id: i64, nickname: String) -> Result<String> {
    let request = AuthRequest::UpdateNickname { user_id, nickname };

    let (status, body) = client.post(&request).await?;
    let result = decode::<NicknameResponse>(status, &body).map(|r| r.nickname);
    log_outcome("update_nickname", status, &result);
    result
}

fn log_outcome<T>(action: &str, status: StatusCode, result: &Result<T>) {
    match result {
        Ok(_) => tracing::debug!(action, status = status.as_u16(), "Request succeeded"),
        Err(e) => tracing::warn!(action, status = status.as_u16(), error = %e, "Request failed"),
    }
}
