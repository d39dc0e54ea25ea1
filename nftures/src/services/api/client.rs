//! # API Client
//!
//! HTTP client for the single auth endpoint.

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use shared::{AckResponse, AuthRequest, ErrorResponse, ForgotPasswordResponse, RegisterResponse, User};

use crate::config::AppConfig;
use crate::core::error::{AppError, Result};
use crate::core::service::ApiService;

/// HTTP client for communicating with the auth endpoint.
///
/// Every action is a `POST` of an [`AuthRequest`] to the same URL. The client
/// sends no auth header; the request body is the only payload.
pub struct ApiClient {
    pub(crate) client: Client,
    api_url: String,
}

impl ApiClient {
    /// Create a new API client from configuration.
    ///
    /// The request timeout comes from `config.http_timeout`.
    pub fn new(config: &AppConfig) -> Self {
        let client = Client::builder()
            .timeout(config.http_timeout)
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!(error = %e, "Falling back to default HTTP client");
                Client::new()
            });

        Self {
            client,
            api_url: config.api_url.clone(),
        }
    }

    /// Endpoint every action is posted to.
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Post one action and return the raw status and body.
    pub(crate) async fn post(&self, request: &AuthRequest) -> Result<(StatusCode, Vec<u8>)> {
        let response = self
            .client
            .post(&self.api_url)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(action = request.action(), error = %e, "Network error");
                AppError::Network(e.to_string())
            })?;

        let status = response.status();
        let body = response.bytes().await.map_err(|e| {
            tracing::error!(action = request.action(), error = %e, "Failed to read response body");
            AppError::Network(e.to_string())
        })?;

        Ok((status, body.to_vec()))
    }
}

/// Decode a response: 2xx parses as `T`, anything else as `{error}`.
pub(crate) fn decode<T: DeserializeOwned>(status: StatusCode, body: &[u8]) -> Result<T> {
    if status.is_success() {
        return serde_json::from_slice::<T>(body).map_err(AppError::from);
    }

    match serde_json::from_slice::<ErrorResponse>(body) {
        Ok(error) => Err(AppError::Api(error.error)),
        Err(e) => Err(AppError::Network(format!(
            "Unexpected {} response: {}",
            status.as_u16(),
            e
        ))),
    }
}

#[async_trait::async_trait]
impl ApiService for ApiClient {
    async fn register(
        &self,
        email: String,
        password: String,
        nickname: Option<String>,
    ) -> Result<RegisterResponse> {
        crate::services::api::auth::register(self, email, password, nickname).await
    }

    async fn verify(&self, user_id: i64, code: String) -> Result<AckResponse> {
        crate::services::api::auth::verify(self, user_id, code).await
    }

    async fn verify_with_password(&self, user_id: i64, password: String) -> Result<User> {
        crate::services::api::auth::verify_with_password(self, user_id, password).await
    }

    async fn login(&self, email: String, password: String) -> Result<User> {
        crate::services::api::auth::login(self, email, password).await
    }

    async fn forgot_password(&self, email: String) -> Result<ForgotPasswordResponse> {
        crate::services::api::auth::forgot_password(self, email).await
    }

    async fn reset_password(
        &self,
        user_id: i64,
        code: String,
        new_password: String,
    ) -> Result<AckResponse> {
        crate::services::api::auth::reset_password(self, user_id, code, new_password).await
    }

    async fn update_nickname(&self, user_id: i64, nickname: String) -> Result<String> {
        crate::services::api::auth::update_nickname(self, user_id, nickname).await
    }
}
