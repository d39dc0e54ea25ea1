//! # Shared Data Transfer Objects Library
//!
//! This library defines the contract between the NFTures client and the remote
//! authentication endpoint. All DTOs use JSON serialization via `serde`.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for API communication
//!   - **[`dto::auth`]**: Request union and response bodies of the auth endpoint
//!
//! ## Wire Format
//!
//! The endpoint accepts a single `POST` with a JSON body tagged by `action`:
//!
//! ```text
//! POST <api url>
//! Content-Type: application/json
//!
//! { "action": "login", "email": "alice@example.com", "password": "secret" }
//! ```
//!
//! - Field names use **snake_case** in Rust and in JSON
//! - `nickname` on `register` is sent as `null` when absent
//! - Failure bodies are always `{ "error": "..." }`
//!
//! ## Usage in the Client
//!
//! ```rust,ignore
//! use shared::dto::auth::{AuthRequest, UserResponse};
//!
//! # async fn run() -> Result<(), reqwest::Error> {
//! let request = AuthRequest::Login {
//!     email: "alice@example.com".to_string(),
//!     password: "secret".to_string(),
//! };
//!
//! let response: UserResponse = reqwest::Client::new()
//!     .post("https://auth.example.com")
//!     .json(&request)
//!     .send()
//!     .await?
//!     .json()
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod dto;

// Re-export commonly used types for convenience
pub use dto::*;
