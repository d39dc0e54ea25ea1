//! # Core Abstractions
//!
//! Core traits and error types used throughout the client.
//!
//! ## Modules
//!
//! - **[`error`]**: Application error types (`AppError`, `Result<T>`)
//! - **[`service`]**: Service trait for the auth endpoint (`ApiService`)
//!
//! ## Dependency Injection
//!
//! ```rust,ignore
//! use nftures::core::service::ApiService;
//!
//! // In production: the reqwest-backed client
//! let api: Arc<dyn ApiService> = Arc::new(nftures::services::api::ApiClient::new(&config));
//!
//! // In tests: a scripted mock
//! let api: Arc<dyn ApiService> = Arc::new(MockApi::default());
//! ```

pub mod error;
pub mod service;

pub use error::{AppError, Result};
pub use service::ApiService;
