//! # Auth Endpoint Client Module
//!
//! HTTP client for the remote auth endpoint.
//!
//! ## Module Structure
//!
//! ```text
//! api/
//! ├── mod.rs      - Module exports and documentation
//! ├── client.rs   - ApiClient struct, request posting and response decoding
//! └── auth.rs     - One function per action (register, verify, login, ...)
//! ```

pub mod auth;
pub mod client;

pub use client::ApiClient;
