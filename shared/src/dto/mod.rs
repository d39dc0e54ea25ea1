//! # Data Transfer Objects (DTOs)
//!
//! All data structures exchanged with the remote auth endpoint.
//!
//! ## Module Organization
//!
//! - [`auth`] - Registration, verification, login, password reset and nickname DTOs
//!
//! ## Example JSON Communication
//!
//! ```text
//! POST <api url>
//! Content-Type: application/json
//!
//! { "action": "register", "email": "alice@example.com", "password": "Secret123", "nickname": null }
//! ```
//!
//! ```text
//! HTTP/1.1 200 OK
//! Content-Type: application/json
//!
//! {
//!   "success": true,
//!   "user_id": 7,
//!   "verification_code": "482913",
//!   "message": "Registration successful. Verification code sent to email."
//! }
//! ```
//!
//! ```text
//! HTTP/1.1 403 Forbidden
//! Content-Type: application/json
//!
//! { "error": "Email not verified", "user_id": 7 }
//! ```

pub mod auth;

pub use auth::*;
