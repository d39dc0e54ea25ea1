//! # Services Module
//!
//! External service integrations for the NFTures client.
//!
//! ```text
//! ┌────────────────────────────────────┐
//! │            NFTures client          │
//! │   ┌──────────────────────────┐     │
//! │   │  ApiClient (api/)        │     │
//! │   └────────────┬─────────────┘     │
//! └────────────────┼───────────────────┘
//!                  │ HTTP POST, JSON tagged by `action`
//!                  ▼
//!        ┌─────────────────────┐
//!        │  Auth endpoint      │
//!        │  register / verify  │
//!        │  login / reset ...  │
//!        └─────────────────────┘
//! ```
//!
//! Listings, top-up, purchases and support messages never reach this layer;
//! they are simulated in [`crate::app`].
//!
//! ## Error Handling
//!
//! Every call returns [`crate::core::Result`]:
//! - transport and parse failures become `AppError::Network`
//! - `{error}` bodies become `AppError::Api` with the server text
//! - `login` 403 becomes `AppError::Unverified { user_id }`
//!
//! ## Thread Safety
//!
//! `ApiClient` wraps `reqwest::Client` and is shared behind `Arc<dyn ApiService>`.

pub mod api;
