//! # Utility Functions
//!
//! Shared utility functions used across the client.
//!
//! ## Modules
//!
//! - **[`validation`]**: Typed form inputs and their boundary validation
//!
//! ## Related Modules
//!
//! - [`crate::core`]: Core abstractions and error types

pub mod validation;
