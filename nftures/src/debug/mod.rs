//! # Logging
//!
//! Structured `tracing` output to a daily rotating file plus stderr.
//!
//! ## Configuration
//!
//! - `RUST_LOG`: filter directive (default `nftures=info,warn`)
//! - `NFTURES_LOG_DIR`: log directory (default `logs`)
//!
//! ## Usage
//!
//! ```rust,no_run
//! let config = nftures::config::AppConfig::default();
//! nftures::debug::init(&config);
//!
//! tracing::info!(listing_id = 3, "NFT listed");
//! ```

pub mod logger;

pub use logger::init;
