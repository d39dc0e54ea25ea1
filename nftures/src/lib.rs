//! # NFTures - Library Root
//!
//! Native desktop client for the NFTures art marketplace. This library crate
//! contains all modules used by the binary crate (`main.rs`).
//!
//! ## Features
//!
//! - **Accounts**: register, email verification (code or password), login,
//!   password reset and nickname change against a single auth endpoint
//! - **Marketplace**: local listing grid, NFT upload for a 15 eneftix fee,
//!   balance top-up at 10 currency units per eneftix
//! - **Localization**: Russian and English, switchable at runtime
//! - **Theme**: light and dark
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │              nftures (this crate)                      │
//! ├────────────────────────────────────────────────────────┤
//! │  egui / eframe   - Immediate-mode GUI                  │
//! │  egui-notify     - Toasts                              │
//! │  tokio           - Async runtime                       │
//! │  reqwest         - HTTP client                         │
//! │  tracing         - Structured logging                  │
//! └────────────────────────────────────────────────────────┘
//!          │
//!          │ HTTPS POST {action, ...}
//!          ▼
//! ┌─────────────────┐
//! │  Auth endpoint  │
//! └─────────────────┘
//! ```
//!
//! ## Module Structure
//!
//! ```text
//! main.rs
//!   │
//!   ├── config (environment configuration)
//!   ├── debug (logging)
//!   ├── app (state, events, handlers)
//!   │   └── services::api (auth endpoint client)
//!   ├── i18n (string tables)
//!   └── ui (rendering)
//!       ├── screens::* (home, profile, support, about, settings, dialogs)
//!       ├── widgets::* (nav bar, forms, cards, toasts)
//!       └── theme (light/dark palettes)
//! ```
//!
//! ## Core Concepts
//!
//! The main thread renders and handles input. Each auth request runs as a
//! tokio task that sends its result back as an [`AppEvent`] through an
//! unbounded channel; [`App::on_tick`] applies results every frame. State
//! lives in `Arc<RwLock<AppState>>` and locks are held briefly.
//!
//! ## Usage
//!
//! ```bash
//! cargo run --bin nftures
//! ```
//!
//! ```rust,no_run
//! use nftures::{App, AppConfig};
//!
//! # let rt = tokio::runtime::Runtime::new().unwrap();
//! # let _guard = rt.enter();
//! let app = App::new(&AppConfig::default());
//! assert!(!app.state.read().is_authenticated());
//! ```

pub mod app;
pub mod config;
pub mod core;
pub mod debug;
pub mod i18n;
pub mod services;
pub mod ui;
pub mod utils;

pub use app::{App, AppEvent, AppState, Tab};
pub use config::AppConfig;
pub use core::{AppError, Result};
