//! # Application Orchestrator
//!
//! The main [`App`] struct coordinates the UI rendering layer, spawned
//! network requests and the shared [`AppState`].
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Main Thread (egui)                       │
//! │  ┌──────────────────────────────────────────────────────┐   │
//! │  │  App                                                 │   │
//! │  │  - on_tick() - called every frame                    │   │
//! │  │  - handle_*() - user actions from the UI             │   │
//! │  └────────────┬─────────────────────────────────────────┘   │
//! │  ┌────────────▼─────────────────────────────────────────┐   │
//! │  │  State: Arc<RwLock<AppState>>                        │   │
//! │  └──────────────────────────────────────────────────────┘   │
//! └───────────────────────┬─────────────────────────────────────┘
//!                         │ async_channel (unbounded)
//! ┌───────────────────────▼─────────────────────────────────────┐
//! │              Tokio tasks                                    │
//! │  - one task per auth request, result sent as AppEvent       │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Marketplace actions (top-up, upload, buy, support) are local and update
//! the state synchronously; only the auth flow goes through the network.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use nftures::app::App;
//! use nftures::config::AppConfig;
//!
//! # let rt = tokio::runtime::Runtime::new().unwrap();
//! # let _guard = rt.enter();
//! let mut app = App::new(&AppConfig::default());
//!
//! // In the egui update loop:
//! app.on_tick();
//! app.handle_login_submit();
//! ```

mod event_handler;
mod events;
mod handlers;
mod state;

pub use events::{AppEvent, Secret};
pub use state::*;

use std::sync::Arc;

use async_channel::{unbounded, Receiver, Sender};
use parking_lot::RwLock;

use crate::config::AppConfig;
use crate::core::service::ApiService;
use crate::i18n::Locale;
use crate::services::api::ApiClient;

/// Main application orchestrator.
///
/// UI code calls the `handle_*` methods; each one reads the relevant form
/// buffers from [`AppState`], so the UI only ever edits text fields and
/// triggers actions.
pub struct App {
    /// Shared application state. Hold locks briefly.
    pub state: Arc<RwLock<AppState>>,

    /// Results of spawned requests, polled in `on_tick()` with `try_recv()`
    pub event_rx: Receiver<AppEvent>,

    /// Cloned into every spawned request
    event_tx: Sender<AppEvent>,
}

impl App {
    /// Create the application with the HTTP client built from `config`.
    pub fn new(config: &AppConfig) -> Self {
        let api_client: Arc<dyn ApiService> = Arc::new(ApiClient::new(config));
        tracing::info!(api_url = %config.api_url, "API client created");
        Self::with_api(api_client, config)
    }

    /// Create the application around any [`ApiService`] implementation.
    pub fn with_api(api_client: Arc<dyn ApiService>, config: &AppConfig) -> Self {
        let state = AppState::new(Some(api_client), config.insecure_echo_codes);
        let (event_tx, event_rx) = unbounded();

        tracing::info!(
            insecure_echo_codes = config.insecure_echo_codes,
            "App state initialized"
        );

        App {
            state: Arc::new(RwLock::new(state)),
            event_rx,
            event_tx,
        }
    }

    /// Called every frame to apply finished requests.
    ///
    /// Non-blocking. Returns the number of events processed.
    pub fn on_tick(&mut self) -> usize {
        let mut events_processed = 0;
        while let Ok(event) = self.event_rx.try_recv() {
            self.handle_event(event);
            events_processed += 1;
        }

        if events_processed > 0 {
            tracing::debug!(events_processed, "on_tick: Processed events");
        }
        events_processed
    }

    /// Apply one request result to the state.
    pub fn handle_event(&mut self, event: AppEvent) {
        use event_handler::AppEventHandler;
        self.handle_event_impl(event);
    }

    /// Get a sender for delivering results into `on_tick`.
    pub fn event_tx(&self) -> Sender<AppEvent> {
        self.event_tx.clone()
    }

    // Navigation

    pub fn handle_tab_change(&mut self, tab: Tab) {
        handlers::navigation::handle_tab_change(self.state.clone(), tab);
    }

    pub fn next_tab(&mut self) {
        handlers::navigation::next_tab(self.state.clone());
    }

    pub fn previous_tab(&mut self) {
        handlers::navigation::previous_tab(self.state.clone());
    }

    pub fn open_dialog(&mut self, dialog: Dialog) {
        handlers::auth::open_dialog(self.state.clone(), dialog);
    }

    pub fn close_dialog(&mut self) {
        handlers::auth::close_dialog(self.state.clone());
    }

    // Auth flow

    pub fn handle_register_submit(&mut self) {
        handlers::auth::handle_register_submit(self.state.clone(), self.event_tx.clone());
    }

    pub fn handle_verify_submit(&mut self) {
        handlers::auth::handle_verify_submit(self.state.clone(), self.event_tx.clone());
    }

    pub fn handle_switch_verify_mode(&mut self) {
        handlers::auth::handle_switch_verify_mode(self.state.clone());
    }

    pub fn handle_login_submit(&mut self) {
        handlers::auth::handle_login_submit(self.state.clone(), self.event_tx.clone());
    }

    pub fn handle_forgot_password_submit(&mut self) {
        handlers::auth::handle_forgot_password_submit(self.state.clone(), self.event_tx.clone());
    }

    pub fn handle_reset_password_submit(&mut self) {
        handlers::auth::handle_reset_password_submit(self.state.clone(), self.event_tx.clone());
    }

    pub fn handle_nickname_submit(&mut self) {
        handlers::auth::handle_nickname_submit(self.state.clone(), self.event_tx.clone());
    }

    pub fn handle_logout_click(&mut self) {
        handlers::auth::handle_logout_click(self.state.clone());
    }

    // Marketplace

    pub fn handle_top_up_submit(&mut self) {
        handlers::marketplace::handle_top_up_submit(self.state.clone());
    }

    pub fn handle_upload_submit(&mut self) {
        handlers::marketplace::handle_upload_submit(self.state.clone());
    }

    pub fn handle_buy_click(&mut self, listing_id: u64) {
        handlers::marketplace::handle_buy_click(self.state.clone(), listing_id);
    }

    pub fn handle_support_submit(&mut self) {
        handlers::marketplace::handle_support_submit(self.state.clone());
    }

    // Settings

    pub fn handle_theme_toggle(&mut self) {
        handlers::settings::handle_theme_toggle(self.state.clone());
    }

    pub fn handle_locale_change(&mut self, locale: Locale) {
        handlers::settings::handle_locale_change(self.state.clone(), locale);
    }
}
