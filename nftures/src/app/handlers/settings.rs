//! # Settings Handlers
//!
//! Theme and language switches. Both are plain state changes applied on the
//! next frame; nothing is persisted.

use crate::app::AppState;
use crate::i18n::Locale;
use parking_lot::RwLock;
use std::sync::Arc;

/// Handle theme switch
pub(crate) fn handle_theme_toggle(state: Arc<RwLock<AppState>>) {
    let mut app_state = state.write();
    app_state.dark_mode = !app_state.dark_mode;
    tracing::info!(dark_mode = app_state.dark_mode, "Theme switched");
}

/// Handle language selection
pub(crate) fn handle_locale_change(state: Arc<RwLock<AppState>>, locale: Locale) {
    let mut app_state = state.write();
    if app_state.locale != locale {
        app_state.locale = locale;
        tracing::info!(?locale, "Language switched");
    }
}
