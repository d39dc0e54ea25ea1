//! # Navigation Handlers
//!
//! Handlers for tab changes. Every tab is public; protected content is gated
//! inside the tab itself.

use crate::app::state::{AppState, Tab};
use parking_lot::RwLock;
use std::sync::Arc;

/// Handle tab change
///
/// Internal handler function - use [`crate::app::App::handle_tab_change`] instead.
pub(crate) fn handle_tab_change(state: Arc<RwLock<AppState>>, tab: Tab) {
    let mut state = state.write();
    if state.active_tab != tab {
        tracing::debug!(from = ?state.active_tab, to = ?tab, "Tab changed");
        state.active_tab = tab;
    }
}

/// Navigate to next tab, wrapping around
///
/// Internal handler function - use [`crate::app::App::next_tab`] instead.
pub(crate) fn next_tab(state: Arc<RwLock<AppState>>) {
    step_tab(state, 1);
}

/// Navigate to previous tab, wrapping around
///
/// Internal handler function - use [`crate::app::App::previous_tab`] instead.
pub(crate) fn previous_tab(state: Arc<RwLock<AppState>>) {
    step_tab(state, Tab::all().len() - 1);
}

fn step_tab(state: Arc<RwLock<AppState>>, offset: usize) {
    let mut state = match state.try_write() {
        Some(guard) => guard,
        None => {
            tracing::warn!("Skipped tab navigation - state locked");
            return;
        }
    };

    let tabs = Tab::all();
    let current_idx = tabs
        .iter()
        .position(|&t| t == state.active_tab)
        .unwrap_or(0);
    state.active_tab = tabs[(current_idx + offset) % tabs.len()];
}
