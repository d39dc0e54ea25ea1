//! # GUI Rendering
//!
//! Per-frame rendering with egui: navigation bar, the active tab, the open
//! dialog and queued toasts.

pub mod screens;
pub mod theme;
pub mod widgets;

use crate::app::{App, Tab};
use theme::Theme;
use widgets::notifications::NotificationManager;

/// Main render function - called every frame by egui
pub fn render(ctx: &egui::Context, app: &mut App, notifications: &mut NotificationManager) {
    app.on_tick();

    // Snapshot the state; rendering never holds the lock
    let state = match app.state.try_read() {
        Some(guard) => guard.clone(),
        None => {
            ctx.request_repaint();
            return;
        }
    };

    Theme::apply(ctx, state.dark_mode);
    let theme = Theme::for_mode(state.dark_mode);

    // Ctrl+Tab / Ctrl+Shift+Tab cycle tabs
    if ctx.input(|i| i.modifiers.ctrl && i.key_pressed(egui::Key::Tab)) {
        if ctx.input(|i| i.modifiers.shift) {
            app.previous_tab();
        } else {
            app.next_tab();
        }
    }

    egui::TopBottomPanel::top("nav_bar").show(ctx, |ui| {
        widgets::nav_bar::render_nav_bar(ui, &state, app, &theme);
    });

    egui::CentralPanel::default().show(ctx, |ui| match state.active_tab {
        Tab::Home => screens::home::render(ui, &state, app, &theme),
        Tab::Profile => screens::profile::render(ui, &state, app, &theme),
        Tab::Support => screens::support::render(ui, &state, app, &theme),
        Tab::About => screens::about::render(ui, &state, &theme),
        Tab::Settings => screens::settings::render(ui, &state, app, &theme),
    });

    screens::dialogs::render(ctx, &state, app, &theme);

    let pending = app.state.write().drain_notifications();
    if !pending.is_empty() {
        notifications.push_all(pending);
    }
    notifications.show(ctx);

    // Keep polling while a request is outstanding
    if state.in_flight.is_some() {
        ctx.request_repaint_after(std::time::Duration::from_millis(100));
    }
}
