//! # Notifications Widget
//!
//! Toasts via egui-notify, fed from `AppState::pending_notifications`.

use std::time::Duration;

use egui_notify::Toasts;

use crate::app::{Notification, NotificationKind};

const TOAST_DURATION: Duration = Duration::from_secs(5);

/// Notification manager for the application
pub struct NotificationManager {
    pub toasts: Toasts,
}

impl Default for NotificationManager {
    fn default() -> Self {
        Self {
            toasts: Toasts::default(),
        }
    }
}

impl NotificationManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Turn queued notifications into toasts
    pub fn push_all(&mut self, notifications: Vec<Notification>) {
        for notification in notifications {
            let toast = match notification.kind {
                NotificationKind::Success => self.toasts.success(notification.message),
                NotificationKind::Error => self.toasts.error(notification.message),
                NotificationKind::Info => self.toasts.info(notification.message),
            };
            toast.duration(Some(TOAST_DURATION));
        }
    }

    /// Render notifications in the UI context
    pub fn show(&mut self, ctx: &egui::Context) {
        self.toasts.show(ctx);
    }
}
