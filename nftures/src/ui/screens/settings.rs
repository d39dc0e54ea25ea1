//! # Settings Screen
//!
//! Theme switch and language selection. Changes take effect on the next frame.

use crate::app::{App, AppState};
use crate::i18n::{Label, Locale};
use crate::ui::theme::Theme;
use crate::ui::widgets::icons::{material, size, Icons};

/// Render settings screen
pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut App, theme: &Theme) {
    ui.horizontal(|ui| {
        ui.label(Icons::icon_color(material::SETTINGS, size::MEDIUM, theme.colors.accent));
        ui.heading(state.t(Label::Settings));
    });
    ui.add_space(12.0);

    ui.group(|ui| {
        ui.set_max_width(420.0);

        ui.horizontal(|ui| {
            let icon = if state.dark_mode { material::DARK_MODE } else { material::LIGHT_MODE };
            ui.label(Icons::icon(icon, size::SMALL));
            ui.label(state.t(Label::Theme));

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let mut dark = state.dark_mode;
                let caption = if dark { state.t(Label::Dark) } else { state.t(Label::Light) };
                if ui.checkbox(&mut dark, caption).changed() {
                    app.handle_theme_toggle();
                }
            });
        });

        ui.separator();

        ui.horizontal(|ui| {
            ui.label(Icons::icon(material::LANGUAGE, size::SMALL));
            ui.label(state.t(Label::Language));

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let mut selected = state.locale;
                egui::ComboBox::from_id_salt("language")
                    .selected_text(selected.native_name())
                    .show_ui(ui, |ui| {
                        for &locale in Locale::all() {
                            ui.selectable_value(&mut selected, locale, locale.native_name());
                        }
                    });
                if selected != state.locale {
                    app.handle_locale_change(selected);
                }
            });
        });
    });
}
