//! # Form Components
//!
//! Reusable form elements. Text fields edit a copy of the snapshot value and
//! write it back into [`Forms`] only when it changed.

use crate::app::{App, Forms};
use crate::ui::theme::Theme;

/// Render a labeled single-line text field bound to a form buffer.
///
/// `slot` selects the buffer inside [`Forms`] that receives the edit.
pub fn text_field(
    ui: &mut egui::Ui,
    app: &mut App,
    label: &str,
    current: &str,
    password: bool,
    slot: impl FnOnce(&mut Forms) -> &mut String,
) -> egui::Response {
    ui.label(label);
    let mut value = current.to_string();
    let response = ui.add(
        egui::TextEdit::singleline(&mut value)
            .password(password)
            .desired_width(f32::INFINITY),
    );

    if response.changed() {
        let mut state = app.state.write();
        *slot(&mut state.forms) = value;
    }
    response
}

/// Multi-line variant of [`text_field`]
pub fn text_area(
    ui: &mut egui::Ui,
    app: &mut App,
    label: &str,
    current: &str,
    slot: impl FnOnce(&mut Forms) -> &mut String,
) -> egui::Response {
    ui.label(label);
    let mut value = current.to_string();
    let response = ui.add(
        egui::TextEdit::multiline(&mut value)
            .desired_rows(4)
            .desired_width(f32::INFINITY),
    );

    if response.changed() {
        let mut state = app.state.write();
        *slot(&mut state.forms) = value;
    }
    response
}

/// True when Enter was pressed while `response` had focus
pub fn submitted(ui: &egui::Ui, response: &egui::Response) -> bool {
    response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter))
}

/// Render an accent-filled button with optional icon
pub fn render_button(
    ui: &mut egui::Ui,
    text: &str,
    icon: Option<&str>,
    theme: &Theme,
    enabled: bool,
) -> egui::Response {
    let button_text = match icon {
        Some(icon) => format!("{} {}", icon, text),
        None => text.to_string(),
    };

    let button = egui::Button::new(egui::RichText::new(button_text).color(egui::Color32::WHITE))
        .fill(theme.colors.accent)
        .min_size(egui::vec2(120.0, 32.0));

    ui.add_enabled(enabled, button)
}

/// Render a form heading
pub fn render_form_heading(ui: &mut egui::Ui, text: &str, theme: &Theme) {
    ui.label(
        egui::RichText::new(text)
            .size(22.0)
            .strong()
            .color(theme.colors.accent),
    );
    ui.add_space(12.0);
}

/// Render a help/hint text
pub fn render_hint(ui: &mut egui::Ui, hint: &str, theme: &Theme) {
    ui.label(egui::RichText::new(hint).small().color(theme.colors.dim));
}
