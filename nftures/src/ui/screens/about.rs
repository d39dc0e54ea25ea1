//! # About Screen

use crate::app::AppState;
use crate::i18n::Label;
use crate::ui::theme::Theme;

pub fn render(ui: &mut egui::Ui, state: &AppState, theme: &Theme) {
    ui.heading(state.t(Label::About));
    ui.add_space(12.0);
    ui.label(egui::RichText::new(state.t(Label::AboutText)).size(16.0));
    ui.add_space(8.0);
    ui.label(egui::RichText::new(state.t(Label::UploadCost)).color(theme.colors.dim));
}
