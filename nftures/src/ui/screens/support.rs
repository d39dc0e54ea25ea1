//! # Support Screen

use crate::app::{App, AppState};
use crate::i18n::Label;
use crate::ui::theme::Theme;
use crate::ui::widgets::forms;
use crate::ui::widgets::icons::material;

/// Render support screen
pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut App, theme: &Theme) {
    ui.heading(state.t(Label::Support));
    ui.add_space(12.0);

    ui.group(|ui| {
        ui.set_max_width(520.0);
        forms::render_form_heading(ui, state.t(Label::ContactSupport), theme);
        forms::render_hint(ui, state.t(Label::ContactSupportHint), theme);
        ui.add_space(8.0);

        forms::text_area(ui, app, state.t(Label::Message), &state.forms.support_message, |f| {
            &mut f.support_message
        });
        ui.add_space(8.0);

        let logged_in = state.is_authenticated();
        if forms::render_button(ui, state.t(Label::Send), Some(material::SEND), theme, logged_in)
            .clicked()
        {
            app.handle_support_submit();
        }
        if !logged_in {
            forms::render_hint(ui, state.t(Label::LoginRequired), theme);
        }
    });
}
