//! # Profile Screen
//!
//! User card with balance and nickname, plus the top-up form.

use crate::app::{App, AppState, Dialog};
use crate::i18n::Label;
use crate::ui::theme::Theme;
use crate::ui::widgets::forms;
use crate::ui::widgets::icons::{material, size, Icons};

/// Render profile screen
pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut App, theme: &Theme) {
    ui.heading(state.t(Label::Profile));
    ui.add_space(12.0);

    let Some(user) = &state.session.current_user else {
        ui.vertical_centered(|ui| {
            ui.add_space(40.0);
            ui.label(state.t(Label::LoginRequired));
            ui.add_space(8.0);
            if forms::render_button(ui, state.t(Label::Login), Some(material::LOGIN), theme, true)
                .clicked()
            {
                app.open_dialog(Dialog::Login);
            }
        });
        return;
    };

    ui.group(|ui| {
        ui.horizontal(|ui| {
            ui.label(Icons::icon_color(material::PERSON, size::LARGE, theme.colors.accent));
            ui.vertical(|ui| {
                let name = user.nickname.as_deref().unwrap_or("-");
                ui.label(egui::RichText::new(name).strong().size(18.0));
                ui.label(egui::RichText::new(&user.email).color(theme.colors.dim));
            });
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui
                    .button(Icons::labeled(material::EDIT, state.t(Label::UpdateNickname)))
                    .clicked()
                {
                    app.open_dialog(Dialog::UpdateNickname);
                }
            });
        });
        ui.add_space(8.0);
        ui.horizontal(|ui| {
            ui.label(format!("{}:", state.t(Label::Balance)));
            ui.label(
                egui::RichText::new(format!("{} ENX", user.balance))
                    .strong()
                    .color(theme.colors.accent),
            );
        });
    });

    ui.add_space(16.0);

    ui.group(|ui| {
        ui.set_max_width(420.0);
        forms::render_form_heading(ui, state.t(Label::TopUp), theme);

        let card = &state.forms.top_up;
        forms::text_field(ui, app, state.t(Label::CardNumber), &card.card_number, false, |f| {
            &mut f.top_up.card_number
        });
        let amount = forms::text_field(ui, app, state.t(Label::Amount), &card.amount, false, |f| {
            &mut f.top_up.amount
        });

        if let Ok(amount) = card.amount.trim().parse::<u64>() {
            forms::render_hint(
                ui,
                &format!("= {} ENX", crate::app::eneftix_for(amount)),
                theme,
            );
        }
        ui.add_space(8.0);

        let clicked =
            forms::render_button(ui, state.t(Label::TopUp), Some(material::WALLET), theme, true)
                .clicked();
        if clicked || forms::submitted(ui, &amount) {
            app.handle_top_up_submit();
        }
        ui.add_space(4.0);
        forms::render_hint(ui, state.t(Label::PaymentInfo), theme);
    });
}
