//! # Navigation Bar
//!
//! Brand, tab buttons and the session area: login/register when anonymous,
//! balance, name and logout when authenticated.

use crate::app::{App, AppState, Dialog, Tab};
use crate::i18n::Label;
use crate::ui::theme::Theme;
use crate::ui::widgets::icons::{material, size, Icons};

fn tab_icon(tab: Tab) -> &'static str {
    match tab {
        Tab::Home => material::HOME,
        Tab::Profile => material::PERSON,
        Tab::Support => material::SUPPORT,
        Tab::About => material::INFO,
        Tab::Settings => material::SETTINGS,
    }
}

/// Render the navigation bar
pub fn render_nav_bar(ui: &mut egui::Ui, state: &AppState, app: &mut App, theme: &Theme) {
    ui.horizontal(|ui| {
        ui.set_height(40.0);

        ui.label(
            egui::RichText::new("NFTures")
                .size(24.0)
                .strong()
                .color(theme.colors.accent),
        );
        ui.add_space(16.0);

        for &tab in Tab::all() {
            let text = Icons::labeled(tab_icon(tab), state.t(tab.label()));
            if ui.selectable_label(state.active_tab == tab, text).clicked() {
                app.handle_tab_change(tab);
            }
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            match &state.session.current_user {
                Some(user) => {
                    if ui
                        .button(Icons::labeled(material::LOGOUT, state.t(Label::Logout)))
                        .clicked()
                    {
                        app.handle_logout_click();
                    }

                    let name = user.nickname.as_deref().unwrap_or(&user.email);
                    ui.label(egui::RichText::new(name).strong());

                    ui.label(
                        egui::RichText::new(format!("{} ENX", user.balance))
                            .color(theme.colors.accent),
                    );
                    ui.label(Icons::icon_color(material::WALLET, size::SMALL, theme.colors.accent));
                }
                None => {
                    if ui
                        .button(Icons::labeled(material::PERSON_ADD, state.t(Label::Register)))
                        .clicked()
                    {
                        app.open_dialog(Dialog::Register);
                    }
                    if ui
                        .button(Icons::labeled(material::LOGIN, state.t(Label::Login)))
                        .clicked()
                    {
                        app.open_dialog(Dialog::Login);
                    }
                }
            }
        });
    });
}
