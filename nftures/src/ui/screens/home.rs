//! # Home Screen
//!
//! Listing grid and the upload entry point.

use crate::app::{App, AppState, Dialog};
use crate::i18n::Label;
use crate::ui::theme::Theme;
use crate::ui::widgets::icons::{material, Icons};
use crate::ui::widgets::nft_card::{self, CARD_WIDTH};

/// Render home screen
pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut App, theme: &Theme) {
    ui.horizontal(|ui| {
        ui.heading(state.t(Label::Home));
        if state.is_authenticated() {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui
                    .button(Icons::labeled(material::UPLOAD, state.t(Label::UploadNft)))
                    .clicked()
                {
                    app.open_dialog(Dialog::UploadNft);
                }
            });
        }
    });
    ui.add_space(12.0);

    let listings = state.marketplace.listings();
    if listings.is_empty() {
        ui.vertical_centered(|ui| {
            ui.add_space(60.0);
            ui.label(Icons::icon_color(material::IMAGE, 48.0, theme.colors.dim));
            ui.label(egui::RichText::new(state.t(Label::NoNfts)).color(theme.colors.dim));
        });
        return;
    }

    let can_buy = state.is_authenticated();
    egui::ScrollArea::vertical().show(ui, |ui| {
        ui.horizontal_wrapped(|ui| {
            ui.set_max_width(ui.available_width().max(CARD_WIDTH));
            for listing in listings {
                nft_card::render_nft_card(ui, listing, can_buy, state.locale, app, theme);
            }
        });
    });
}
