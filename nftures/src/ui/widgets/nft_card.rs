//! # NFT Card Widget
//!
//! Card for one marketplace listing: image, title, description, price and a
//! buy button for logged-in users.

use crate::app::{App, NftListing};
use crate::i18n::{Label, Locale};
use crate::ui::theme::Theme;
use crate::ui::widgets::icons::{material, Icons};

pub const CARD_WIDTH: f32 = 240.0;
const IMAGE_HEIGHT: f32 = 180.0;

/// Render listing card
pub fn render_nft_card(
    ui: &mut egui::Ui,
    listing: &NftListing,
    can_buy: bool,
    locale: Locale,
    app: &mut App,
    theme: &Theme,
) {
    egui::Frame::group(ui.style())
        .fill(theme.colors.surface)
        .show(ui, |ui| {
            ui.set_width(CARD_WIDTH);
            ui.vertical(|ui| {
                ui.add(
                    egui::Image::new(listing.image_url.as_str())
                        .fit_to_exact_size(egui::vec2(CARD_WIDTH, IMAGE_HEIGHT))
                        .corner_radius(6.0),
                );
                ui.add_space(6.0);

                ui.label(egui::RichText::new(&listing.title).strong().size(16.0));
                if !listing.description.is_empty() {
                    ui.label(egui::RichText::new(&listing.description).color(theme.colors.dim));
                }

                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new(format!(
                            "{}: {} ENX",
                            crate::i18n::t(locale, Label::Price),
                            listing.price
                        ))
                        .color(theme.colors.accent),
                    );

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let text = Icons::labeled(material::CART, crate::i18n::t(locale, Label::Buy));
                        if ui.add_enabled(can_buy, egui::Button::new(text)).clicked() {
                            app.handle_buy_click(listing.id);
                        }
                    });
                });
            });
        });
}
