//! # Icons Helper Module
//!
//! Material icon glyphs rendered through the font registered by
//! [`initialize_material_icons`].

use egui::{Color32, RichText};

/// Icon size constants
pub mod size {
    pub const SMALL: f32 = 16.0;
    pub const MEDIUM: f32 = 22.0;
    pub const LARGE: f32 = 32.0;
}

/// Material icon codepoints
pub mod material {
    pub const HOME: &str = "\u{e88a}";
    pub const PERSON: &str = "\u{e7fd}";
    pub const PERSON_ADD: &str = "\u{e7fe}";
    pub const SUPPORT: &str = "\u{f0e2}";
    pub const INFO: &str = "\u{e88e}";
    pub const SETTINGS: &str = "\u{e8b8}";
    pub const LOGIN: &str = "\u{ea77}";
    pub const LOGOUT: &str = "\u{e9ba}";
    pub const UPLOAD: &str = "\u{e2c6}";
    pub const WALLET: &str = "\u{e850}";
    pub const SEND: &str = "\u{e163}";
    pub const CART: &str = "\u{e8cc}";
    pub const LIGHT_MODE: &str = "\u{e518}";
    pub const DARK_MODE: &str = "\u{e51c}";
    pub const LANGUAGE: &str = "\u{e894}";
    pub const EDIT: &str = "\u{e3c9}";
    pub const IMAGE: &str = "\u{e3f4}";
}

/// Icon helper functions
pub struct Icons;

impl Icons {
    pub fn icon(icon: &str, size: f32) -> RichText {
        RichText::new(icon).size(size)
    }

    pub fn icon_color(icon: &str, size: f32, color: Color32) -> RichText {
        RichText::new(icon).size(size).color(color)
    }

    /// Icon followed by a text label, for buttons
    pub fn labeled(icon: &str, text: &str) -> String {
        format!("{} {}", icon, text)
    }
}

/// Register the Material icon font with the egui context.
/// Call once during application initialization.
pub fn initialize_material_icons(ctx: &egui::Context) {
    egui_material_icons::initialize(ctx);
}
