//! # GUI Theme
//!
//! Light and dark palettes for egui. The active one follows
//! `AppState::dark_mode` and is applied to the whole context.

use egui::{Color32, Context, Stroke, Visuals};
use egui::Theme as EguiTheme;

/// Color palette for one mode
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub background: Color32,
    pub surface: Color32,
    pub text: Color32,
    /// Brand accent (buttons, selection, headings)
    pub accent: Color32,
    /// Hover/pressed accent
    pub accent_strong: Color32,
    pub border: Color32,
    pub dim: Color32,
    pub success: Color32,
    pub error: Color32,
    pub info: Color32,
}

impl Palette {
    pub const LIGHT: Palette = Palette {
        background: Color32::from_rgb(250, 249, 255),
        surface: Color32::from_rgb(255, 255, 255),
        text: Color32::from_rgb(24, 20, 38),
        accent: Color32::from_rgb(124, 58, 237),
        accent_strong: Color32::from_rgb(109, 40, 217),
        border: Color32::from_rgb(221, 214, 254),
        dim: Color32::from_rgb(107, 104, 128),
        success: Color32::from_rgb(22, 163, 74),
        error: Color32::from_rgb(220, 38, 38),
        info: Color32::from_rgb(37, 99, 235),
    };

    pub const DARK: Palette = Palette {
        background: Color32::from_rgb(15, 12, 26),
        surface: Color32::from_rgb(28, 24, 44),
        text: Color32::from_rgb(237, 233, 254),
        accent: Color32::from_rgb(167, 139, 250),
        accent_strong: Color32::from_rgb(196, 181, 253),
        border: Color32::from_rgb(55, 48, 85),
        dim: Color32::from_rgb(148, 142, 170),
        success: Color32::from_rgb(74, 222, 128),
        error: Color32::from_rgb(248, 113, 113),
        info: Color32::from_rgb(96, 165, 250),
    };
}

/// Application theme
pub struct Theme {
    pub dark: bool,
    pub colors: Palette,
}

impl Default for Theme {
    fn default() -> Self {
        Self::for_mode(false)
    }
}

impl Theme {
    pub fn for_mode(dark: bool) -> Self {
        let colors = if dark { Palette::DARK } else { Palette::LIGHT };
        Self { dark, colors }
    }

    /// Build egui visuals from a palette
    pub fn visuals(dark: bool) -> Visuals {
        let colors = Self::for_mode(dark).colors;
        let mut visuals = if dark { Visuals::dark() } else { Visuals::light() };

        visuals.override_text_color = Some(colors.text);
        visuals.panel_fill = colors.background;
        visuals.window_fill = colors.surface;
        visuals.window_stroke = Stroke::new(1.0, colors.border);
        visuals.faint_bg_color = colors.surface;
        visuals.extreme_bg_color = colors.surface;

        visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, colors.border);

        visuals.widgets.hovered.bg_stroke = Stroke::new(1.5, colors.accent);
        visuals.widgets.active.bg_fill = colors.accent_strong;
        visuals.widgets.active.bg_stroke = Stroke::new(1.5, colors.accent_strong);

        visuals.selection.bg_fill = colors.accent.gamma_multiply(0.35);
        visuals.selection.stroke = Stroke::new(1.5, colors.accent);

        visuals.hyperlink_color = colors.info;
        visuals
    }

    /// Register both palettes with the context. Call once at startup.
    pub fn install(ctx: &Context) {
        for (egui_theme, dark) in [(EguiTheme::Light, false), (EguiTheme::Dark, true)] {
            let visuals = Self::visuals(dark);
            ctx.style_mut_of(egui_theme, |style| {
                style.visuals = visuals;
                style.spacing.item_spacing = egui::vec2(8.0, 6.0);
                style.spacing.button_padding = egui::vec2(10.0, 5.0);
            });
        }
        tracing::debug!("Installed light and dark visuals");
    }

    /// Switch the context to the requested mode if it differs
    pub fn apply(ctx: &Context, dark: bool) {
        let wanted = if dark { EguiTheme::Dark } else { EguiTheme::Light };
        if ctx.theme() != wanted {
            ctx.set_theme(wanted);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modes_use_distinct_palettes() {
        assert_eq!(Theme::for_mode(false).colors, Palette::LIGHT);
        assert_eq!(Theme::for_mode(true).colors, Palette::DARK);
        assert!(!Theme::default().dark);
    }

    #[test]
    fn test_visuals_follow_mode() {
        assert!(Theme::visuals(true).dark_mode);
        assert!(!Theme::visuals(false).dark_mode);
        assert_eq!(Theme::visuals(true).panel_fill, Palette::DARK.background);
    }
}
