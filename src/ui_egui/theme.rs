//! Theme module for the diary window
//!
//! Defines the DiaryTheme structure and the light and dark palettes.

use egui::Color32;

/// All colours used by the diary UI
#[derive(Debug, Clone, PartialEq)]
pub struct DiaryTheme {
    /// Whether this is a dark theme (affects base egui::Visuals)
    pub is_dark: bool,

    /// Window background behind the calendar
    pub app_background: Color32,

    /// Fixed header bar background
    pub header_background: Color32,

    /// Header bottom border and cell borders
    pub border: Color32,

    /// Primary brand colour
    pub primary: Color32,

    /// Title accent, star ratings
    pub accent: Color32,

    /// Regular day cell background
    pub day_background: Color32,

    /// Sunday column background
    pub weekend_background: Color32,

    /// Header navigation button background
    pub button_background: Color32,
    pub button_hover: Color32,

    /// Day numbers in the active month
    pub text_primary: Color32,

    /// Day numbers in other months, descriptions
    pub text_secondary: Color32,

    /// Modal card surface
    pub card_background: Color32,

    /// Category badge behind the initial
    pub badge_background: Color32,

    /// Carousel progress bar fill
    pub progress: Color32,
}

impl DiaryTheme {
    /// Create the default Light theme
    pub fn light() -> Self {
        Self {
            is_dark: false,
            app_background: Color32::from_rgb(250, 250, 250),
            header_background: Color32::WHITE,
            border: Color32::from_rgb(238, 238, 238),
            primary: Color32::from_rgb(0x21, 0x96, 0xF3),
            accent: Color32::from_rgb(0x88, 0xD1, 0xF1),
            day_background: Color32::WHITE,
            weekend_background: Color32::from_rgb(0xEB, 0xE9, 0xEB),
            button_background: Color32::from_rgb(245, 245, 245),
            button_hover: Color32::from_rgb(238, 238, 238),
            text_primary: Color32::BLACK,
            text_secondary: Color32::from_rgb(117, 117, 117),
            card_background: Color32::from_rgba_unmultiplied(255, 255, 255, 242),
            badge_background: Color32::from_rgba_unmultiplied(233, 210, 233, 230),
            progress: Color32::from_rgb(0x9C, 0x27, 0xB0),
        }
    }

    /// Create the default Dark theme
    pub fn dark() -> Self {
        Self {
            is_dark: true,
            app_background: Color32::from_rgb(30, 30, 30),
            header_background: Color32::from_rgb(40, 40, 40),
            border: Color32::from_rgb(60, 60, 60),
            primary: Color32::from_rgb(0x64, 0xB5, 0xF6),
            accent: Color32::from_rgb(0x88, 0xD1, 0xF1),
            day_background: Color32::from_rgb(40, 40, 40),
            weekend_background: Color32::from_rgb(52, 50, 52),
            button_background: Color32::from_rgb(55, 55, 55),
            button_hover: Color32::from_rgb(70, 70, 70),
            text_primary: Color32::from_rgb(240, 240, 240),
            text_secondary: Color32::from_rgb(150, 150, 150),
            card_background: Color32::from_rgba_unmultiplied(48, 48, 48, 242),
            badge_background: Color32::from_rgba_unmultiplied(120, 90, 120, 230),
            progress: Color32::from_rgb(0xCE, 0x93, 0xD8),
        }
    }

    /// Pick a theme for the configured name, following the OS theme when
    /// asked to.
    pub fn resolve(theme_name: &str, use_system_theme: bool) -> Self {
        let is_dark = if use_system_theme {
            match dark_light::detect() {
                dark_light::Mode::Dark => true,
                dark_light::Mode::Light => false,
                dark_light::Mode::Default => theme_name.eq_ignore_ascii_case("dark"),
            }
        } else {
            theme_name.eq_ignore_ascii_case("dark")
        };

        if is_dark {
            Self::dark()
        } else {
            Self::light()
        }
    }

    /// Apply this theme to an egui context
    pub fn apply_to_context(&self, ctx: &egui::Context) {
        let mut visuals = if self.is_dark {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };

        visuals.window_fill = self.app_background;
        visuals.panel_fill = self.app_background;
        visuals.selection.bg_fill = self.primary;

        visuals.widgets.inactive.weak_bg_fill = self.button_background;
        visuals.widgets.inactive.bg_fill = self.button_background;
        visuals.widgets.hovered.weak_bg_fill = self.button_hover;
        visuals.widgets.hovered.bg_fill = self.button_hover;
        visuals.widgets.active.weak_bg_fill = self.button_hover;

        ctx.set_visuals(visuals);
    }
}

impl Default for DiaryTheme {
    fn default() -> Self {
        Self::light()
    }
}
