// Settings module
// Application settings persisted as TOML in the user's config directory

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const MIN_WINDOW_WIDTH: f32 = 360.0;
pub const MIN_WINDOW_HEIGHT: f32 = 480.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// "light" or "dark"
    pub theme: String,
    /// Follow the operating system theme instead of `theme`
    pub use_system_theme: bool,
    /// Highlighted first word of the header title
    pub app_title_accent: String,
    pub app_title: String,
    /// Months laid out on either side of the current month at startup
    pub initial_radius: u32,
    /// Months added per scroll-driven extension
    pub batch_size: u32,
    /// Fraction of the viewport height that triggers an extension
    pub extension_ratio: f32,
    /// Horizontal drag distance (points) that flips a card
    pub swipe_threshold: f32,
    pub initial_scroll_delay_ms: u64,
    pub initial_settle_ms: u64,
    /// Entry list to show instead of the bundled sample
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entries_path: Option<PathBuf>,
    pub window_width: f32,
    pub window_height: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: "light".to_string(),
            use_system_theme: false,
            app_title_accent: "My".to_string(),
            app_title: "Hair Diary".to_string(),
            initial_radius: 2,
            batch_size: 6,
            extension_ratio: 0.9,
            swipe_threshold: 50.0,
            initial_scroll_delay_ms: 300,
            initial_settle_ms: 500,
            entries_path: None,
            window_width: 1100.0,
            window_height: 820.0,
        }
    }
}

impl Settings {
    pub fn is_dark(&self) -> bool {
        self.theme.eq_ignore_ascii_case("dark")
    }

    pub fn validate(&self) -> Result<(), String> {
        if !self.theme.eq_ignore_ascii_case("light") && !self.is_dark() {
            return Err(format!("Unknown theme '{}'", self.theme));
        }
        if self.batch_size == 0 {
            return Err("Batch size must be at least 1".to_string());
        }
        if !(self.extension_ratio > 0.0 && self.extension_ratio <= 2.0) {
            return Err(format!(
                "Extension ratio {} must be in (0, 2]",
                self.extension_ratio
            ));
        }
        if !self.swipe_threshold.is_finite() || self.swipe_threshold < 0.0 {
            return Err("Swipe threshold cannot be negative".to_string());
        }
        if self.window_width < MIN_WINDOW_WIDTH || self.window_height < MIN_WINDOW_HEIGHT {
            return Err(format!(
                "Window size must be at least {}x{}",
                MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn test_default_settings_are_valid() {
        assert!(Settings::default().validate().is_ok());
    }

    #[test_case(Settings { batch_size: 0, ..Settings::default() } ; "zero batch")]
    #[test_case(Settings { theme: "solarized".to_string(), ..Settings::default() } ; "unknown theme")]
    #[test_case(Settings { extension_ratio: 0.0, ..Settings::default() } ; "zero ratio")]
    #[test_case(Settings { extension_ratio: 2.5, ..Settings::default() } ; "ratio above two")]
    #[test_case(Settings { swipe_threshold: -1.0, ..Settings::default() } ; "negative swipe threshold")]
    #[test_case(Settings { swipe_threshold: f32::NAN, ..Settings::default() } ; "nan swipe threshold")]
    #[test_case(Settings { swipe_threshold: f32::INFINITY, ..Settings::default() } ; "infinite swipe threshold")]
    #[test_case(Settings { window_width: MIN_WINDOW_WIDTH - 1.0, ..Settings::default() } ; "narrow window")]
    #[test_case(Settings { window_height: MIN_WINDOW_HEIGHT - 1.0, ..Settings::default() } ; "short window")]
    fn test_validate_rejects(settings: Settings) {
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_validate_accepts_minimum_window_and_zero_threshold() {
        let settings = Settings {
            window_width: MIN_WINDOW_WIDTH,
            window_height: MIN_WINDOW_HEIGHT,
            swipe_threshold: 0.0,
            ..Settings::default()
        };
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let settings: Settings = toml::from_str("theme = \"dark\"\nbatch_size = 3\n").unwrap();
        assert!(settings.is_dark());
        assert_eq!(settings.batch_size, 3);
        assert_eq!(settings.initial_radius, 2);
    }
}
