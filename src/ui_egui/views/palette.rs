use crate::ui_egui::theme::DiaryTheme;
use egui::Color32;

fn with_alpha(color: Color32, alpha: u8) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha)
}

/// Colours for one month block; the active month gets stronger day numbers.
#[derive(Clone, Copy)]
pub(crate) struct CalendarCellPalette {
    pub regular_bg: Color32,
    pub weekend_bg: Color32,
    pub border: Color32,
    pub day_text: Color32,
    pub month_label: Color32,
    pub rating: Color32,
    pub rating_empty: Color32,
    pub hover_border: Color32,
    pub strong_day: bool,
}

impl CalendarCellPalette {
    pub fn from_theme(theme: &DiaryTheme, active: bool) -> Self {
        Self {
            regular_bg: theme.day_background,
            weekend_bg: theme.weekend_background,
            border: theme.border,
            day_text: if active {
                theme.text_primary
            } else {
                theme.text_secondary
            },
            month_label: Color32::GRAY,
            rating: theme.accent,
            rating_empty: with_alpha(theme.text_secondary, 60),
            hover_border: with_alpha(theme.primary, if theme.is_dark { 160 } else { 120 }),
            strong_day: active,
        }
    }
}
