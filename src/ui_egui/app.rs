mod header;
mod lifecycle;

use crate::models::settings::Settings;
use crate::services::journal::JournalService;
use crate::ui_egui::journal_cards::JournalCards;
use crate::ui_egui::theme::DiaryTheme;
use crate::ui_egui::views::infinite_calendar::InfiniteCalendar;

pub struct DiaryApp {
    /// Settings loaded at startup
    settings: Settings,
    /// Entry list and per-day index
    journal: JournalService,
    /// Scroll-virtualized month list
    calendar: InfiniteCalendar,
    /// Open card modal, if any
    cards: Option<JournalCards>,
    /// Currently applied theme colors
    active_theme: DiaryTheme,
}

impl eframe::App for DiaryApp {
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        self.handle_update(ctx, frame);
    }
}
