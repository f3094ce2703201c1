use super::DiaryApp;
use crate::models::month::MonthId;
use crate::models::settings::Settings;
use crate::services::journal::JournalService;
use crate::ui_egui::journal_cards::{JournalCards, JournalCardsAction};
use crate::ui_egui::theme::DiaryTheme;
use crate::ui_egui::views::infinite_calendar::{CalendarAction, CalendarConfig, InfiniteCalendar};

impl DiaryApp {
    pub fn new(cc: &eframe::CreationContext<'_>, settings: Settings) -> Self {
        egui_extras::install_image_loaders(&cc.egui_ctx);

        let journal = load_journal_or_empty(&settings);
        log::info!("Loaded {} journal entries", journal.len());

        let active_theme = DiaryTheme::resolve(&settings.theme, settings.use_system_theme);
        active_theme.apply_to_context(&cc.egui_ctx);

        let calendar = InfiniteCalendar::new(CalendarConfig::from(&settings), MonthId::current());

        Self {
            settings,
            journal,
            calendar,
            cards: None,
            active_theme,
        }
    }

    pub(super) fn handle_update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.render_header(ctx);

        let action = egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(self.active_theme.app_background))
            .show(ctx, |ui| {
                self.calendar
                    .show(ui, &self.journal, &self.active_theme)
            })
            .inner;

        if let CalendarAction::OpenEntry(index) = action {
            self.open_cards(index);
        }

        if let Some(cards) = self.cards.as_mut() {
            if cards.show(ctx, &self.journal, &self.active_theme) == JournalCardsAction::Close {
                log::debug!("Closing journal cards");
                self.cards = None;
            }
        }
    }

    fn open_cards(&mut self, index: usize) {
        let Some(entry) = self.journal.get(index) else {
            log::warn!("Entry {} no longer exists", index);
            return;
        };
        self.cards = JournalCards::open(&self.journal, &entry.date, self.settings.swipe_threshold);
    }
}

fn load_journal_or_empty(settings: &Settings) -> JournalService {
    match JournalService::load(settings) {
        Ok(journal) => journal,
        Err(err) => {
            log::error!("Failed to load journal entries: {:#}", err);
            JournalService::default()
        }
    }
}
