//! Month block rendering for the infinite calendar.
//!
//! One block is a Sunday-first, seven column grid with leading blank cells.
//! A day with entries shows the first entry's rating and thumbnail.

use egui::{Align2, FontId, Rect, Sense, Stroke, Vec2};

use super::palette::CalendarCellPalette;
use super::paint_image_contained;
use super::rating::paint_rating;
use crate::models::month::MonthId;
use crate::services::journal::JournalService;
use crate::ui_egui::theme::DiaryTheme;
use crate::utils::date::generate_calendar_days;

/// Action returned from a month block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthGridAction {
    None,
    /// Open the carousel on this entry index
    OpenEntry(usize),
}

pub struct MonthGrid;

impl MonthGrid {
    /// Render `month` into a block of exactly `rows * row_height` points.
    pub fn show(
        ui: &mut egui::Ui,
        month: MonthId,
        journal: &JournalService,
        theme: &DiaryTheme,
        active: bool,
        row_height: f32,
    ) -> MonthGridAction {
        let mut action = MonthGridAction::None;
        let palette = CalendarCellPalette::from_theme(theme, active);
        let days = generate_calendar_days(month.year, month.month);
        let rows = days.len().div_ceil(7);

        let width = ui.available_width();
        let col_width = width / 7.0;
        let (block, _) = ui.allocate_exact_size(
            Vec2::new(width, rows as f32 * row_height),
            Sense::hover(),
        );

        if !ui.is_rect_visible(block) {
            return action;
        }

        for (index, day) in days.iter().enumerate() {
            let Some(day) = *day else {
                continue;
            };
            let col = index % 7;
            let row = index / 7;
            let cell = Rect::from_min_size(
                block.min + Vec2::new(col as f32 * col_width, row as f32 * row_height),
                Vec2::new(col_width, row_height),
            );

            if let Some(cell_action) =
                Self::render_day_cell(ui, month, day, col == 0, cell, journal, palette)
            {
                action = cell_action;
            }
        }

        action
    }

    fn render_day_cell(
        ui: &mut egui::Ui,
        month: MonthId,
        day: u32,
        is_weekend: bool,
        cell: Rect,
        journal: &JournalService,
        palette: CalendarCellPalette,
    ) -> Option<MonthGridAction> {
        let bg_color = if is_weekend {
            palette.weekend_bg
        } else {
            palette.regular_bg
        };
        ui.painter().rect_filled(cell, 0.0, bg_color);
        ui.painter()
            .rect_stroke(cell, 0.0, Stroke::new(0.5, palette.border));

        let font_size = (cell.height() * 0.14).clamp(11.0, 18.0);
        let font = FontId::proportional(font_size);
        let label_pos = cell.center_top() + Vec2::new(0.0, 4.0);

        let day_text = day.to_string();
        let galley = ui
            .painter()
            .layout_no_wrap(day_text.clone(), font.clone(), palette.day_text);
        let day_width = galley.size().x;
        let month_label = (day == 1).then(|| month.short_name());
        let label_width = month_label
            .map(|label| {
                ui.painter()
                    .layout_no_wrap(format!(" {}", label), font.clone(), palette.month_label)
                    .size()
                    .x
            })
            .unwrap_or(0.0);

        let text_left = label_pos.x - (day_width + label_width) / 2.0;
        let day_rect = ui.painter().text(
            egui::pos2(text_left, label_pos.y),
            Align2::LEFT_TOP,
            day_text,
            font.clone(),
            palette.day_text,
        );
        if palette.strong_day {
            // egui's default font has no bold face
            ui.painter().text(
                egui::pos2(text_left + 0.6, label_pos.y),
                Align2::LEFT_TOP,
                day.to_string(),
                font.clone(),
                palette.day_text,
            );
        }
        if let Some(label) = month_label {
            ui.painter().text(
                egui::pos2(day_rect.right(), label_pos.y),
                Align2::LEFT_TOP,
                format!(" {}", label),
                font,
                palette.month_label,
            );
        }

        let date = month.date(day)?;
        let (entry_index, entry) = journal.first_entry_on(date)?;

        let content = Rect::from_min_max(
            egui::pos2(cell.left() + 2.0, day_rect.bottom() + 2.0),
            egui::pos2(cell.right() - 2.0, cell.bottom() - 2.0),
        );
        if content.height() <= 0.0 {
            return None;
        }

        let star_size = (content.width() / 5.0).clamp(6.0, 18.0);
        let stars_rect = Rect::from_center_size(
            egui::pos2(content.center().x, content.top() + star_size / 2.0),
            Vec2::new(star_size * 5.0, star_size),
        );
        paint_rating(
            ui.painter(),
            stars_rect,
            entry.display_rating(),
            1.0,
            palette.rating,
            palette.rating_empty,
        );

        let image_area = Rect::from_min_max(
            egui::pos2(content.left(), stars_rect.bottom() + 2.0),
            content.max,
        );
        if image_area.height() > 4.0 {
            paint_image_contained(ui, &entry.img_url, image_area, 4.0);
        }

        let response = ui
            .interact(
                content,
                ui.id().with(("journal_entry", date)),
                Sense::click(),
            )
            .on_hover_cursor(egui::CursorIcon::PointingHand);
        if response.hovered() {
            ui.painter()
                .rect_stroke(cell.shrink(1.0), 2.0, Stroke::new(1.5, palette.hover_border));
        }

        response
            .clicked()
            .then_some(MonthGridAction::OpenEntry(entry_index))
    }
}
