use egui::epaint::Shadow;
use egui::text::LayoutJob;
use egui::{Align2, Color32, CursorIcon, FontId, Key, Rect, Rounding, Sense, Stroke, Vec2};

use super::carousel::{CardCarousel, CardPose};
use super::motion::fade_in;
use crate::models::journal::JournalEntry;
use crate::services::journal::JournalService;
use crate::ui_egui::theme::DiaryTheme;
use crate::ui_egui::views::paint_image_cover;
use crate::ui_egui::views::rating::paint_rating;
use crate::utils::date::format_long_date;

const MAX_CARD_WIDTH: f32 = 400.0;
const MIN_CARD_WIDTH: f32 = 300.0;
const MAX_CARD_HEIGHT: f32 = 630.0;
const STACK_SPACING: f32 = 24.0;
const PROGRESS_HEIGHT: f32 = 8.0;
const CARD_ROUNDING: f32 = 12.0;
const BACKDROP_FADE_SECS: f32 = 0.5;
const CLOSE_BUTTON_RADIUS: f32 = 18.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JournalCardsAction {
    None,
    Close,
}

pub struct JournalCards {
    carousel: CardCarousel,
    opened_at: Option<f64>,
}

impl JournalCards {
    pub fn open(journal: &JournalService, target_date: &str, swipe_threshold: f32) -> Option<Self> {
        let carousel = CardCarousel::open_at(journal, target_date, swipe_threshold)?;
        log::info!(
            "Opening journal cards at {} ({} of {})",
            target_date,
            carousel.index() + 1,
            carousel.len()
        );
        Some(Self {
            carousel,
            opened_at: None,
        })
    }

    pub fn carousel(&self) -> &CardCarousel {
        &self.carousel
    }

    pub fn show(
        &mut self,
        ctx: &egui::Context,
        journal: &JournalService,
        theme: &DiaryTheme,
    ) -> JournalCardsAction {
        let now = ctx.input(|i| i.time);
        let opened_at = *self.opened_at.get_or_insert(now);
        let backdrop_alpha = fade_in((now - opened_at) as f32, BACKDROP_FADE_SECS);
        let mut action = JournalCardsAction::None;

        let (escape, left, right) = ctx.input(|i| {
            (
                i.key_pressed(Key::Escape),
                i.key_pressed(Key::ArrowLeft),
                i.key_pressed(Key::ArrowRight),
            )
        });
        if escape {
            action = JournalCardsAction::Close;
        }
        if left {
            self.carousel.go_previous();
        }
        if right {
            self.carousel.go_next();
        }

        let screen = ctx.screen_rect();
        egui::Area::new(egui::Id::new("journal_cards_modal"))
            .order(egui::Order::Foreground)
            .fixed_pos(screen.min)
            .show(ctx, |ui| {
                ui.set_min_size(screen.size());
                ui.painter().rect_filled(
                    screen,
                    0.0,
                    Color32::from_black_alpha((backdrop_alpha * 255.0) as u8),
                );

                let card_width = (screen.width() - 32.0)
                    .min(MAX_CARD_WIDTH)
                    .max(MIN_CARD_WIDTH.min(screen.width()));
                let card_height = (screen.height() - 140.0).clamp(200.0, MAX_CARD_HEIGHT);
                let stack_height = card_height + STACK_SPACING + PROGRESS_HEIGHT;
                let card_rect = Rect::from_min_size(
                    egui::pos2(
                        screen.center().x - card_width / 2.0,
                        screen.center().y - stack_height / 2.0,
                    ),
                    Vec2::new(card_width, card_height),
                );
                let progress_rect = Rect::from_min_size(
                    card_rect.left_bottom() + Vec2::new(0.0, STACK_SPACING),
                    Vec2::new(card_width, PROGRESS_HEIGHT),
                );
                let close_center =
                    card_rect.right_top() + Vec2::new(-CLOSE_BUTTON_RADIUS - 8.0, CLOSE_BUTTON_RADIUS + 8.0);
                let close_rect =
                    Rect::from_center_size(close_center, Vec2::splat(CLOSE_BUTTON_RADIUS * 2.0));

                // Later interactions win hit tests: backdrop, card, close button.
                let backdrop = ui.interact(screen, ui.id().with("backdrop"), Sense::click());
                let card = ui.interact(card_rect, ui.id().with("current_card"), Sense::click_and_drag());
                let close = ui
                    .interact(close_rect, ui.id().with("close"), Sense::click())
                    .on_hover_cursor(CursorIcon::PointingHand);

                if card.dragged() {
                    self.carousel.drag_by(card.drag_delta().x);
                    ctx.set_cursor_icon(CursorIcon::Grabbing);
                } else if card.hovered() {
                    ctx.set_cursor_icon(CursorIcon::Grab);
                }
                if card.drag_stopped() {
                    let outcome = self.carousel.release();
                    log::debug!("Swipe released: {:?}", outcome);
                }

                let stack_rect = card_rect.union(progress_rect);
                let clicked_outside = backdrop.clicked()
                    && backdrop
                        .interact_pointer_pos()
                        .map_or(true, |pos| !stack_rect.contains(pos));
                if close.clicked() || clicked_outside {
                    action = JournalCardsAction::Close;
                }

                let lift = ctx.animate_bool_with_time(
                    ui.id().with("card_lift"),
                    card.hovered() && !card.dragged(),
                    0.2,
                ) * 4.0;

                let frame = self.carousel.frame(now);
                for pose in &frame.cards {
                    let Some(entry) = journal.get(pose.index) else {
                        continue;
                    };
                    let lift = if pose.is_current { lift } else { 0.0 };
                    let rect = card_rect.translate(Vec2::new(pose.offset_x, -lift));
                    paint_card(ui, entry, rect, *pose, theme);
                }

                paint_close_button(ui, close_center, close.hovered());
                paint_progress(ui, progress_rect, self.carousel.progress(), theme);

                if frame.animating || backdrop_alpha < 1.0 || self.carousel.is_dragging() {
                    ctx.request_repaint();
                }
            });

        action
    }
}

fn paint_card(ui: &egui::Ui, entry: &JournalEntry, rect: Rect, pose: CardPose, theme: &DiaryTheme) {
    if pose.opacity <= 0.0 || !ui.clip_rect().intersects(rect) {
        return;
    }
    let fade = |color: Color32| color.gamma_multiply(pose.opacity);
    let painter = ui.painter();

    painter.add(
        Shadow {
            offset: Vec2::new(0.0, 8.0),
            blur: 32.0,
            spread: 0.0,
            color: fade(Color32::from_black_alpha(38)),
        }
        .as_shape(rect, CARD_ROUNDING),
    );
    painter.rect(
        rect,
        CARD_ROUNDING,
        fade(theme.card_background),
        Stroke::new(1.0, fade(Color32::from_white_alpha(77))),
    );

    let image_rect = Rect::from_min_size(rect.min, Vec2::new(rect.width(), rect.height() * 0.7));
    paint_image_cover(
        ui,
        &entry.img_url,
        image_rect,
        Rounding {
            nw: CARD_ROUNDING,
            ne: CARD_ROUNDING,
            sw: 0.0,
            se: 0.0,
        },
        pose.opacity,
    );

    let padding = 12.0;
    let mut cursor_y = image_rect.bottom() + padding;
    let left = rect.left() + padding;
    let right = rect.right() - padding;

    // Category badge and rating row
    let badge_radius = 16.0;
    let badge_center = egui::pos2(left + badge_radius, cursor_y + badge_radius);
    if let Some(initial) = entry.category_initial() {
        painter.circle_filled(badge_center, badge_radius, fade(theme.badge_background));
        painter.text(
            badge_center,
            Align2::CENTER_CENTER,
            initial.to_string(),
            FontId::proportional(14.0),
            fade(Color32::from_rgb(0x66, 0x66, 0x66)),
        );
    }
    let star_size = 16.0;
    let stars_rect = Rect::from_min_size(
        egui::pos2(right - star_size * 5.0, badge_center.y - star_size / 2.0),
        Vec2::new(star_size * 5.0, star_size),
    );
    paint_rating(
        painter,
        stars_rect,
        entry.display_rating(),
        0.1,
        fade(theme.accent),
        fade(theme.text_secondary.gamma_multiply(0.3)),
    );
    cursor_y += badge_radius * 2.0 + 4.0;

    let date_label = format_long_date(&entry.date).unwrap_or_else(|| entry.date.clone());
    let date_rect = painter.text(
        egui::pos2(left, cursor_y),
        Align2::LEFT_TOP,
        date_label,
        FontId::proportional(20.0),
        fade(theme.text_primary),
    );
    cursor_y = date_rect.bottom() + 8.0;

    let footer_height = 36.0;
    let footer_top = rect.bottom() - footer_height;

    let mut job = LayoutJob::simple(
        entry.description.clone(),
        FontId::proportional(14.0),
        fade(theme.text_secondary),
        right - left,
    );
    job.wrap.max_rows = 2;
    job.wrap.break_anywhere = false;
    job.wrap.overflow_character = Some('…');
    let galley = painter.layout_job(job);
    if cursor_y + galley.size().y <= footer_top {
        painter.galley(egui::pos2(left, cursor_y), galley, fade(theme.text_secondary));
    }

    painter.hline(
        rect.x_range(),
        footer_top,
        Stroke::new(1.0, fade(theme.text_primary)),
    );
    painter.text(
        egui::pos2(rect.center().x, footer_top + footer_height / 2.0),
        Align2::CENTER_CENTER,
        "View full Post",
        FontId::proportional(14.0),
        fade(theme.text_primary),
    );
}

fn paint_close_button(ui: &egui::Ui, center: egui::Pos2, hovered: bool) {
    let fill = if hovered {
        Color32::from_black_alpha(204)
    } else {
        Color32::GRAY
    };
    ui.painter().circle_filled(center, CLOSE_BUTTON_RADIUS, fill);
    ui.painter().text(
        center,
        Align2::CENTER_CENTER,
        "✕",
        FontId::proportional(16.0),
        Color32::WHITE,
    );
}

fn paint_progress(ui: &egui::Ui, rect: Rect, progress: f32, theme: &DiaryTheme) {
    let rounding = rect.height() / 2.0;
    ui.painter()
        .rect_filled(rect, rounding, Color32::from_white_alpha(25));

    let mut filled = rect;
    filled.max.x = rect.min.x + rect.width() * progress.clamp(0.0, 1.0);
    if filled.width() > 0.0 {
        ui.painter().rect_filled(filled, rounding, theme.progress);
    }
}
