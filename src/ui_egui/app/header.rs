use super::DiaryApp;
use crate::utils::date::DAYS;
use egui::{Color32, Margin, RichText, Stroke, Vec2};

/// Below this window width the header uses its compact sizes
const COMPACT_WIDTH: f32 = 600.0;

impl DiaryApp {
    pub(super) fn render_header(&mut self, ctx: &egui::Context) {
        let compact = ctx.screen_rect().width() < COMPACT_WIDTH;
        let (height, font_size, label_width) = if compact {
            (56.0, 14.0, 80.0)
        } else {
            (66.0, 23.0, 180.0)
        };
        let theme = self.active_theme.clone();

        egui::TopBottomPanel::top("header")
            .exact_height(height)
            .frame(
                egui::Frame::none()
                    .fill(theme.header_background)
                    .stroke(Stroke::new(1.0, theme.border))
                    .inner_margin(Margin::symmetric(16.0, 0.0)),
            )
            .show(ctx, |ui| {
                ui.horizontal_centered(|ui| {
                    ui.spacing_mut().item_spacing.x = 8.0;
                    ui.label(RichText::new("🗓").size(font_size).color(theme.text_primary));
                    ui.label(
                        RichText::new(&self.settings.app_title_accent)
                            .size(font_size)
                            .strong()
                            .color(theme.accent),
                    );
                    ui.label(
                        RichText::new(&self.settings.app_title)
                            .size(font_size)
                            .strong()
                            .color(theme.text_primary),
                    );

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.spacing_mut().item_spacing.x = 2.0;
                        if nav_button(ui, "⏵", font_size).clicked() {
                            self.calendar.next_month();
                        }

                        let current = self.calendar.current_month();
                        ui.allocate_ui_with_layout(
                            Vec2::new(label_width, height),
                            egui::Layout::centered_and_justified(egui::Direction::LeftToRight),
                            |ui| {
                                ui.horizontal_centered(|ui| {
                                    ui.spacing_mut().item_spacing.x = 4.0;
                                    ui.label(
                                        RichText::new(current.short_name())
                                            .size(font_size)
                                            .strong()
                                            .color(theme.text_primary),
                                    );
                                    ui.label(
                                        RichText::new(current.year.to_string())
                                            .size(font_size)
                                            .color(theme.text_primary),
                                    );
                                });
                            },
                        );

                        if nav_button(ui, "⏴", font_size).clicked() {
                            self.calendar.previous_month();
                        }
                    });
                });
            });

        egui::TopBottomPanel::top("weekday_strip")
            .exact_height(24.0)
            .frame(
                egui::Frame::none()
                    .fill(theme.header_background)
                    .stroke(Stroke::new(1.0, theme.border)),
            )
            .show(ctx, |ui| {
                let rect = ui.max_rect();
                let col_width = rect.width() / 7.0;
                for (idx, day) in DAYS.iter().enumerate() {
                    let center = egui::pos2(
                        rect.left() + col_width * (idx as f32 + 0.5),
                        rect.center().y,
                    );
                    ui.painter().text(
                        center,
                        egui::Align2::CENTER_CENTER,
                        *day,
                        egui::FontId::proportional(12.0),
                        theme.text_secondary,
                    );
                }
            });
    }
}

fn nav_button(ui: &mut egui::Ui, icon: &str, font_size: f32) -> egui::Response {
    ui.add(
        egui::Button::new(RichText::new(icon).size(font_size * 0.8))
            .rounding(egui::Rounding::same(16.0))
            .stroke(Stroke::new(0.0, Color32::TRANSPARENT))
            .min_size(Vec2::splat(32.0)),
    )
    .on_hover_cursor(egui::CursorIcon::PointingHand)
}
