use egui::{Pos2, Rect, Vec2};

pub mod infinite_calendar;
pub mod month_grid;
pub mod month_window;
mod palette;
pub mod rating;

/// Rect of `source` scaled to fit inside `area`, centred.
pub fn contain_rect(area: Rect, source: Vec2) -> Rect {
    if source.x <= 0.0 || source.y <= 0.0 {
        return area;
    }
    let scale = (area.width() / source.x).min(area.height() / source.y);
    Rect::from_center_size(area.center(), source * scale)
}

/// UV sub-rect that crops `source` so it covers `area` without distortion.
pub fn cover_uv(area: Vec2, source: Vec2) -> Rect {
    if source.x <= 0.0 || source.y <= 0.0 || area.x <= 0.0 || area.y <= 0.0 {
        return Rect::from_min_max(Pos2::ZERO, Pos2::new(1.0, 1.0));
    }
    let scale = (area.x / source.x).max(area.y / source.y);
    let visible = Vec2::new(
        (area.x / scale / source.x).min(1.0),
        (area.y / scale / source.y).min(1.0),
    );
    Rect::from_center_size(Pos2::new(0.5, 0.5), visible)
}

/// Paint an image scaled to fit within `area` (letterboxed).
pub fn paint_image_contained(ui: &egui::Ui, uri: &str, area: Rect, rounding: f32) {
    let image = egui::Image::new(uri).rounding(rounding);
    let target = image
        .load_for_size(ui.ctx(), area.size())
        .ok()
        .and_then(|poll| poll.size())
        .map(|size| contain_rect(area, size))
        .unwrap_or(area);
    image.paint_at(ui, target);
}

/// Paint an image cropped to fill `area`, faded by `opacity`.
pub fn paint_image_cover(
    ui: &egui::Ui,
    uri: &str,
    area: Rect,
    rounding: impl Into<egui::Rounding>,
    opacity: f32,
) {
    let mut image = egui::Image::new(uri)
        .rounding(rounding)
        .tint(egui::Color32::WHITE.gamma_multiply(opacity));
    if let Some(size) = image
        .load_for_size(ui.ctx(), area.size())
        .ok()
        .and_then(|poll| poll.size())
    {
        image = image.uv(cover_uv(area.size(), size));
    }
    image.paint_at(ui, area);
}
