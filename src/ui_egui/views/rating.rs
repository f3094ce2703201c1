//! Read-only star rating widget.
//!
//! Stars are painted as a convex pentagon plus five convex tips so egui's
//! convex polygon tessellation can fill them. Partial stars are produced by
//! clipping the filled star to a fraction of its width.

use egui::{Color32, Pos2, Rect, Shape, Stroke, Vec2};

use crate::models::journal::MAX_RATING;

pub const STAR_COUNT: usize = 5;

/// Round `rating` to `precision` and split it into per-star fill fractions.
pub fn star_fills(rating: f32, precision: f32) -> [f32; STAR_COUNT] {
    let rating = if rating.is_finite() {
        rating.clamp(0.0, MAX_RATING)
    } else {
        0.0
    };
    let rounded = if precision > 0.0 {
        (rating / precision).round() * precision
    } else {
        rating
    };

    let mut fills = [0.0; STAR_COUNT];
    for (idx, fill) in fills.iter_mut().enumerate() {
        *fill = (rounded - idx as f32).clamp(0.0, 1.0);
    }
    fills
}

/// Outer and inner vertices alternating, starting at the top point.
fn star_points(center: Pos2, outer: f32, inner: f32) -> [Pos2; 10] {
    let mut points = [center; 10];
    for (idx, point) in points.iter_mut().enumerate() {
        let radius = if idx % 2 == 0 { outer } else { inner };
        let angle = -std::f32::consts::FRAC_PI_2 + idx as f32 * std::f32::consts::PI / 5.0;
        *point = center + Vec2::angled(angle) * radius;
    }
    points
}

fn star_shapes(center: Pos2, outer: f32, color: Color32) -> Vec<Shape> {
    let points = star_points(center, outer, outer * 0.45);
    let inner: Vec<Pos2> = points.iter().skip(1).step_by(2).copied().collect();

    let mut shapes = Vec::with_capacity(6);
    shapes.push(Shape::convex_polygon(inner.clone(), color, Stroke::NONE));
    for tip in 0..5 {
        let outer_point = points[tip * 2];
        let left = inner[(tip + 4) % 5];
        let right = inner[tip];
        shapes.push(Shape::convex_polygon(
            vec![left, outer_point, right],
            color,
            Stroke::NONE,
        ));
    }
    shapes
}

/// Paint five stars filling `rect` horizontally.
pub fn paint_rating(
    painter: &egui::Painter,
    rect: Rect,
    rating: f32,
    precision: f32,
    filled: Color32,
    empty: Color32,
) {
    let star_size = (rect.width() / STAR_COUNT as f32).min(rect.height());
    let outer = star_size * 0.48;

    for (idx, fill) in star_fills(rating, precision).into_iter().enumerate() {
        let cell = Rect::from_min_size(
            rect.min + Vec2::new(idx as f32 * star_size, 0.0),
            Vec2::splat(star_size),
        );
        let center = cell.center();

        painter.extend(star_shapes(center, outer, empty));
        if fill > 0.0 {
            let mut clip = cell;
            clip.max.x = cell.min.x + cell.width() * fill;
            painter
                .with_clip_rect(clip.intersect(painter.clip_rect()))
                .extend(star_shapes(center, outer, filled));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: [f32; STAR_COUNT], b: [f32; STAR_COUNT]) -> bool {
        a.iter().zip(b.iter()).all(|(x, y)| (x - y).abs() < 1e-4)
    }

    #[test]
    fn test_whole_star_precision_rounds() {
        assert!(approx(star_fills(3.5, 1.0), [1.0, 1.0, 1.0, 1.0, 0.0]));
        assert!(approx(star_fills(3.4, 1.0), [1.0, 1.0, 1.0, 0.0, 0.0]));
    }

    #[test]
    fn test_tenth_precision_keeps_fraction() {
        assert!(approx(star_fills(4.2, 0.1), [1.0, 1.0, 1.0, 1.0, 0.2]));
    }

    #[test]
    fn test_out_of_range_clamps() {
        assert!(approx(star_fills(9.0, 0.1), [1.0; STAR_COUNT]));
        assert!(approx(star_fills(-2.0, 0.1), [0.0; STAR_COUNT]));
        assert!(approx(star_fills(f32::NAN, 1.0), [0.0; STAR_COUNT]));
    }

    #[test]
    fn test_star_points_start_at_top() {
        let points = star_points(Pos2::new(10.0, 10.0), 8.0, 4.0);
        assert!((points[0].x - 10.0).abs() < 1e-4);
        assert!((points[0].y - 2.0).abs() < 1e-4);
    }
}
