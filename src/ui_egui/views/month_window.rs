//! Month virtualization for the infinite calendar.
//!
//! `MonthWindow` is the contiguous run of months currently laid out,
//! `MonthLayout` their vertical spans, and `ScrollMetrics` decides when the
//! run has to grow at either end.

use std::collections::VecDeque;

use crate::models::month::MonthId;
use crate::utils::date::week_rows;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthWindow {
    months: VecDeque<MonthId>,
}

impl MonthWindow {
    /// `center - radius ..= center + radius`
    pub fn around(center: MonthId, radius: u32) -> Self {
        let radius = radius as i32;
        let months = (-radius..=radius).map(|offset| center.offset(offset)).collect();
        Self { months }
    }

    /// Add `count` months before the first one. Returns them oldest first.
    pub fn prepend(&mut self, count: u32) -> Vec<MonthId> {
        let Some(&first) = self.months.front() else {
            return Vec::new();
        };

        let added: Vec<MonthId> = (1..=count as i32)
            .rev()
            .map(|step| first.offset(-step))
            .collect();
        for month in added.iter().rev() {
            self.months.push_front(*month);
        }
        added
    }

    /// Add `count` months after the last one. Returns them oldest first.
    pub fn append(&mut self, count: u32) -> Vec<MonthId> {
        let Some(&last) = self.months.back() else {
            return Vec::new();
        };

        let added: Vec<MonthId> = (1..=count as i32).map(|step| last.offset(step)).collect();
        self.months.extend(added.iter().copied());
        added
    }

    /// Grow the window until it contains `target`, in whole batches.
    /// Returns the months added before the start, oldest first.
    pub fn extend_to(&mut self, target: MonthId, batch: u32) -> Vec<MonthId> {
        let batch = batch.max(1);
        let mut prepended = Vec::new();

        while self.first().is_some_and(|first| target < first) {
            let mut added = self.prepend(batch);
            added.append(&mut prepended);
            prepended = added;
        }
        while self.last().is_some_and(|last| target > last) {
            self.append(batch);
        }
        prepended
    }

    pub fn months(&self) -> impl Iterator<Item = MonthId> + '_ {
        self.months.iter().copied()
    }

    pub fn first(&self) -> Option<MonthId> {
        self.months.front().copied()
    }

    pub fn last(&self) -> Option<MonthId> {
        self.months.back().copied()
    }

    pub fn len(&self) -> usize {
        self.months.len()
    }

    pub fn is_empty(&self) -> bool {
        self.months.is_empty()
    }

    pub fn contains(&self, month: MonthId) -> bool {
        self.position(month).is_some()
    }

    pub fn position(&self, month: MonthId) -> Option<usize> {
        let first = self.first()?;
        let idx = first.months_until(month);
        (idx >= 0 && (idx as usize) < self.months.len()).then_some(idx as usize)
    }
}

/// Which ends of the window need to grow this frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Extension {
    pub prepend: bool,
    pub append: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollMetrics {
    pub offset: f32,
    pub viewport_height: f32,
    pub content_height: f32,
}

impl ScrollMetrics {
    pub fn bottom(&self) -> f32 {
        self.offset + self.viewport_height
    }

    /// Grow when the viewport is within `viewport_height * ratio` of an end.
    pub fn extension(&self, ratio: f32) -> Extension {
        let threshold = self.viewport_height * ratio;
        Extension {
            prepend: self.offset < threshold,
            append: self.bottom() > self.content_height - threshold,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthSpan {
    pub month: MonthId,
    pub top: f32,
    pub height: f32,
}

impl MonthSpan {
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    pub fn visible_height(&self, offset: f32, viewport_height: f32) -> f32 {
        let visible_top = self.top.max(offset);
        let visible_bottom = self.bottom().min(offset + viewport_height);
        (visible_bottom - visible_top).max(0.0)
    }
}

/// Row geometry shared by every month block.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowGeometry {
    pub row_height: f32,
    pub header_height: f32,
    pub gap: f32,
}

impl RowGeometry {
    pub fn month_height(&self, month: MonthId) -> f32 {
        week_rows(month.year, month.month) as f32 * self.row_height + self.header_height
    }

    pub fn height_of(&self, months: &[MonthId]) -> f32 {
        months
            .iter()
            .map(|month| self.month_height(*month) + self.gap)
            .sum()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MonthLayout {
    spans: Vec<MonthSpan>,
    total_height: f32,
}

impl MonthLayout {
    pub fn compute(window: &MonthWindow, geometry: RowGeometry) -> Self {
        let mut top = 0.0;
        let mut spans = Vec::with_capacity(window.len());

        for month in window.months() {
            let height = geometry.month_height(month);
            spans.push(MonthSpan { month, top, height });
            top += height + geometry.gap;
        }

        Self {
            spans,
            total_height: top,
        }
    }

    pub fn spans(&self) -> &[MonthSpan] {
        &self.spans
    }

    pub fn total_height(&self) -> f32 {
        self.total_height
    }

    pub fn top_of(&self, month: MonthId) -> Option<f32> {
        self.spans
            .iter()
            .find(|span| span.month == month)
            .map(|span| span.top)
    }

    /// The month with the largest visible overlap. Ties keep the earlier
    /// month; when nothing overlaps, `current` is kept.
    pub fn most_visible(&self, offset: f32, viewport_height: f32, current: MonthId) -> MonthId {
        let mut best = current;
        let mut best_visible = 0.0;

        for span in &self.spans {
            let visible = span.visible_height(offset, viewport_height);
            if visible > best_visible {
                best_visible = visible;
                best = span.month;
            }
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn month(year: i32, month: u32) -> MonthId {
        MonthId::new(year, month).unwrap()
    }

    fn geometry() -> RowGeometry {
        RowGeometry {
            row_height: 100.0,
            header_height: 0.0,
            gap: 0.0,
        }
    }

    #[test]
    fn test_around_builds_five_months() {
        let window = MonthWindow::around(month(2025, 1), 2);
        let months: Vec<_> = window.months().collect();
        assert_eq!(
            months,
            vec![
                month(2024, 11),
                month(2024, 12),
                month(2025, 1),
                month(2025, 2),
                month(2025, 3)
            ]
        );
    }

    #[test]
    fn test_prepend_returns_added_months_in_order() {
        let mut window = MonthWindow::around(month(2025, 3), 0);
        let added = window.prepend(3);
        assert_eq!(added, vec![month(2024, 12), month(2025, 1), month(2025, 2)]);
        assert_eq!(window.first(), Some(month(2024, 12)));
        assert_eq!(window.len(), 4);
    }

    #[test]
    fn test_append_rolls_year() {
        let mut window = MonthWindow::around(month(2025, 11), 0);
        let added = window.append(2);
        assert_eq!(added, vec![month(2025, 12), month(2026, 1)]);
        assert_eq!(window.last(), Some(month(2026, 1)));
    }

    #[test]
    fn test_extend_to_reaches_distant_month() {
        let mut window = MonthWindow::around(month(2025, 6), 2);
        let prepended = window.extend_to(month(2024, 1), 6);

        assert!(window.contains(month(2024, 1)));
        assert_eq!(prepended.len(), 18);
        assert_eq!(window.first(), prepended.first().copied());

        let prepended = window.extend_to(month(2026, 2), 6);
        assert!(prepended.is_empty());
        assert!(window.contains(month(2026, 2)));
    }

    #[test]
    fn test_position() {
        let window = MonthWindow::around(month(2025, 1), 2);
        assert_eq!(window.position(month(2024, 11)), Some(0));
        assert_eq!(window.position(month(2025, 3)), Some(4));
        assert_eq!(window.position(month(2025, 4)), None);
        assert_eq!(window.position(month(2024, 10)), None);
    }

    #[test]
    fn test_extension_thresholds() {
        let near_top = ScrollMetrics {
            offset: 100.0,
            viewport_height: 500.0,
            content_height: 5000.0,
        };
        assert_eq!(
            near_top.extension(0.9),
            Extension {
                prepend: true,
                append: false
            }
        );

        let middle = ScrollMetrics {
            offset: 2000.0,
            ..near_top
        };
        assert_eq!(middle.extension(0.9), Extension::default());

        let near_bottom = ScrollMetrics {
            offset: 4100.0,
            ..near_top
        };
        assert!(near_bottom.extension(0.9).append);
        assert!(!near_bottom.extension(0.9).prepend);
    }

    #[test]
    fn test_most_visible_tie_keeps_earlier_month() {
        // Jan 2026 spans 0..500, Feb 2026 spans 500..900
        let window = MonthWindow::around(month(2026, 2), 1);
        let layout = MonthLayout::compute(&window, geometry());
        assert_eq!(layout.top_of(month(2026, 2)), Some(500.0));

        // 100 points of each month are on screen
        assert_eq!(
            layout.most_visible(400.0, 200.0, month(2026, 2)),
            month(2026, 1)
        );
        assert_eq!(
            layout.most_visible(400.0, 200.0, month(2026, 3)),
            month(2026, 1)
        );
        assert_eq!(
            layout.most_visible(401.0, 200.0, month(2026, 1)),
            month(2026, 2)
        );
    }

    #[test]
    fn test_layout_stacks_months() {
        // Feb 2026 has four rows, Mar 2026 five
        let window = MonthWindow::around(month(2026, 2), 0);
        let mut window = window;
        window.append(1);
        let layout = MonthLayout::compute(&window, geometry());

        assert_eq!(layout.top_of(month(2026, 2)), Some(0.0));
        assert_eq!(layout.top_of(month(2026, 3)), Some(400.0));
        assert_eq!(layout.total_height(), 900.0);
    }

    #[test]
    fn test_most_visible_picks_largest_overlap() {
        let mut window = MonthWindow::around(month(2026, 2), 0);
        window.append(1);
        let layout = MonthLayout::compute(&window, geometry());

        // viewport 300..700 overlaps Feb by 100, Mar by 300
        assert_eq!(layout.most_visible(300.0, 400.0, month(2026, 2)), month(2026, 3));
        // viewport 0..400 is all Feb
        assert_eq!(layout.most_visible(0.0, 400.0, month(2026, 3)), month(2026, 2));
    }

    #[test]
    fn test_most_visible_keeps_current_when_nothing_visible() {
        let window = MonthWindow::around(month(2026, 2), 0);
        let layout = MonthLayout::compute(&window, geometry());
        let current = month(2030, 1);
        assert_eq!(layout.most_visible(5000.0, 400.0, current), current);
    }

    #[test]
    fn test_height_of_matches_layout() {
        let window = MonthWindow::around(month(2025, 3), 1);
        let months: Vec<_> = window.months().collect();
        let geometry = RowGeometry {
            row_height: 80.0,
            header_height: 12.0,
            gap: 4.0,
        };
        let layout = MonthLayout::compute(&window, geometry);
        assert_eq!(geometry.height_of(&months), layout.total_height());
    }
}
