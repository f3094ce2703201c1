//! Infinitely scrolling month list.
//!
//! Months are laid out from a `MonthWindow`; only blocks intersecting the
//! viewport are painted. Scrolling near either end grows the window by a
//! batch of months, and when months are prepended the scroll offset is moved
//! down by their height so the visible content stays put. The month with the
//! largest visible share drives the header label.

use egui::{Rect, Vec2};

use super::month_grid::{MonthGrid, MonthGridAction};
use super::month_window::{MonthLayout, MonthWindow, RowGeometry, ScrollMetrics};
use crate::models::month::MonthId;
use crate::models::settings::Settings;
use crate::services::journal::JournalService;
use crate::ui_egui::theme::DiaryTheme;

/// Minimum height of a week row
const MIN_ROW_HEIGHT: f32 = 90.0;
/// Maximum height of a week row on wide windows
const MAX_ROW_HEIGHT: f32 = 200.0;
/// Duration of a header-driven smooth scroll, in seconds
const SMOOTH_SCROLL_SECS: f64 = 0.35;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalendarConfig {
    pub initial_radius: u32,
    pub batch_size: u32,
    pub extension_ratio: f32,
    /// Delay before the first jump to the current month, in seconds
    pub initial_scroll_delay: f64,
    /// Time after the first jump during which scrolling is not tracked
    pub initial_settle: f64,
}

impl From<&Settings> for CalendarConfig {
    fn from(settings: &Settings) -> Self {
        Self {
            initial_radius: settings.initial_radius,
            batch_size: settings.batch_size.max(1),
            extension_ratio: settings.extension_ratio,
            initial_scroll_delay: settings.initial_scroll_delay_ms as f64 / 1000.0,
            initial_settle: settings.initial_settle_ms as f64 / 1000.0,
        }
    }
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self::from(&Settings::default())
    }
}

/// Startup sequence: wait, jump to the current month, settle, then track.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LoadPhase {
    WaitingForInitialScroll { since: Option<f64> },
    Settling { until: f64 },
    Ready,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct ScrollAnimation {
    from: f32,
    target: MonthId,
    start: Option<f64>,
}

pub fn ease_in_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// Action returned from the calendar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalendarAction {
    None,
    OpenEntry(usize),
}

pub struct InfiniteCalendar {
    config: CalendarConfig,
    window: MonthWindow,
    current: MonthId,
    phase: LoadPhase,
    /// Offset to force on the next frame
    pending_offset: Option<f32>,
    animation: Option<ScrollAnimation>,
    last_offset: f32,
    last_geometry: Option<RowGeometry>,
    /// Scroll requested before the first frame, replayed once rows are sized
    deferred_target: Option<MonthId>,
    layout: MonthLayout,
    /// Geometry, first month and length the cached layout was built from
    layout_key: Option<(RowGeometry, Option<MonthId>, usize)>,
}

impl InfiniteCalendar {
    pub fn new(config: CalendarConfig, today: MonthId) -> Self {
        Self {
            window: MonthWindow::around(today, config.initial_radius),
            config,
            current: today,
            phase: LoadPhase::WaitingForInitialScroll { since: None },
            pending_offset: None,
            animation: None,
            last_offset: 0.0,
            last_geometry: None,
            deferred_target: None,
            layout: MonthLayout::default(),
            layout_key: None,
        }
    }

    pub fn current_month(&self) -> MonthId {
        self.current
    }

    pub fn window(&self) -> &MonthWindow {
        &self.window
    }

    pub fn phase(&self) -> LoadPhase {
        self.phase
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    pub fn previous_month(&mut self) {
        self.scroll_to_month(self.current.previous());
    }

    pub fn next_month(&mut self) {
        self.scroll_to_month(self.current.next());
    }

    /// Smoothly scroll so `target`'s first row sits at the top of the view.
    /// Months outside the window are laid out first.
    pub fn scroll_to_month(&mut self, target: MonthId) {
        log::debug!("Scrolling to {}", target);

        let mut from = self.last_offset;
        if !self.window.contains(target) {
            let Some(geometry) = self.last_geometry else {
                self.deferred_target = Some(target);
                return;
            };
            let prepended = self.window.extend_to(target, self.config.batch_size);
            if !prepended.is_empty() {
                from += geometry.height_of(&prepended);
                self.pending_offset = Some(from);
            }
        }

        self.animation = Some(ScrollAnimation {
            from,
            target,
            start: None,
        });
    }

    /// Record the row geometry of this frame and replay a scroll that arrived
    /// before any geometry was known.
    fn set_geometry(&mut self, geometry: RowGeometry) {
        self.last_geometry = Some(geometry);
        if let Some(target) = self.deferred_target.take() {
            self.scroll_to_month(target);
        }
    }

    /// Rebuild the cached layout when the window or geometry changed.
    /// Returns whether it was rebuilt.
    fn refresh_layout(&mut self, geometry: RowGeometry) -> bool {
        let key = (geometry, self.window.first(), self.window.len());
        if self.layout_key == Some(key) {
            return false;
        }
        self.layout = MonthLayout::compute(&self.window, geometry);
        self.layout_key = Some(key);
        true
    }

    /// Advance the startup sequence. Returns the offset to jump to when the
    /// initial scroll fires.
    pub fn tick_phase(&mut self, now: f64, layout: &MonthLayout) -> Option<f32> {
        match self.phase {
            LoadPhase::WaitingForInitialScroll { since: None } => {
                self.phase = LoadPhase::WaitingForInitialScroll { since: Some(now) };
                self.tick_phase(now, layout)
            }
            LoadPhase::WaitingForInitialScroll { since: Some(since) } => {
                if now - since < self.config.initial_scroll_delay {
                    return None;
                }
                log::info!("Initial scroll to current month {}", self.current);
                self.phase = LoadPhase::Settling {
                    until: now + self.config.initial_settle,
                };
                layout.top_of(self.current)
            }
            LoadPhase::Settling { until } => {
                if now >= until {
                    self.phase = LoadPhase::Ready;
                }
                None
            }
            LoadPhase::Ready => None,
        }
    }

    /// Offset the smooth-scroll animation wants this frame.
    fn animated_offset(&mut self, now: f64, layout: &MonthLayout) -> Option<f32> {
        let animation = self.animation.as_mut()?;
        let Some(target) = layout.top_of(animation.target) else {
            log::warn!("Month not laid out: {}", animation.target);
            self.animation = None;
            return None;
        };

        let start = *animation.start.get_or_insert(now);
        let t = ((now - start) / SMOOTH_SCROLL_SECS) as f32;
        let offset = animation.from + (target - animation.from) * ease_in_out_cubic(t);

        if t >= 1.0 {
            self.animation = None;
        }
        Some(offset)
    }

    /// React to the scroll position after a frame: grow the window near its
    /// ends and track the most visible month. Returns the corrected offset
    /// when months were prepended.
    pub fn after_scroll(
        &mut self,
        metrics: ScrollMetrics,
        geometry: RowGeometry,
        layout: &MonthLayout,
    ) -> Option<f32> {
        self.last_offset = metrics.offset;
        self.last_geometry = Some(geometry);

        if self.phase != LoadPhase::Ready {
            return None;
        }

        let extension = metrics.extension(self.config.extension_ratio);
        let mut corrected = None;

        if extension.prepend {
            let added = self.window.prepend(self.config.batch_size);
            let shift = geometry.height_of(&added);
            log::debug!(
                "Prepended {} months before {:?}, shifting offset by {}",
                added.len(),
                added.last(),
                shift
            );
            if let Some(animation) = self.animation.as_mut() {
                animation.from += shift;
            }
            self.last_offset = metrics.offset + shift;
            corrected = Some(self.last_offset);
        }
        if extension.append {
            let added = self.window.append(self.config.batch_size);
            log::debug!("Appended {} months after {:?}", added.len(), added.first());
        }

        let most_visible = layout.most_visible(metrics.offset, metrics.viewport_height, self.current);
        if most_visible != self.current {
            self.current = most_visible;
        }

        corrected
    }

    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        journal: &JournalService,
        theme: &DiaryTheme,
    ) -> CalendarAction {
        let now = ui.input(|i| i.time);
        // Scroll bars float over the content, so rows span the full width
        let width = ui.available_width().max(7.0);
        let geometry = RowGeometry {
            row_height: (width / 7.0).clamp(MIN_ROW_HEIGHT, MAX_ROW_HEIGHT),
            header_height: 0.0,
            gap: 0.0,
        };
        self.set_geometry(geometry);
        self.refresh_layout(geometry);
        let layout = std::mem::take(&mut self.layout);

        if let Some(offset) = self.tick_phase(now, &layout) {
            self.pending_offset = Some(offset);
        }
        let forced_offset = self
            .animated_offset(now, &layout)
            .or(self.pending_offset.take());

        let mut scroll_area = egui::ScrollArea::vertical()
            .id_source("infinite_calendar")
            .auto_shrink([false, false]);
        if let Some(offset) = forced_offset {
            scroll_area = scroll_area.vertical_scroll_offset(offset.max(0.0));
        }

        let mut action = CalendarAction::None;
        let output = scroll_area.show_viewport(ui, |ui, viewport| {
            ui.set_height(layout.total_height());
            let origin = ui.min_rect().min;
            let content_width = ui.available_width();

            for span in layout.spans() {
                if span.bottom() < viewport.min.y || span.top > viewport.max.y {
                    continue;
                }
                let rect = Rect::from_min_size(
                    origin + Vec2::new(0.0, span.top),
                    Vec2::new(content_width, span.height),
                );
                let active = span.month == self.current;
                let grid_action = ui
                    .allocate_ui_at_rect(rect, |month_ui| {
                        MonthGrid::show(
                            month_ui,
                            span.month,
                            journal,
                            theme,
                            active,
                            geometry.row_height,
                        )
                    })
                    .inner;

                if let MonthGridAction::OpenEntry(index) = grid_action {
                    action = CalendarAction::OpenEntry(index);
                }
            }
        });

        let metrics = ScrollMetrics {
            offset: output.state.offset.y,
            viewport_height: output.inner_rect.height(),
            content_height: output.content_size.y,
        };
        if let Some(corrected) = self.after_scroll(metrics, geometry, &layout) {
            self.pending_offset = Some(corrected);
        }

        if self.phase != LoadPhase::Ready || self.animation.is_some() || self.pending_offset.is_some()
        {
            ui.ctx().request_repaint();
        }

        self.layout = layout;
        action
    }
}
