//! Card carousel state.
//!
//! Tracks the shown entry, the live drag offset and the slide transition
//! between two cards. Poses are derived from elapsed time so the renderer
//! only has to ask for a `CarouselFrame` each frame.

use super::motion::{fade_in, Spring};
use crate::services::journal::JournalService;

/// Horizontal distance a card travels when entering or leaving
pub const SLIDE_DISTANCE: f32 = 1000.0;
/// Opacity fade duration in seconds
pub const FADE_SECS: f32 = 0.2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeOutcome {
    Previous,
    Next,
    SnapBack,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct CardTransition {
    from_index: usize,
    /// +1 when moving forward, -1 when moving back
    direction: i8,
    /// Where the leaving card was released
    from_offset: f32,
    started_at: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct SnapBack {
    from_offset: f32,
    started_at: Option<f64>,
}

/// Where a card is drawn this frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardPose {
    pub index: usize,
    pub offset_x: f32,
    pub opacity: f32,
    /// The card accepting drags
    pub is_current: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CarouselFrame {
    /// Back to front
    pub cards: Vec<CardPose>,
    pub animating: bool,
}

#[derive(Debug, Clone)]
pub struct CardCarousel {
    index: usize,
    len: usize,
    direction: i8,
    swipe_threshold: f32,
    drag_offset: f32,
    dragging: bool,
    snap_back: Option<SnapBack>,
    transition: Option<CardTransition>,
    spring: Spring,
}

impl CardCarousel {
    pub fn new(len: usize, swipe_threshold: f32) -> Self {
        Self {
            index: 0,
            len,
            direction: 0,
            swipe_threshold,
            drag_offset: 0.0,
            dragging: false,
            snap_back: None,
            transition: None,
            spring: Spring::default(),
        }
    }

    /// Carousel starting at the first entry dated `target_date`, or at the
    /// first entry when none matches. `None` when there is nothing to show.
    pub fn open_at(journal: &JournalService, target_date: &str, swipe_threshold: f32) -> Option<Self> {
        if journal.is_empty() {
            return None;
        }
        let mut carousel = Self::new(journal.len(), swipe_threshold);
        if let Some(index) = journal.index_of_date(target_date) {
            carousel.index = index;
        }
        Some(carousel)
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn direction(&self) -> i8 {
        self.direction
    }

    pub fn drag_offset(&self) -> f32 {
        self.drag_offset
    }

    /// Share of the list seen so far, `(index + 1) / len`.
    pub fn progress(&self) -> f32 {
        if self.len == 0 {
            return 0.0;
        }
        (self.index + 1) as f32 / self.len as f32
    }

    /// Follow the pointer; the card tracks the drag one to one.
    pub fn drag_by(&mut self, dx: f32) {
        if !self.dragging {
            self.dragging = true;
            if let Some(snap) = self.snap_back.take() {
                self.drag_offset = snap.from_offset;
            }
        }
        self.drag_offset += dx;
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// End a drag. Past the threshold the carousel moves one card toward the
    /// drag, if there is a card on that side; otherwise it springs back.
    pub fn release(&mut self) -> SwipeOutcome {
        self.dragging = false;
        let offset = std::mem::take(&mut self.drag_offset);

        if offset.abs() > self.swipe_threshold {
            if offset > 0.0 && self.index > 0 {
                self.step(-1, offset);
                return SwipeOutcome::Previous;
            }
            if offset < 0.0 && self.index + 1 < self.len {
                self.step(1, offset);
                return SwipeOutcome::Next;
            }
        }

        if offset != 0.0 {
            self.snap_back = Some(SnapBack {
                from_offset: offset,
                started_at: None,
            });
        }
        SwipeOutcome::SnapBack
    }

    pub fn go_previous(&mut self) -> bool {
        if self.index == 0 {
            return false;
        }
        self.step(-1, 0.0);
        true
    }

    pub fn go_next(&mut self) -> bool {
        if self.index + 1 >= self.len {
            return false;
        }
        self.step(1, 0.0);
        true
    }

    fn step(&mut self, direction: i8, from_offset: f32) {
        let from_index = self.index;
        self.index = if direction < 0 {
            self.index - 1
        } else {
            self.index + 1
        };
        self.direction = direction;
        self.snap_back = None;
        self.transition = Some(CardTransition {
            from_index,
            direction,
            from_offset,
            started_at: None,
        });
        log::debug!("Card {} -> {}", from_index, self.index);
    }

    /// Card poses at `now` (seconds). Finished animations are dropped.
    pub fn frame(&mut self, now: f64) -> CarouselFrame {
        let mut cards = Vec::with_capacity(2);
        let mut current_offset = self.drag_offset;
        let mut current_opacity = 1.0;

        if let Some(snap) = self.snap_back.as_mut() {
            let t = (now - *snap.started_at.get_or_insert(now)) as f32;
            if t >= self.spring.settle_time(snap.from_offset) {
                self.snap_back = None;
            } else {
                current_offset += self.spring.displacement(snap.from_offset, t);
            }
        }

        if let Some(transition) = self.transition.as_mut() {
            let t = (now - *transition.started_at.get_or_insert(now)) as f32;
            let dir = transition.direction as f32;

            if t >= self.spring.settle_time(SLIDE_DISTANCE).max(FADE_SECS) {
                self.transition = None;
            } else {
                let remaining = self.spring.remaining(t);
                let fade = fade_in(t, FADE_SECS);

                let exit = -dir * SLIDE_DISTANCE;
                cards.push(CardPose {
                    index: transition.from_index,
                    offset_x: transition.from_offset
                        + (exit - transition.from_offset) * (1.0 - remaining),
                    opacity: 1.0 - fade,
                    is_current: false,
                });
                current_offset += dir * SLIDE_DISTANCE * remaining;
                current_opacity = fade;
            }
        }

        cards.push(CardPose {
            index: self.index,
            offset_x: current_offset,
            opacity: current_opacity,
            is_current: true,
        });

        CarouselFrame {
            cards,
            animating: self.transition.is_some() || self.snap_back.is_some(),
        }
    }
}
