//! Modal carousel of journal cards.
//!
//! Opened from a calendar cell; swiping a card sideways (or the arrow keys)
//! moves through the whole entry list in list order.

mod carousel;
pub mod motion;
mod render;

pub use carousel::{CardCarousel, CardPose, CarouselFrame, SwipeOutcome, FADE_SECS, SLIDE_DISTANCE};
pub use render::{JournalCards, JournalCardsAction};
