mod app;
pub mod journal_cards;
pub mod theme;
pub mod views;

pub use app::DiaryApp;
