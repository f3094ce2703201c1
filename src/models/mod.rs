// Module exports for models

pub mod journal;
pub mod month;
pub mod settings;
