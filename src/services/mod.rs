// Service module exports

pub mod journal;
pub mod settings;
