//! Journal entry service.
//!
//! Holds the entry list in display order together with a per-day index used
//! by the month grid. The list order is also the carousel order.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;

use crate::models::journal::JournalEntry;
use crate::models::settings::Settings;

const BUNDLED_ENTRIES: &str = include_str!("../../../assets/journal_entries.json");

#[derive(Debug, Default)]
pub struct JournalService {
    entries: Vec<JournalEntry>,
    by_date: HashMap<NaiveDate, Vec<usize>>,
}

impl JournalService {
    pub fn from_entries(entries: Vec<JournalEntry>) -> Self {
        let mut by_date: HashMap<NaiveDate, Vec<usize>> = HashMap::new();

        for (idx, entry) in entries.iter().enumerate() {
            match entry.parsed_date() {
                Ok(date) => by_date.entry(date).or_default().push(idx),
                Err(err) => log::warn!("Entry {} not shown on the calendar: {}", idx, err),
            }
        }

        Self { entries, by_date }
    }

    /// Sample entries compiled into the binary.
    pub fn load_bundled() -> Result<Self> {
        let entries: Vec<JournalEntry> = serde_json::from_str(BUNDLED_ENTRIES)
            .context("Failed to parse bundled journal entries")?;
        Ok(Self::from_entries(entries))
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)
            .with_context(|| format!("Failed to read journal entries from {}", path.display()))?;
        let entries: Vec<JournalEntry> = serde_json::from_str(&data)
            .with_context(|| format!("Failed to parse journal entries in {}", path.display()))?;
        Ok(Self::from_entries(entries))
    }

    /// Entries for the configured file, or the bundled sample when no file is
    /// configured or it cannot be loaded.
    pub fn load(settings: &Settings) -> Result<Self> {
        if let Some(path) = settings.entries_path.as_deref() {
            match Self::load_from_path(path) {
                Ok(service) => {
                    log::info!(
                        "Loaded {} journal entries from {}",
                        service.len(),
                        path.display()
                    );
                    return Ok(service);
                }
                Err(err) => {
                    log::warn!("{:#}; falling back to bundled entries", err);
                }
            }
        }

        Self::load_bundled()
    }

    pub fn entries(&self) -> &[JournalEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&JournalEntry> {
        self.entries.get(index)
    }

    /// Indices of the entries on `date`, in list order. Empty when none.
    pub fn indices_on(&self, date: NaiveDate) -> &[usize] {
        self.by_date.get(&date).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn entries_on(&self, date: NaiveDate) -> Vec<&JournalEntry> {
        self.indices_on(date)
            .iter()
            .filter_map(|&idx| self.entries.get(idx))
            .collect()
    }

    /// The entry a calendar cell shows for `date`.
    pub fn first_entry_on(&self, date: NaiveDate) -> Option<(usize, &JournalEntry)> {
        let idx = *self.indices_on(date).first()?;
        self.entries.get(idx).map(|entry| (idx, entry))
    }

    /// Position of the first entry whose raw date string equals `date`.
    pub fn index_of_date(&self, date: &str) -> Option<usize> {
        self.entries.iter().position(|entry| entry.date == date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(date: &str, rating: f32) -> JournalEntry {
        JournalEntry {
            img_url: format!("https://example.com/{}.jpg", date.replace('/', "-")),
            rating,
            categories: vec!["Wash day".to_string()],
            date: date.to_string(),
            description: String::new(),
        }
    }

    #[test]
    fn test_bundled_entries_parse() {
        let service = JournalService::load_bundled().unwrap();
        assert!(!service.is_empty());
        assert!(service.entries().iter().all(|e| e.validate().is_ok()));
    }

    #[test]
    fn test_entries_grouped_by_day() {
        let service = JournalService::from_entries(vec![
            entry("1/3/2025", 4.0),
            entry("01/03/2025", 2.0),
            entry("2/3/2025", 3.0),
        ]);
        let date = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();

        assert_eq!(service.indices_on(date), &[0, 1]);
        assert_eq!(service.first_entry_on(date).map(|(idx, _)| idx), Some(0));
    }

    #[test]
    fn test_unmatched_date_is_empty() {
        let service = JournalService::from_entries(vec![entry("1/3/2025", 4.0)]);
        let date = NaiveDate::from_ymd_opt(2030, 1, 1).unwrap();

        assert!(service.entries_on(date).is_empty());
        assert!(service.first_entry_on(date).is_none());
    }

    #[test]
    fn test_invalid_date_kept_but_not_indexed() {
        let service =
            JournalService::from_entries(vec![entry("yesterday", 4.0), entry("1/3/2025", 1.0)]);

        assert_eq!(service.len(), 2);
        assert_eq!(service.index_of_date("yesterday"), Some(0));
        let date = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        assert_eq!(service.indices_on(date), &[1]);
    }

    #[test]
    fn test_index_of_date_matches_raw_string() {
        let service = JournalService::from_entries(vec![entry("1/3/2025", 4.0)]);
        assert_eq!(service.index_of_date("1/3/2025"), Some(0));
        assert_eq!(service.index_of_date("01/03/2025"), None);
    }
}
