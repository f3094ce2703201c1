// Test fixtures - reusable journal data
// Provides consistent entries across the integration tests

use hair_diary::models::journal::JournalEntry;
use hair_diary::models::month::MonthId;

/// Sample months for testing
pub mod months {
    use super::*;

    /// February 2024 (leap year, starts on a Thursday)
    pub fn feb_2024() -> MonthId {
        MonthId::new(2024, 2).unwrap()
    }

    /// March 2025 (starts on a Saturday, spans six week rows)
    pub fn mar_2025() -> MonthId {
        MonthId::new(2025, 3).unwrap()
    }

    /// December 2025, the last month before a year boundary
    pub fn dec_2025() -> MonthId {
        MonthId::new(2025, 12).unwrap()
    }
}

/// Sample journal entries for testing
pub mod entries {
    use super::*;

    pub fn entry(date: &str, rating: f32, category: &str) -> JournalEntry {
        JournalEntry::new(
            format!("https://example.com/{}.jpg", date.replace('/', "-")),
            rating,
            date,
        )
        .unwrap()
        .with_categories([category])
        .with_description(format!("Notes for {}", date))
    }

    /// Four entries across two months, two of them on the same day
    pub fn small_journal() -> Vec<JournalEntry> {
        vec![
            entry("3/3/2025", 4.5, "Cut"),
            entry("3/3/2025", 3.0, "Protein Treatment"),
            entry("17/3/2025", 5.0, "Hair Color"),
            entry("2/4/2025", 2.5, "Deep Conditioning"),
        ]
    }

    /// The same journal as a JSON document in the on-disk format
    pub fn small_journal_json() -> String {
        serde_json::to_string_pretty(&small_journal()).unwrap()
    }
}
