// Journal entry model
// One dated photo with a star rating, category labels and a description

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::utils::date::parse_journal_date;

/// Highest rating a journal entry can carry.
pub const MAX_RATING: f32 = 5.0;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum JournalError {
    #[error("invalid journal date '{0}', expected D/M/YYYY")]
    InvalidDate(String),
    #[error("rating {0} is outside 0..={MAX_RATING}")]
    RatingOutOfRange(f32),
}

/// A single journal entry as stored in the entry list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalEntry {
    pub img_url: String,
    pub rating: f32,
    #[serde(default)]
    pub categories: Vec<String>,
    /// Day-first date string, `D/M/YYYY`
    pub date: String,
    #[serde(default)]
    pub description: String,
}

impl JournalEntry {
    pub fn new(
        img_url: impl Into<String>,
        rating: f32,
        date: impl Into<String>,
    ) -> Result<Self, JournalError> {
        let entry = Self {
            img_url: img_url.into(),
            rating,
            categories: Vec::new(),
            date: date.into(),
            description: String::new(),
        };
        entry.validate()?;
        Ok(entry)
    }

    pub fn with_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories = categories.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn parsed_date(&self) -> Result<NaiveDate, JournalError> {
        parse_journal_date(&self.date).ok_or_else(|| JournalError::InvalidDate(self.date.clone()))
    }

    /// First character of the first category, used for the card badge.
    pub fn category_initial(&self) -> Option<char> {
        self.categories
            .first()
            .and_then(|category| category.trim().chars().next())
    }

    /// Rating clamped into the displayable range.
    pub fn display_rating(&self) -> f32 {
        if self.rating.is_finite() {
            self.rating.clamp(0.0, MAX_RATING)
        } else {
            0.0
        }
    }

    pub fn validate(&self) -> Result<(), JournalError> {
        if !self.rating.is_finite() || !(0.0..=MAX_RATING).contains(&self.rating) {
            return Err(JournalError::RatingOutOfRange(self.rating));
        }
        self.parsed_date()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_entry_validates_date() {
        let err = JournalEntry::new("https://example.com/a.jpg", 4.0, "2025-03-05").unwrap_err();
        assert_eq!(err, JournalError::InvalidDate("2025-03-05".to_string()));
    }

    #[test]
    fn test_new_entry_validates_rating() {
        let err = JournalEntry::new("https://example.com/a.jpg", 5.5, "5/3/2025").unwrap_err();
        assert_eq!(err, JournalError::RatingOutOfRange(5.5));
        assert!(JournalEntry::new("https://example.com/a.jpg", f32::NAN, "5/3/2025").is_err());
    }

    #[test]
    fn test_category_initial() {
        let entry = JournalEntry::new("img", 3.0, "1/1/2025")
            .unwrap()
            .with_categories(["Wash day", "Curls"]);
        assert_eq!(entry.category_initial(), Some('W'));

        let empty = JournalEntry::new("img", 3.0, "1/1/2025").unwrap();
        assert_eq!(empty.category_initial(), None);
    }

    #[test]
    fn test_deserializes_camel_case_fields() {
        let json = r#"{
            "imgUrl": "https://example.com/a.jpg",
            "rating": 4.5,
            "categories": ["Protein treatment"],
            "date": "12/10/2026",
            "description": "Soft and shiny."
        }"#;
        let entry: JournalEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.img_url, "https://example.com/a.jpg");
        assert_eq!(entry.parsed_date().unwrap(), NaiveDate::from_ymd_opt(2026, 10, 12).unwrap());
        assert_eq!(entry.description, "Soft and shiny.");
    }

    #[test]
    fn test_display_rating_clamps() {
        let mut entry = JournalEntry::new("img", 3.0, "1/1/2025").unwrap();
        entry.rating = 9.0;
        assert_eq!(entry.display_rating(), MAX_RATING);
        entry.rating = -1.0;
        assert_eq!(entry.display_rating(), 0.0);
    }
}
