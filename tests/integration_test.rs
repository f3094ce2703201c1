// Integration tests for settings persistence and journal loading
mod fixtures;

use fixtures::{entries, months};
use hair_diary::models::settings::Settings;
use hair_diary::services::journal::JournalService;
use hair_diary::services::settings::{load_settings_or_default, SettingsService};
use hair_diary::ui_egui::journal_cards::{CardCarousel, SwipeOutcome};
use hair_diary::ui_egui::views::month_window::{MonthLayout, MonthWindow, RowGeometry};
use hair_diary::utils::date::{generate_calendar_days, week_rows};
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_settings_persistence() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let settings_service = SettingsService::new(dir.path().join("config").join("settings.toml"));

    // First launch has no file yet
    let mut settings = settings_service.get().expect("Failed to get settings");
    assert_eq!(settings, Settings::default());

    // Simulate preference changes
    settings.theme = "dark".to_string();
    settings.batch_size = 3;
    settings.swipe_threshold = 80.0;
    settings.entries_path = Some(dir.path().join("entries.json"));

    settings_service
        .update(&settings)
        .expect("Failed to update settings");

    let loaded = settings_service.get().expect("Failed to load settings");
    assert_eq!(loaded, settings);
    assert!(loaded.is_dark());
}

#[test]
fn test_app_lifecycle_simulation() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("settings.toml");

    // Simulate first app launch
    {
        let service = SettingsService::new(&path);
        let mut settings = load_settings_or_default(&service);
        settings.initial_radius = 4;
        service.update(&settings).expect("Failed to save settings");
    }

    // Simulate restart
    {
        let service = SettingsService::new(&path);
        let settings = load_settings_or_default(&service);
        assert_eq!(settings.initial_radius, 4);

        service.reset().expect("Failed to reset settings");
        assert_eq!(service.get().unwrap(), Settings::default());
    }
}

#[test]
fn test_corrupt_settings_fall_back_to_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("settings.toml");
    fs::write(&path, "theme = [not toml").unwrap();

    let service = SettingsService::new(&path);
    assert!(service.get().is_err());
    assert_eq!(load_settings_or_default(&service), Settings::default());
}

#[test]
fn test_invalid_settings_are_rejected_on_update() {
    let dir = TempDir::new().unwrap();
    let service = SettingsService::new(dir.path().join("settings.toml"));
    let settings = Settings {
        batch_size: 0,
        ..Settings::default()
    };

    assert!(service.update(&settings).is_err());
    assert!(!service.path().exists());
}

#[test]
fn test_journal_loaded_from_configured_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("entries.json");
    fs::write(&path, entries::small_journal_json()).unwrap();

    let settings = Settings {
        entries_path: Some(path),
        ..Settings::default()
    };
    let journal = JournalService::load(&settings).expect("Failed to load journal");

    assert_eq!(journal.len(), 4);
    assert_eq!(journal.index_of_date("17/3/2025"), Some(2));
}

#[test]
fn test_missing_journal_file_falls_back_to_bundled() {
    let dir = TempDir::new().unwrap();
    let settings = Settings {
        entries_path: Some(dir.path().join("missing.json")),
        ..Settings::default()
    };

    let journal = JournalService::load(&settings).expect("Bundled entries should load");
    let bundled = JournalService::load_bundled().unwrap();
    assert_eq!(journal.len(), bundled.len());
    assert!(!journal.is_empty());
}

#[test]
fn test_malformed_journal_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("entries.json");
    fs::write(&path, "[{\"imgUrl\": 3}]").unwrap();

    assert!(JournalService::load_from_path(&path).is_err());
}

#[test]
fn test_opening_cards_from_a_shared_day() {
    let journal = JournalService::from_entries(entries::small_journal());

    // Two entries on 3/3/2025; the carousel starts at the first of them
    let mut carousel = CardCarousel::open_at(&journal, "3/3/2025", 50.0).unwrap();
    assert_eq!(carousel.index(), 0);
    assert_eq!(carousel.len(), 4);

    // Swipe left through the whole list
    for expected in 1..4 {
        carousel.drag_by(-120.0);
        assert_eq!(carousel.release(), SwipeOutcome::Next);
        assert_eq!(carousel.index(), expected);
    }

    // Nothing after the last card
    carousel.drag_by(-120.0);
    assert_eq!(carousel.release(), SwipeOutcome::SnapBack);
    assert_eq!(carousel.index(), 3);
    assert_eq!(carousel.progress(), 1.0);
}

#[test]
fn test_bundled_entries_have_valid_dates_and_ratings() {
    let journal = JournalService::load_bundled().unwrap();

    for entry in journal.entries() {
        assert!(
            entry.validate().is_ok(),
            "bundled entry {} is invalid",
            entry.date
        );
    }
}

#[test]
fn test_month_blocks_follow_calendar_shape() {
    let feb = months::feb_2024();
    let cells = generate_calendar_days(feb.year, feb.month);
    assert_eq!(cells.iter().flatten().count(), 29);
    assert_eq!(cells.iter().take_while(|cell| cell.is_none()).count(), 4);

    let mar = months::mar_2025();
    assert_eq!(week_rows(mar.year, mar.month), 6);

    let dec = months::dec_2025();
    assert_eq!(dec.next().to_string(), "Jan 2026");

    // Blocks stack by their own row counts across the year boundary
    let window = MonthWindow::around(dec, 1);
    let geometry = RowGeometry {
        row_height: 100.0,
        header_height: 0.0,
        gap: 0.0,
    };
    let layout = MonthLayout::compute(&window, geometry);
    let nov_rows = week_rows(2025, 11) as f32;
    let dec_rows = week_rows(dec.year, dec.month) as f32;
    assert_eq!(layout.top_of(dec), Some(nov_rows * 100.0));
    assert_eq!(
        layout.top_of(dec.next()),
        Some((nov_rows + dec_rows) * 100.0)
    );
}
