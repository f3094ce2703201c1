// Hair Diary Application
// Main entry point

use hair_diary::models::settings::{MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH};
use hair_diary::services::settings::{load_settings_or_default, SettingsService};
use hair_diary::ui_egui::DiaryApp;

fn main() -> eframe::Result<()> {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Starting Hair Diary");

    let settings_service = SettingsService::from_project_dirs();
    let settings = load_settings_or_default(&settings_service);
    log::info!(
        "Loaded settings from {}: theme={}, batch_size={}",
        settings_service.path().display(),
        settings.theme,
        settings.batch_size
    );

    let window_title = format!("{} {}", settings.app_title_accent, settings.app_title);
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(window_title.clone())
            .with_inner_size([settings.window_width, settings.window_height])
            .with_min_inner_size([MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT]),
        ..Default::default()
    };

    eframe::run_native(
        &window_title,
        options,
        Box::new(move |cc| Ok(Box::new(DiaryApp::new(cc, settings)))),
    )
}
