mod app;
mod auth;
mod chart;
mod color;
mod config;
mod data;
mod state;
mod ui;
mod viz;

use app::EnergyDashboardApp;
use config::AppConfig;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    let config = AppConfig::default();
    log::info!(
        "Starting dashboard: {} accounts, dataset at {}",
        config.credentials.len(),
        config.data_url
    );
    if config.credentials.is_empty() {
        log::warn!("No accounts configured; nobody can log in");
    }
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_min_inner_size(config.min_window_size),
        ..Default::default()
    };

    eframe::run_native(
        "Energy Consumption Visualization",
        options,
        Box::new(move |_cc| Ok(Box::new(EnergyDashboardApp::new(config)))),
    )
}
