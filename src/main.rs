mod app;
mod color;
mod config;
mod data;
mod error;
mod sample;
mod session;
mod state;
mod ui;

use app::JournalLensApp;
use config::ViewerConfig;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = ViewerConfig::resolve(&args);
    log::info!(
        "Starting with data {} and watch list {}",
        config.data_path.display(),
        config.watch_list_path.display()
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1400.0, 860.0])
            .with_min_inner_size([720.0, 420.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Journal Lens – Journal Risk Viewer",
        options,
        Box::new(|_cc| Ok(Box::new(JournalLensApp::new(config)))),
    )
}
