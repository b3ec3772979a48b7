use eframe::egui;

use crate::config::ViewerConfig;
use crate::state::AppState;
use crate::ui::{panels, summary, table};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct JournalLensApp {
    pub state: AppState,
}

impl JournalLensApp {
    /// Create the app and run the initial load from the configured paths.
    pub fn new(config: ViewerConfig) -> Self {
        let mut state = AppState::new(config);
        state.reload();
        Self { state }
    }
}

impl eframe::App for JournalLensApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu, presets, search ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: summary ----
        egui::SidePanel::left("summary_panel")
            .default_width(260.0)
            .resizable(true)
            .show(ctx, |ui| {
                summary::summary_panel(ui, &mut self.state);
            });

        // ---- Central panel: diagnostics + table ----
        egui::CentralPanel::default().show(ctx, |ui| {
            panels::load_error_panel(ui, &self.state);
            table::journal_table(ui, &mut self.state);
        });
    }
}
