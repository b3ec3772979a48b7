use eframe::egui::{self, Color32, RichText, Ui};

use crate::data::filter::FilterPreset;
use crate::state::AppState;

/// Where "Load sample data" writes its files.
const SAMPLE_DIR: &str = "data";

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the menu, risk presets and search box.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open spreadsheet…").clicked() {
                open_spreadsheet_dialog(state);
                ui.close_menu();
            }
            if ui.button("Open watch list…").clicked() {
                open_watch_list_dialog(state);
                ui.close_menu();
            }
            if ui.button("Load sample data").clicked() {
                state.load_sample(std::path::Path::new(SAMPLE_DIR));
                ui.close_menu();
            }
            if ui.button("Reload").clicked() {
                state.reload();
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(session) = &state.session {
            ui.label(
                session
                    .source
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default(),
            );
            ui.separator();
        }

        // ---- Risk presets ----
        let current = state.view.as_ref().map(|v| v.preset);
        for preset in FilterPreset::ALL {
            if ui
                .selectable_label(current == Some(preset), preset.label())
                .clicked()
            {
                state.set_preset(preset);
            }
        }

        ui.separator();

        // ---- Search ----
        let mut changed = false;
        if let Some(view) = &mut state.view {
            changed |= ui
                .add(
                    egui::TextEdit::singleline(&mut view.search)
                        .hint_text("Search…")
                        .desired_width(220.0),
                )
                .changed();
            changed |= ui.checkbox(&mut view.regex, "Regex").changed();
            if let Some(err) = &view.search_error {
                ui.label(RichText::new("invalid pattern").color(Color32::RED))
                    .on_hover_text(err);
            }
        }
        if changed {
            state.refilter();
        }
    });
}

// ---------------------------------------------------------------------------
// Diagnostic panel
// ---------------------------------------------------------------------------

/// Explain the last hard load failure and how to fix it.
pub fn load_error_panel(ui: &mut Ui, state: &AppState) {
    let Some(err) = &state.load_error else {
        return;
    };
    egui::Frame::group(ui.style())
        .fill(Color32::from_rgb(60, 20, 20))
        .show(ui, |ui: &mut Ui| {
            ui.heading(RichText::new("Could not load the spreadsheet").color(Color32::LIGHT_RED));
            ui.label(err.to_string());
            ui.add_space(4.0);
            for hint in err.guidance() {
                ui.label(format!("• {hint}"));
            }
            if state.session.is_some() {
                ui.add_space(4.0);
                ui.label(RichText::new("Showing the previously loaded data.").weak());
            }
        });
    ui.add_space(6.0);
}

// ---------------------------------------------------------------------------
// File dialogs
// ---------------------------------------------------------------------------

pub fn open_spreadsheet_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open journal spreadsheet")
        .add_filter(
            "Supported files",
            &["xlsx", "xlsm", "xlsb", "xls", "ods", "csv", "json", "parquet", "pq"],
        )
        .add_filter("Excel / OpenDocument", &["xlsx", "xlsm", "xlsb", "xls", "ods"])
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .add_filter("Parquet", &["parquet", "pq"])
        .pick_file();

    if let Some(path) = file {
        log::info!("Opening spreadsheet {}", path.display());
        state.open_spreadsheet(path);
    }
}

pub fn open_watch_list_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open watch list")
        .add_filter("JSON", &["json"])
        .pick_file();

    if let Some(path) = file {
        log::info!("Opening watch list {}", path.display());
        state.open_watch_list(path);
    }
}
