use eframe::egui::{self, RichText, Ui};
use egui_plot::{Bar, BarChart, Plot};

use crate::data::model::RiskTag;
use crate::data::summary::GroupField;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Summary panel: headline counts and category chart
// ---------------------------------------------------------------------------

/// Render load statistics and the category breakdown.
pub fn summary_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Summary");
    ui.separator();

    let Some(session) = &state.session else {
        ui.label("No dataset loaded.");
        return;
    };

    let ds = &session.dataset;
    egui::Grid::new("headline_counts")
        .num_columns(2)
        .show(ui, |ui: &mut Ui| {
            ui.label("Journals");
            ui.strong(ds.len().to_string());
            ui.end_row();
            ui.label("On watch list");
            ui.strong(ds.count_tagged(RiskTag::OnWatchList).to_string());
            ui.end_row();
            ui.label("Quartile mismatch");
            ui.strong(ds.count_tagged(RiskTag::QuartileMismatch).to_string());
            ui.end_row();
            ui.label("Watch-list entries");
            ui.strong(session.watch_list.len().to_string());
            ui.end_row();
        });

    let missing = ds.columns.missing();
    if !missing.is_empty() {
        let names: Vec<String> = missing.iter().map(|f| f.to_string()).collect();
        ui.label(RichText::new(format!("No column found for: {}", names.join(", "))).weak());
    }
    ui.separator();

    // ---- Group-by selector ----
    let mut chosen = state.group_field;
    egui::ComboBox::from_label("Group by")
        .selected_text(chosen.to_string())
        .show_ui(ui, |ui: &mut Ui| {
            for field in GroupField::ALL {
                ui.selectable_value(&mut chosen, field, field.to_string());
            }
        });
    state.set_group_field(chosen);

    let (Some(summary), Some(palette)) = (&state.summary, &state.palette) else {
        return;
    };

    // ---- Bar chart of the top categories ----
    let bars: Vec<Bar> = summary
        .shown
        .iter()
        .enumerate()
        .map(|(i, c)| {
            Bar::new(i as f64, c.count as f64)
                .name(&c.category)
                .fill(palette.color_for(&c.category))
        })
        .collect();
    Plot::new("category_chart")
        .height(180.0)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .show_x(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).width(0.7));
        });

    // ---- Category list ----
    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            for c in &summary.shown {
                ui.horizontal(|ui: &mut Ui| {
                    ui.label(RichText::new("■").color(palette.color_for(&c.category)));
                    ui.label(&c.category);
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui: &mut Ui| {
                        ui.strong(c.count.to_string());
                    });
                });
            }
            if summary.hidden > 0 {
                ui.label(RichText::new(format!("+{} more categories", summary.hidden)).italics());
            }
        });
}
