use eframe::egui::{self, RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::color::{RISK_ROW_FILL, WATCH_LIST_TEXT};
use crate::data::view::{row_style, ColumnKey, SortDirection};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Journal table (central panel)
// ---------------------------------------------------------------------------

enum PageAction {
    Prev,
    Next,
}

/// Render the paged, sortable journal grid.
pub fn journal_table(ui: &mut Ui, state: &mut AppState) {
    let (Some(session), Some(view)) = (&state.session, &state.view) else {
        if state.load_error.is_none() {
            ui.centered_and_justified(|ui: &mut Ui| {
                ui.heading("Open a spreadsheet to view journals  (File → Open spreadsheet…)");
            });
        }
        return;
    };

    let mut sort_click: Option<usize> = None;
    let mut page_action: Option<PageAction> = None;

    // ---- Pager ----
    ui.horizontal(|ui: &mut Ui| {
        if ui.small_button("◀").clicked() {
            page_action = Some(PageAction::Prev);
        }
        ui.label(format!("Page {} / {}", view.page + 1, view.page_count()));
        if ui.small_button("▶").clicked() {
            page_action = Some(PageAction::Next);
        }
        ui.separator();
        ui.label(format!(
            "{} of {} rows match",
            view.visible.len(),
            session.dataset.len()
        ));
    });
    ui.separator();

    let page = view.page_rows();
    let rows = &session.dataset.rows;

    egui::ScrollArea::horizontal().show(ui, |ui: &mut Ui| {
        TableBuilder::new(ui)
            .striped(true)
            .resizable(true)
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
            .column(Column::auto().at_least(40.0))
            .columns(
                Column::initial(130.0).at_least(40.0).clip(true),
                view.columns.len().saturating_sub(1),
            )
            .header(22.0, |mut header| {
                for (i, col) in view.columns.iter().enumerate() {
                    header.col(|ui: &mut Ui| {
                        let marker = match view.sort {
                            Some(s) if s.column == i => match s.direction {
                                SortDirection::Ascending => " ▲",
                                SortDirection::Descending => " ▼",
                            },
                            _ => "",
                        };
                        let label = RichText::new(format!("{}{marker}", col.title)).strong();
                        if ui.add(egui::Button::new(label).frame(false)).clicked() {
                            sort_click = Some(i);
                        }
                    });
                }
            })
            .body(|body| {
                body.rows(20.0, page.len(), |mut row| {
                    let record = &rows[page[row.index()]];
                    let style = row_style(record);
                    for col in &view.columns {
                        row.col(|ui: &mut Ui| {
                            if style.highlight {
                                ui.painter().rect_filled(ui.max_rect(), 0.0, RISK_ROW_FILL);
                            }
                            let mut text = RichText::new(record.cell_text(&col.key));
                            if style.emphasize_identifier && col.key == ColumnKey::Identifier {
                                text = text.strong().color(WATCH_LIST_TEXT);
                            }
                            ui.label(text);
                        });
                    }
                });
            });
    });

    if let Some(column) = sort_click {
        state.toggle_sort(column);
    }
    if let (Some(action), Some(view)) = (page_action, &mut state.view) {
        match action {
            PageAction::Prev => view.prev_page(),
            PageAction::Next => view.next_page(),
        }
    }
}
