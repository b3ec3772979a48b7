use std::path::{Path, PathBuf};

use crate::color::CategoryPalette;
use crate::config::ViewerConfig;
use crate::data::filter::FilterPreset;
use crate::data::summary::{group_count, top_n, GroupField, TopCategories};
use crate::data::view::TableView;
use crate::error::LoadError;
use crate::sample;
use crate::session::{self, Session};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    pub config: ViewerConfig,

    /// Current load (None until a load succeeds).
    pub session: Option<Session>,

    /// Table view model for the current session.
    pub view: Option<TableView>,

    /// Which derived field the summary panel groups by.
    pub group_field: GroupField,

    /// Cached summary for `group_field`.
    pub summary: Option<TopCategories>,

    /// Colours for the summary categories.
    pub palette: Option<CategoryPalette>,

    /// Last hard load failure, shown in the diagnostic panel.
    pub load_error: Option<LoadError>,
}

impl AppState {
    pub fn new(config: ViewerConfig) -> Self {
        Self {
            config,
            session: None,
            view: None,
            group_field: GroupField::Region,
            summary: None,
            palette: None,
            load_error: None,
        }
    }

    /// Load from the configured paths, replacing the current session on success.
    pub fn reload(&mut self) {
        let data = self.config.data_path.clone();
        let watch = self.config.watch_list_path.clone();
        match session::load(&data, &watch) {
            Ok(session) => self.set_session(session),
            Err(e) => {
                log::error!("Load failed: {e}");
                self.load_error = Some(e);
            }
        }
    }

    pub fn open_spreadsheet(&mut self, path: PathBuf) {
        self.config.data_path = path;
        self.reload();
    }

    pub fn open_watch_list(&mut self, path: PathBuf) {
        self.config.watch_list_path = path;
        self.reload();
    }

    /// Write the sample table into `dir` and load it.
    pub fn load_sample(&mut self, dir: &Path) {
        match sample::write_sample(dir) {
            Ok(files) => {
                log::info!("Wrote sample data; {}", files.viewer_command());
                self.config.data_path = files.data_path;
                self.config.watch_list_path = files.watch_list_path;
                self.reload();
            }
            Err(e) => {
                log::error!("Writing sample data failed: {e:#}");
                self.load_error = Some(LoadError::spreadsheet(dir.join(sample::SAMPLE_DATA_FILE), &e));
            }
        }
    }

    /// Install a freshly loaded session. The old view is dropped, not patched.
    pub fn set_session(&mut self, session: Session) {
        self.view = Some(TableView::new(&session.dataset, self.config.page_size));
        self.session = Some(session);
        self.load_error = None;
        self.rebuild_summary();
    }

    /// Recompute category counts for the current grouping field.
    pub fn rebuild_summary(&mut self) {
        let Some(session) = &self.session else {
            self.summary = None;
            self.palette = None;
            return;
        };
        let counts = group_count(&session.dataset.rows, self.group_field);
        let top = top_n(counts, self.config.summary_top_n);
        self.palette = Some(CategoryPalette::new(
            top.shown.iter().map(|c| c.category.as_str()),
        ));
        self.summary = Some(top);
    }

    pub fn set_group_field(&mut self, field: GroupField) {
        if self.group_field != field {
            self.group_field = field;
            self.rebuild_summary();
        }
    }

    pub fn set_preset(&mut self, preset: FilterPreset) {
        if let (Some(view), Some(session)) = (&mut self.view, &self.session) {
            view.set_preset(preset, &session.dataset);
        }
    }

    pub fn toggle_sort(&mut self, column: usize) {
        if let (Some(view), Some(session)) = (&mut self.view, &self.session) {
            view.toggle_sort(column, &session.dataset);
        }
    }

    /// Re-apply search text or regex mode after an edit.
    pub fn refilter(&mut self) {
        if let (Some(view), Some(session)) = (&mut self.view, &self.session) {
            view.page = 0;
            view.refresh(&session.dataset);
        }
    }
}
