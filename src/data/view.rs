use std::cmp::Ordering;

use super::filter::{filtered_indices, FilterPreset, Matcher};
use super::model::{EnrichedDataset, EnrichedRow, RiskTag};

// ---------------------------------------------------------------------------
// Column descriptors
// ---------------------------------------------------------------------------

/// Where a table column reads its value from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnKey {
    Id,
    Risk,
    Identifier,
    AltIdentifier,
    Region,
    Publisher,
    Subject,
    /// An original header, shown verbatim.
    Original(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDescriptor {
    pub title: String,
    pub key: ColumnKey,
}

/// Derived lead columns followed by every original header in source order.
pub fn column_descriptors(headers: &[String]) -> Vec<ColumnDescriptor> {
    let lead = [
        ("#", ColumnKey::Id),
        ("Risk", ColumnKey::Risk),
        ("ISSN", ColumnKey::Identifier),
        ("eISSN", ColumnKey::AltIdentifier),
        ("Region", ColumnKey::Region),
        ("Publisher", ColumnKey::Publisher),
        ("Subject", ColumnKey::Subject),
    ];
    lead.into_iter()
        .map(|(title, key)| ColumnDescriptor {
            title: title.to_string(),
            key,
        })
        .chain(headers.iter().map(|h| ColumnDescriptor {
            title: h.clone(),
            key: ColumnKey::Original(h.clone()),
        }))
        .collect()
}

impl EnrichedRow {
    /// Display text for one table column.
    pub fn cell_text(&self, key: &ColumnKey) -> String {
        match key {
            ColumnKey::Id => self.id.to_string(),
            ColumnKey::Risk => self.risk.to_string(),
            ColumnKey::Identifier => self.identifier.clone(),
            ColumnKey::AltIdentifier => self.alt_identifier.clone(),
            ColumnKey::Region => self.region.clone(),
            ColumnKey::Publisher => self.publisher.clone(),
            ColumnKey::Subject => self.subject.clone(),
            ColumnKey::Original(h) => self.original.get(h).map(|v| v.to_string()).unwrap_or_default(),
        }
    }

    fn sort_number(&self, key: &ColumnKey) -> Option<f64> {
        match key {
            ColumnKey::Id => Some(self.id as f64),
            ColumnKey::Original(h) => {
                let v = self.original.get(h)?;
                v.as_f64().or_else(|| v.to_string().trim().parse().ok())
            }
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Row styling hook
// ---------------------------------------------------------------------------

/// How the table should draw a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RowStyle {
    /// Any risk detected.
    pub highlight: bool,
    /// Row is on the watch list: emphasise the identifier cell.
    pub emphasize_identifier: bool,
}

pub fn row_style(row: &EnrichedRow) -> RowStyle {
    RowStyle {
        highlight: !row.risk.is_empty(),
        emphasize_identifier: row.risk.contains(RiskTag::OnWatchList),
    }
}

// ---------------------------------------------------------------------------
// Sorting
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState {
    /// Index into the column descriptor list.
    pub column: usize,
    pub direction: SortDirection,
}

/// Compare two rows on one column. Numbers order numerically and come before
/// text; text orders case-insensitively.
pub fn compare_rows(a: &EnrichedRow, b: &EnrichedRow, key: &ColumnKey) -> Ordering {
    match (a.sort_number(key), b.sort_number(key)) {
        (Some(x), Some(y)) => x.total_cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a
            .cell_text(key)
            .to_lowercase()
            .cmp(&b.cell_text(key).to_lowercase()),
    }
}

// ---------------------------------------------------------------------------
// TableView – the grid's view model
// ---------------------------------------------------------------------------

/// Search, preset, sort and paging state for one dataset.
///
/// A new dataset always gets a fresh `TableView`; nothing carries over.
#[derive(Debug, Clone)]
pub struct TableView {
    pub columns: Vec<ColumnDescriptor>,
    pub search: String,
    pub regex: bool,
    pub preset: FilterPreset,
    pub sort: Option<SortState>,
    pub page: usize,
    pub page_size: usize,
    /// Row indices passing the filters, in display order.
    pub visible: Vec<usize>,
    /// Set when the search pattern does not compile.
    pub search_error: Option<String>,
}

impl TableView {
    pub fn new(dataset: &EnrichedDataset, page_size: usize) -> Self {
        let mut view = TableView {
            columns: column_descriptors(&dataset.headers),
            search: String::new(),
            regex: false,
            preset: FilterPreset::All,
            sort: None,
            page: 0,
            page_size: page_size.max(1),
            visible: Vec::new(),
            search_error: None,
        };
        view.refresh(dataset);
        view
    }

    /// Recompute `visible` after a search, preset or sort change.
    pub fn refresh(&mut self, dataset: &EnrichedDataset) {
        let search = match Matcher::compile(&self.search, self.regex) {
            Ok(m) => {
                self.search_error = None;
                m
            }
            Err(e) => {
                self.search_error = Some(e.to_string());
                Matcher::Any
            }
        };
        let mut visible =
            filtered_indices(&dataset.rows, &self.columns, &self.preset.matcher(), &search);

        if let Some(sort) = self.sort {
            if let Some(col) = self.columns.get(sort.column) {
                visible.sort_by(|&a, &b| {
                    let ord = compare_rows(&dataset.rows[a], &dataset.rows[b], &col.key);
                    match sort.direction {
                        SortDirection::Ascending => ord,
                        SortDirection::Descending => ord.reverse(),
                    }
                });
            }
        }

        self.visible = visible;
        self.page = self.page.min(self.page_count().saturating_sub(1));
    }

    pub fn set_preset(&mut self, preset: FilterPreset, dataset: &EnrichedDataset) {
        self.preset = preset;
        self.page = 0;
        self.refresh(dataset);
    }

    /// Sort by `column`; clicking the same column again flips the direction.
    pub fn toggle_sort(&mut self, column: usize, dataset: &EnrichedDataset) {
        self.sort = Some(match self.sort {
            Some(s) if s.column == column => SortState {
                column,
                direction: match s.direction {
                    SortDirection::Ascending => SortDirection::Descending,
                    SortDirection::Descending => SortDirection::Ascending,
                },
            },
            _ => SortState {
                column,
                direction: SortDirection::Ascending,
            },
        });
        self.refresh(dataset);
    }

    pub fn page_count(&self) -> usize {
        self.visible.len().div_ceil(self.page_size).max(1)
    }

    /// Row indices on the current page.
    pub fn page_rows(&self) -> &[usize] {
        let start = (self.page * self.page_size).min(self.visible.len());
        let end = (start + self.page_size).min(self.visible.len());
        &self.visible[start..end]
    }

    pub fn next_page(&mut self) {
        if self.page + 1 < self.page_count() {
            self.page += 1;
        }
    }

    pub fn prev_page(&mut self) {
        self.page = self.page.saturating_sub(1);
    }
}
