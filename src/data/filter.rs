use regex::{Regex, RegexBuilder};

use super::model::{EnrichedRow, RiskTag};
use super::view::ColumnDescriptor;

// ---------------------------------------------------------------------------
// Text matchers
// ---------------------------------------------------------------------------

/// A compiled search predicate over cell text.
#[derive(Debug, Clone)]
pub enum Matcher {
    /// No constraint.
    Any,
    /// Case-insensitive substring (stored lowercased).
    Substring(String),
    Pattern(Regex),
}

impl Matcher {
    /// Compile a user query. Blank queries match everything.
    pub fn compile(query: &str, regex: bool) -> Result<Self, regex::Error> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(Matcher::Any);
        }
        if regex {
            let re = RegexBuilder::new(query).case_insensitive(true).build()?;
            Ok(Matcher::Pattern(re))
        } else {
            Ok(Matcher::Substring(query.to_lowercase()))
        }
    }

    pub fn is_match(&self, text: &str) -> bool {
        match self {
            Matcher::Any => true,
            Matcher::Substring(needle) => text.to_lowercase().contains(needle.as_str()),
            Matcher::Pattern(re) => re.is_match(text),
        }
    }
}

// ---------------------------------------------------------------------------
// Risk presets
// ---------------------------------------------------------------------------

/// The four fixed quick filters on the risk column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterPreset {
    #[default]
    All,
    WatchList,
    Mismatch,
    Either,
}

impl FilterPreset {
    pub const ALL: [FilterPreset; 4] = [
        FilterPreset::All,
        FilterPreset::WatchList,
        FilterPreset::Mismatch,
        FilterPreset::Either,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FilterPreset::All => "All",
            FilterPreset::WatchList => "Watch list",
            FilterPreset::Mismatch => "Quartile mismatch",
            FilterPreset::Either => "Either",
        }
    }

    /// The matcher applied to the risk column text.
    pub fn matcher(self) -> Matcher {
        match self {
            FilterPreset::All => Matcher::Any,
            FilterPreset::WatchList => Matcher::Substring(RiskTag::OnWatchList.as_str().to_string()),
            FilterPreset::Mismatch => {
                Matcher::Substring(RiskTag::QuartileMismatch.as_str().to_string())
            }
            FilterPreset::Either => {
                let alternation = format!(
                    "{}|{}",
                    regex::escape(RiskTag::OnWatchList.as_str()),
                    regex::escape(RiskTag::QuartileMismatch.as_str())
                );
                // Both alternatives are escaped literals, so this always compiles.
                Regex::new(&alternation).map_or(Matcher::Any, Matcher::Pattern)
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Filtering
// ---------------------------------------------------------------------------

/// Return indices of rows that satisfy both the risk preset and the global search.
///
/// The global search passes when any column's text matches.
pub fn filtered_indices(
    rows: &[EnrichedRow],
    columns: &[ColumnDescriptor],
    preset: &Matcher,
    search: &Matcher,
) -> Vec<usize> {
    rows.iter()
        .enumerate()
        .filter(|(_, row)| preset.is_match(&row.risk.to_string()))
        .filter(|(_, row)| match search {
            Matcher::Any => true,
            m => columns.iter().any(|c| m.is_match(&row.cell_text(&c.key))),
        })
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{CellValue, RiskReason, Row};
    use crate::data::view::column_descriptors;

    fn row(id: usize, tags: &[RiskTag], title: &str) -> EnrichedRow {
        let mut risk = RiskReason::default();
        for t in tags {
            risk.push(*t);
        }
        let mut original = Row::new();
        original.insert("Title".into(), CellValue::String(title.into()));
        EnrichedRow {
            id,
            identifier: format!("000{id}-0000"),
            alt_identifier: String::new(),
            region: String::new(),
            publisher: String::new(),
            subject: String::new(),
            risk,
            original,
        }
    }

    fn fixture() -> Vec<EnrichedRow> {
        vec![
            row(1, &[RiskTag::OnWatchList], "Journal of Alpha"),
            row(2, &[RiskTag::QuartileMismatch], "Beta Letters"),
            row(3, &[], "Gamma Review"),
            row(4, &[RiskTag::OnWatchList, RiskTag::QuartileMismatch], "Delta"),
        ]
    }

    #[test]
    fn presets_select_expected_rows() {
        let rows = fixture();
        let cols = column_descriptors(&["Title".to_string()]);
        let run = |p: FilterPreset| filtered_indices(&rows, &cols, &p.matcher(), &Matcher::Any);
        assert_eq!(run(FilterPreset::All), vec![0, 1, 2, 3]);
        assert_eq!(run(FilterPreset::WatchList), vec![0, 3]);
        assert_eq!(run(FilterPreset::Mismatch), vec![1, 3]);
        assert_eq!(run(FilterPreset::Either), vec![0, 1, 3]);
    }

    #[test]
    fn search_is_case_insensitive_across_columns() {
        let rows = fixture();
        let cols = column_descriptors(&["Title".to_string()]);
        let search = Matcher::compile("ALPHA", false).unwrap();
        assert_eq!(filtered_indices(&rows, &cols, &Matcher::Any, &search), vec![0]);

        let by_id = Matcher::compile("0002-", false).unwrap();
        assert_eq!(filtered_indices(&rows, &cols, &Matcher::Any, &by_id), vec![1]);
    }

    #[test]
    fn regex_search_supports_alternation() {
        let rows = fixture();
        let cols = column_descriptors(&["Title".to_string()]);
        let search = Matcher::compile("beta|gamma", true).unwrap();
        assert_eq!(filtered_indices(&rows, &cols, &Matcher::Any, &search), vec![1, 2]);
        assert!(Matcher::compile("(unclosed", true).is_err());
    }

    #[test]
    fn preset_and_search_combine() {
        let rows = fixture();
        let cols = column_descriptors(&["Title".to_string()]);
        let search = Matcher::compile("delta", false).unwrap();
        let got = filtered_indices(&rows, &cols, &FilterPreset::Mismatch.matcher(), &search);
        assert_eq!(got, vec![3]);
    }
}
