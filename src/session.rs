use std::path::{Path, PathBuf};

use crate::data::columns::LogicalField;
use crate::data::enrich::enrich;
use crate::data::loader::load_file;
use crate::data::model::{EnrichedDataset, RiskTag};
use crate::data::watchlist::WatchList;
use crate::error::LoadError;

// ---------------------------------------------------------------------------
// Session – everything produced by one load
// ---------------------------------------------------------------------------

/// The result of one complete load. Replaced wholesale by the next load.
#[derive(Debug, Clone)]
pub struct Session {
    pub source: PathBuf,
    pub dataset: EnrichedDataset,
    pub watch_list: WatchList,
}

/// Run the load sequence: watch list → spreadsheet → decode → enrich.
///
/// The watch list is optional and never fails the load. Any spreadsheet
/// failure, or a sheet without data rows, aborts with a [`LoadError`].
pub fn load(data_path: &Path, watch_list_path: &Path) -> Result<Session, LoadError> {
    let watch_list = WatchList::load_or_empty(watch_list_path);

    let sheet = load_file(data_path).map_err(|e| LoadError::spreadsheet(data_path, &e))?;
    if sheet.is_empty() {
        return Err(LoadError::NoRows {
            path: data_path.to_path_buf(),
        });
    }

    let dataset = enrich(sheet, &watch_list);
    log::info!(
        "Loaded {} rows from {}: {}",
        dataset.len(),
        data_path.display(),
        load_summary(&dataset, &watch_list)
    );

    Ok(Session {
        source: data_path.to_path_buf(),
        dataset,
        watch_list,
    })
}

/// One-line description of a finished load for the log.
pub fn load_summary(dataset: &EnrichedDataset, watch_list: &WatchList) -> String {
    let resolved: Vec<String> = LogicalField::ALL
        .into_iter()
        .map(|field| match dataset.columns.get(field) {
            Some(header) => format!("{field}={header}"),
            None => format!("{field}=<none>"),
        })
        .collect();
    format!(
        "columns [{}], {} watch-list entries, {} on watch list, {} quartile mismatches",
        resolved.join(", "),
        watch_list.len(),
        dataset.count_tagged(RiskTag::OnWatchList),
        dataset.count_tagged(RiskTag::QuartileMismatch),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::summary::{group_count, GroupField};
    use crate::sample::write_sample;

    #[test]
    fn end_to_end_flags_and_counts() {
        let dir = tempfile::tempdir().unwrap();
        let data = dir.path().join("journals.csv");
        std::fs::write(
            &data,
            "ISSN,Title,Publisher,分区,JCR分区\n\
             12345678,Alpha,Acme,2区,Q2\n\
             2222-3333,Beta,Acme,1区,Q4\n\
             4444-5555,Gamma,,3区,Q3\n",
        )
        .unwrap();
        let watch = dir.path().join("warning_list.json");
        std::fs::write(&watch, r#"["1234-5678"]"#).unwrap();

        let session = load(&data, &watch).unwrap();
        let rows = &session.dataset.rows;
        assert_eq!(rows.len(), 3);
        assert!(rows[0].risk.to_string().contains("on-watch-list"));
        assert!(rows[1].risk.to_string().contains("quartile-mismatch"));
        assert_eq!(rows[2].risk.to_string(), "");

        for field in GroupField::ALL {
            let total: usize = group_count(rows, field).iter().map(|c| c.count).sum();
            assert_eq!(total, 3);
        }
    }

    #[test]
    fn missing_watch_list_does_not_fail() {
        let dir = tempfile::tempdir().unwrap();
        let data = dir.path().join("journals.csv");
        std::fs::write(&data, "ISSN\n12345678\n").unwrap();
        let session = load(&data, &dir.path().join("absent.json")).unwrap();
        assert!(session.watch_list.is_empty());
        assert_eq!(session.dataset.rows[0].identifier, "1234-5678");
    }

    #[test]
    fn hard_failures_are_typed() {
        let dir = tempfile::tempdir().unwrap();
        let absent = dir.path().join("absent.xlsx");
        let err = load(&absent, &dir.path().join("w.json")).unwrap_err();
        assert!(matches!(err, LoadError::Spreadsheet { .. }));

        let empty = dir.path().join("empty.csv");
        std::fs::write(&empty, "ISSN,Title\n").unwrap();
        let err = load(&empty, &dir.path().join("w.json")).unwrap_err();
        assert!(matches!(err, LoadError::NoRows { .. }));
    }

    #[test]
    fn summary_names_columns_and_watch_list_size() {
        let dir = tempfile::tempdir().unwrap();
        let data = dir.path().join("journals.csv");
        std::fs::write(&data, "issn,出版社\n12345678,Acme\n").unwrap();
        let watch = dir.path().join("w.json");
        std::fs::write(&watch, r#"["1234-5678", "8765-4321"]"#).unwrap();

        let session = load(&data, &watch).unwrap();
        let line = load_summary(&session.dataset, &session.watch_list);
        assert!(line.contains("identifier=issn"));
        assert!(line.contains("publisher=出版社"));
        assert!(line.contains("alt-identifier=<none>"));
        assert!(line.contains("2 watch-list entries"));
        assert!(line.contains("1 on watch list"));
    }

    #[test]
    fn generated_sample_resolves_every_column() {
        let dir = tempfile::tempdir().unwrap();
        let files = write_sample(dir.path()).unwrap();
        let session = load(&files.data_path, &files.watch_list_path).unwrap();
        let ds = &session.dataset;

        assert!(ds.columns.missing().is_empty(), "unresolved: {:?}", ds.columns.missing());
        assert!(ds.rows.iter().filter(|r| !r.alt_identifier.is_empty()).count() > 100);
        assert!(ds.count_tagged(RiskTag::QuartileMismatch) > 0);
        // Some rows are flagged through their eISSN alone.
        assert!(ds.rows.iter().any(|r| {
            r.risk.contains(RiskTag::OnWatchList) && !session.watch_list.contains(&r.identifier)
        }));
    }
}
