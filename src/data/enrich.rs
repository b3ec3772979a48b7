use super::columns::ResolvedColumns;
use super::identifier::normalize_cell;
use super::model::{CellValue, EnrichedDataset, EnrichedRow, RawSheet, RiskReason, RiskTag, Row};
use super::quartile::cells_mismatch;
use super::watchlist::WatchList;

// ---------------------------------------------------------------------------
// Enrichment: raw rows → immutable enriched rows
// ---------------------------------------------------------------------------

/// Derive identifiers, category fields and risk reasons for every row.
///
/// Columns are resolved once against the first row and the same headers are
/// applied to every row. An empty sheet yields an empty dataset; callers
/// reject that case before enrichment.
pub fn enrich(sheet: RawSheet, watch_list: &WatchList) -> EnrichedDataset {
    let RawSheet { headers, rows } = sheet;
    let columns = rows
        .first()
        .map(ResolvedColumns::from_sample)
        .unwrap_or_default();

    let rows = rows
        .into_iter()
        .enumerate()
        .map(|(i, row)| enrich_row(i + 1, row, &columns, watch_list))
        .collect();

    EnrichedDataset {
        headers,
        rows,
        columns,
    }
}

fn enrich_row(id: usize, row: Row, columns: &ResolvedColumns, watch_list: &WatchList) -> EnrichedRow {
    let cell = |col: &Option<String>| col.as_deref().and_then(|c| row.get(c));

    let identifier = normalize_cell(cell(&columns.identifier));
    let alt_identifier = normalize_cell(cell(&columns.alt_identifier));

    let mut risk = RiskReason::default();
    if watch_list.is_flagged(&identifier, &alt_identifier) {
        risk.push(RiskTag::OnWatchList);
    }
    if cells_mismatch(cell(&columns.partition_rank), cell(&columns.quartile_rank)) {
        risk.push(RiskTag::QuartileMismatch);
    }

    let region = category_text(cell(&columns.region));
    let publisher = category_text(cell(&columns.publisher));
    let subject = category_text(cell(&columns.subject));

    EnrichedRow {
        id,
        identifier,
        alt_identifier,
        region,
        publisher,
        subject,
        risk,
        original: row,
    }
}

fn category_text(value: Option<&CellValue>) -> String {
    value.map(|v| v.to_string().trim().to_string()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[(&str, &str)]) -> Row {
        cells
            .iter()
            .map(|(k, v)| (k.to_string(), CellValue::String(v.to_string())))
            .collect()
    }

    fn sheet(rows: Vec<Row>) -> RawSheet {
        RawSheet::from_rows(rows, Vec::new())
    }

    #[test]
    fn flags_watch_list_and_mismatch() {
        let rows = vec![
            row(&[("ISSN", "12345678"), ("分区", "2区"), ("JCR分区", "Q2"), ("Region", "CN")]),
            row(&[("ISSN", "2222-3333"), ("分区", "1区"), ("JCR分区", "Q4"), ("Region", "US")]),
            row(&[("ISSN", "4444-5555"), ("分区", "3区"), ("JCR分区", "Q3")]),
        ];
        let watch = WatchList::from_raw(["1234-5678"]);
        let ds = enrich(sheet(rows), &watch);

        assert_eq!(ds.len(), 3);
        let ids: Vec<usize> = ds.rows.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);

        assert!(ds.rows[0].risk.to_string().contains("on-watch-list"));
        assert_eq!(ds.rows[1].risk.to_string(), "quartile-mismatch");
        assert_eq!(ds.rows[2].risk.to_string(), "");

        assert_eq!(ds.rows[0].identifier, "1234-5678");
        assert_eq!(ds.rows[0].region, "CN");
        assert_eq!(ds.rows[2].region, "");
        assert_eq!(ds.count_tagged(RiskTag::OnWatchList), 1);
        assert_eq!(ds.count_tagged(RiskTag::QuartileMismatch), 1);
    }

    #[test]
    fn eissn_alone_can_hit_watch_list() {
        let rows = vec![row(&[("ISSN", "1111-2222"), ("eISSN", "9999 888x")])];
        let watch = WatchList::from_raw(["9999-888X"]);
        let ds = enrich(sheet(rows), &watch);
        assert_eq!(ds.rows[0].alt_identifier, "9999-888X");
        assert!(ds.rows[0].risk.contains(RiskTag::OnWatchList));
    }

    #[test]
    fn both_tags_in_fixed_order() {
        let rows = vec![row(&[("issn", "12345678"), ("Partition", "Top"), ("Quartile", "Q3")])];
        let watch = WatchList::from_raw(["12345678"]);
        let ds = enrich(sheet(rows), &watch);
        assert_eq!(ds.rows[0].risk.to_string(), "on-watch-list; quartile-mismatch");
    }

    #[test]
    fn resolution_uses_first_row_only() {
        let rows = vec![
            row(&[("ISSN", "1234-5678"), ("Publisher", "Acme")]),
            row(&[("issn", "8765-4321"), ("publisher", "Other")]),
        ];
        let ds = enrich(sheet(rows), &WatchList::default());
        assert_eq!(ds.columns.identifier.as_deref(), Some("ISSN"));
        assert_eq!(ds.rows[1].identifier, "");
        assert_eq!(ds.rows[1].publisher, "");
        assert_eq!(
            ds.rows[1].original.get("issn"),
            Some(&CellValue::String("8765-4321".into()))
        );
    }

    #[test]
    fn empty_sheet_enriches_to_empty_dataset() {
        let ds = enrich(RawSheet::default(), &WatchList::default());
        assert!(ds.is_empty());
        assert_eq!(ds.columns, ResolvedColumns::default());
    }
}
