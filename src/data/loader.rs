use std::path::Path;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use arrow::array::{Array, AsArray};
use arrow::datatypes::{DataType, Float32Type, Float64Type, Int32Type, Int64Type};
use arrow::util::display::array_value_to_string;
use calamine::{open_workbook_auto, Data, Reader};
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use serde_json::Value as JsonValue;

use super::model::{CellValue, RawSheet, Row};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Decode the first worksheet of a spreadsheet file.  Dispatch by extension.
///
/// Supported formats:
/// * `.xlsx` / `.xlsm` / `.xlsb` / `.xls` / `.ods` – first worksheet only
/// * `.csv`     – header row plus records
/// * `.json`    – `[{ "ISSN": "...", ... }, ...]`
/// * `.parquet` – any flat schema, one row per record
pub fn load_file(path: &Path) -> Result<RawSheet> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let sheet = match ext.as_str() {
        "xlsx" | "xlsm" | "xlsb" | "xls" | "ods" => load_workbook(path),
        "csv" => load_csv(path),
        "json" => load_json(path),
        "parquet" | "pq" => load_parquet(path),
        other => bail!("Unsupported file extension: .{other}"),
    }?;

    log::debug!(
        "Decoded {} rows from {} with headers {:?}",
        sheet.len(),
        path.display(),
        sheet.headers
    );
    Ok(sheet)
}

// ---------------------------------------------------------------------------
// Record assembly shared by the tabular formats
// ---------------------------------------------------------------------------

/// Turn raw header cells into unique, non-empty keys.
///
/// Blank headers become `__EMPTY`, `__EMPTY_1`, …; repeated headers get a
/// `_1`, `_2`, … suffix.
fn unique_headers(raw: &[String]) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(raw.len());
    for h in raw {
        let base = match h.trim() {
            "" => "__EMPTY".to_string(),
            t => t.to_string(),
        };
        let mut name = base.clone();
        let mut n = 1;
        while out.contains(&name) {
            name = format!("{base}_{n}");
            n += 1;
        }
        out.push(name);
    }
    out
}

/// Pair cells with headers, dropping blanks. `None` for a fully blank record.
fn assemble_row(headers: &[String], cells: impl IntoIterator<Item = CellValue>) -> Option<Row> {
    let row: Row = headers
        .iter()
        .zip(cells)
        .filter(|(_, v)| !v.is_blank())
        .map(|(h, v)| (h.clone(), v))
        .collect();
    (!row.is_empty()).then_some(row)
}

// ---------------------------------------------------------------------------
// Workbook loader (calamine)
// ---------------------------------------------------------------------------

fn load_workbook(path: &Path) -> Result<RawSheet> {
    let mut workbook = open_workbook_auto(path).context("opening workbook")?;
    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .context("Workbook contains no worksheets")?;
    log::debug!("Reading worksheet '{sheet_name}'");

    let range = workbook
        .worksheet_range(&sheet_name)
        .with_context(|| format!("reading worksheet '{sheet_name}'"))?;

    let mut rows_iter = range.rows();
    let Some(header_cells) = rows_iter.next() else {
        return Ok(RawSheet::default());
    };
    let headers = unique_headers(
        &header_cells
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>(),
    );

    let rows = rows_iter
        .filter_map(|cells| assemble_row(&headers, cells.iter().map(workbook_cell)))
        .collect();

    Ok(RawSheet::from_rows(rows, headers))
}

fn workbook_cell(cell: &Data) -> CellValue {
    match cell {
        Data::Empty => CellValue::Empty,
        Data::String(s) => CellValue::String(s.clone()),
        Data::Int(i) => CellValue::Integer(*i),
        Data::Float(f) => CellValue::Float(*f),
        Data::Bool(b) => CellValue::Bool(*b),
        Data::Error(e) => CellValue::String(format!("#{e:?}")),
        // Date, datetime and duration cells.
        other => CellValue::Date(other.to_string()),
    }
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// CSV layout: header row with column names, one record per line.
/// Numeric and boolean cells keep their type; empty cells are dropped.
fn load_csv(path: &Path) -> Result<RawSheet> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .context("opening CSV")?;
    let raw_headers: Vec<String> = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| h.trim_start_matches('\u{feff}').to_string())
        .collect();
    let headers = unique_headers(&raw_headers);

    let mut rows = Vec::new();
    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;
        if let Some(row) = assemble_row(&headers, record.iter().map(guess_cell_type)) {
            rows.push(row);
        }
    }

    Ok(RawSheet::from_rows(rows, headers))
}

fn guess_cell_type(s: &str) -> CellValue {
    let s = s.trim();
    if s.is_empty() {
        return CellValue::Empty;
    }
    // Leading zeros are significant in identifiers; keep such cells as text.
    let leading_zero = s.len() > 1 && s.starts_with('0') && !s.starts_with("0.");
    if !leading_zero {
        if let Ok(i) = s.parse::<i64>() {
            return CellValue::Integer(i);
        }
        if let Ok(f) = s.parse::<f64>() {
            if f.is_finite() {
                return CellValue::Float(f);
            }
        }
    }
    if s == "true" || s == "false" {
        return CellValue::Bool(s == "true");
    }
    CellValue::String(s.to_string())
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema (records-oriented):
///
/// ```json
/// [
///   { "ISSN": "1234-5678", "Title": "Journal of Examples", "JCR分区": "Q2" },
///   ...
/// ]
/// ```
fn load_json(path: &Path) -> Result<RawSheet> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    let root: JsonValue = serde_json::from_str(&text).context("parsing JSON")?;

    let records = root
        .as_array()
        .context("Expected top-level JSON array")?;

    let mut rows = Vec::with_capacity(records.len());
    for (i, rec) in records.iter().enumerate() {
        let obj = rec
            .as_object()
            .with_context(|| format!("Row {i} is not a JSON object"))?;

        let row: Row = obj
            .iter()
            .map(|(k, v)| (k.clone(), json_to_cell(v)))
            .filter(|(_, v)| !v.is_blank())
            .collect();
        if !row.is_empty() {
            rows.push(row);
        }
    }

    Ok(RawSheet::from_rows(rows, Vec::new()))
}

fn json_to_cell(val: &JsonValue) -> CellValue {
    match val {
        JsonValue::String(s) => CellValue::String(s.clone()),
        JsonValue::Number(n) => {
            if let Some(i) = n.as_i64() {
                CellValue::Integer(i)
            } else if let Some(f) = n.as_f64() {
                CellValue::Float(f)
            } else {
                CellValue::String(n.to_string())
            }
        }
        JsonValue::Bool(b) => CellValue::Bool(*b),
        JsonValue::Null => CellValue::Empty,
        other => CellValue::String(other.to_string()),
    }
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Load a Parquet file as a flat table. Every column becomes a header;
/// nested columns are rendered as text.
fn load_parquet(path: &Path) -> Result<RawSheet> {
    let file = std::fs::File::open(path).context("opening parquet file")?;
    let builder = ParquetRecordBatchReaderBuilder::try_new(file)
        .context("reading parquet metadata")?;
    let headers: Vec<String> = builder
        .schema()
        .fields()
        .iter()
        .map(|f| f.name().clone())
        .collect();
    let reader = builder.build().context("building parquet reader")?;

    let mut rows = Vec::new();
    for batch_result in reader {
        let batch = batch_result.context("reading parquet record batch")?;
        for row in 0..batch.num_rows() {
            let cells = batch.columns().iter().map(|col| extract_cell_value(col, row));
            if let Some(r) = assemble_row(&headers, cells) {
                rows.push(r);
            }
        }
    }

    Ok(RawSheet::from_rows(rows, headers))
}

/// Extract a single cell from an Arrow column at a given row.
fn extract_cell_value(col: &Arc<dyn Array>, row: usize) -> CellValue {
    if col.is_null(row) {
        return CellValue::Empty;
    }
    let typed = match col.data_type() {
        DataType::Utf8 => col.as_string_opt::<i32>().map(|a| CellValue::String(a.value(row).to_string())),
        DataType::LargeUtf8 => col.as_string_opt::<i64>().map(|a| CellValue::String(a.value(row).to_string())),
        DataType::Int32 => col
            .as_primitive_opt::<Int32Type>()
            .map(|a| CellValue::Integer(i64::from(a.value(row)))),
        DataType::Int64 => col
            .as_primitive_opt::<Int64Type>()
            .map(|a| CellValue::Integer(a.value(row))),
        DataType::Float32 => col
            .as_primitive_opt::<Float32Type>()
            .map(|a| CellValue::Float(f64::from(a.value(row)))),
        DataType::Float64 => col
            .as_primitive_opt::<Float64Type>()
            .map(|a| CellValue::Float(a.value(row))),
        DataType::Boolean => col.as_boolean_opt().map(|a| CellValue::Bool(a.value(row))),
        DataType::Date32 | DataType::Date64 | DataType::Timestamp(_, _) => {
            array_value_to_string(col.as_ref(), row).ok().map(CellValue::Date)
        }
        _ => None,
    };
    typed.unwrap_or_else(|| match array_value_to_string(col.as_ref(), row) {
        Ok(s) => CellValue::String(s),
        Err(_) => CellValue::String(format!("{:?}", col.data_type())),
    })
}
