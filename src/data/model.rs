use std::collections::BTreeMap;
use std::fmt;

// ---------------------------------------------------------------------------
// CellValue – a single spreadsheet cell
// ---------------------------------------------------------------------------

/// A dynamically-typed cell value as produced by the spreadsheet decoders.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    String(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    /// Date/time cells kept as text for display.
    Date(String),
    Empty,
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::String(s) | CellValue::Date(s) => write!(f, "{s}"),
            CellValue::Integer(i) => write!(f, "{i}"),
            // Spreadsheets store identifiers like 12345678 as floats.
            CellValue::Float(v) if v.is_finite() && v.fract() == 0.0 && v.abs() < 1e15 => {
                write!(f, "{v:.0}")
            }
            CellValue::Float(v) => write!(f, "{v}"),
            CellValue::Bool(b) => write!(f, "{b}"),
            CellValue::Empty => Ok(()),
        }
    }
}

impl CellValue {
    /// Whether the cell carries no usable text.
    pub fn is_blank(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::String(s) | CellValue::Date(s) => s.trim().is_empty(),
            _ => false,
        }
    }

    /// Try to interpret the value as an `f64` for numeric sorting.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Float(v) => Some(*v),
            CellValue::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Row / RawSheet – decoder output
// ---------------------------------------------------------------------------

/// One source record: header → value. Blank cells are not stored, so a key is
/// present only when the cell had a value.
pub type Row = BTreeMap<String, CellValue>;

/// The decoded first worksheet.
#[derive(Debug, Clone, Default)]
pub struct RawSheet {
    /// Header names in source column order.
    pub headers: Vec<String>,
    pub rows: Vec<Row>,
}

impl RawSheet {
    /// Build a sheet whose header order is the first-seen order of keys.
    pub fn from_rows(rows: Vec<Row>, ordered_headers: Vec<String>) -> Self {
        let mut headers = ordered_headers;
        for row in &rows {
            for key in row.keys() {
                if !headers.contains(key) {
                    headers.push(key.clone());
                }
            }
        }
        RawSheet { headers, rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Risk reasons
// ---------------------------------------------------------------------------

/// Why a row is highlighted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RiskTag {
    OnWatchList,
    QuartileMismatch,
}

impl RiskTag {
    pub fn as_str(self) -> &'static str {
        match self {
            RiskTag::OnWatchList => "on-watch-list",
            RiskTag::QuartileMismatch => "quartile-mismatch",
        }
    }
}

impl fmt::Display for RiskTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered risk tags; empty means no risk detected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RiskReason {
    tags: Vec<RiskTag>,
}

impl RiskReason {
    pub const SEPARATOR: &'static str = "; ";

    pub fn push(&mut self, tag: RiskTag) {
        if !self.tags.contains(&tag) {
            self.tags.push(tag);
        }
    }

    pub fn contains(&self, tag: RiskTag) -> bool {
        self.tags.contains(&tag)
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

impl fmt::Display for RiskReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, tag) in self.tags.iter().enumerate() {
            if i > 0 {
                f.write_str(Self::SEPARATOR)?;
            }
            write!(f, "{tag}")?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// EnrichedRow / EnrichedDataset – pipeline output
// ---------------------------------------------------------------------------

/// A source row plus the fields derived from it. Built once, never mutated.
#[derive(Debug, Clone)]
pub struct EnrichedRow {
    /// 1-based sequence number.
    pub id: usize,
    pub identifier: String,
    pub alt_identifier: String,
    pub region: String,
    pub publisher: String,
    pub subject: String,
    pub risk: RiskReason,
    /// The source record, untouched.
    pub original: Row,
}

/// The full enriched collection shared by the summary panel and the table.
#[derive(Debug, Clone, Default)]
pub struct EnrichedDataset {
    /// Original headers in source order.
    pub headers: Vec<String>,
    pub rows: Vec<EnrichedRow>,
    pub columns: super::columns::ResolvedColumns,
}

impl EnrichedDataset {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of rows carrying the given risk tag.
    pub fn count_tagged(&self, tag: RiskTag) -> usize {
        self.rows.iter().filter(|r| r.risk.contains(tag)).count()
    }
}
