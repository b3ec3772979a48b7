use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};
use serde_json::Value as JsonValue;

use super::identifier::normalize_identifier;

// ---------------------------------------------------------------------------
// Watch list: normalised identifiers flagged for caution
// ---------------------------------------------------------------------------

/// Set of normalised identifiers. Immutable once loaded.
#[derive(Debug, Clone, Default)]
pub struct WatchList {
    ids: HashSet<String>,
}

impl WatchList {
    /// Build from raw identifier strings; blanks are dropped, duplicates collapse.
    pub fn from_raw<I, S>(raw: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let ids = raw
            .into_iter()
            .map(|s| normalize_identifier(s.as_ref()))
            .filter(|id| !id.is_empty())
            .collect();
        WatchList { ids }
    }

    /// Load the watch list, falling back to an empty list on any failure.
    ///
    /// The list is optional: a missing or malformed file must never abort
    /// loading the spreadsheet.
    pub fn load_or_empty(path: &Path) -> Self {
        match Self::load(path) {
            Ok(list) => {
                log::info!("Loaded {} watch-list identifiers from {}", list.len(), path.display());
                list
            }
            Err(e) => {
                log::warn!("Watch list unavailable, continuing without it: {e:#}");
                WatchList::default()
            }
        }
    }

    /// Parse a JSON array of identifiers (strings or numbers).
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading watch list {}", path.display()))?;
        Self::parse(&text)
    }

    pub fn parse(text: &str) -> Result<Self> {
        let root: JsonValue = serde_json::from_str(text).context("parsing watch-list JSON")?;
        let entries = root
            .as_array()
            .context("Expected watch list to be a JSON array")?;

        let raw = entries.iter().filter_map(|v| match v {
            JsonValue::String(s) => Some(s.clone()),
            JsonValue::Number(n) => Some(n.to_string()),
            _ => None,
        });
        Ok(Self::from_raw(raw))
    }

    /// Pure membership test against an already-normalised identifier.
    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    /// Whether either identifier, once normalised, is on the list.
    pub fn is_flagged(&self, identifier: &str, alt_identifier: &str) -> bool {
        [identifier, alt_identifier]
            .into_iter()
            .map(normalize_identifier)
            .any(|id| !id.is_empty() && self.contains(&id))
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn membership_normalises_both_sides() {
        let list = WatchList::from_raw(["1234-5678"]);
        assert!(list.is_flagged("12345678", ""));
        assert!(list.is_flagged("", "1234 5678"));
        assert!(!list.is_flagged("8765-4321", ""));
        assert!(!list.is_flagged("", ""));
    }

    #[test]
    fn blanks_dropped_and_duplicates_collapse() {
        let list = WatchList::from_raw(["12345678", "1234-5678", "", "nan", "  "]);
        assert_eq!(list.len(), 1);
        assert!(list.contains("1234-5678"));
    }

    #[test]
    fn parses_strings_and_numbers() {
        let list = WatchList::parse(r#"["1234-567x", 87654321, null, {"a": 1}]"#).unwrap();
        assert_eq!(list.len(), 2);
        assert!(list.contains("1234-567X"));
        assert!(list.contains("8765-4321"));
    }

    #[test]
    fn non_array_is_rejected() {
        assert!(WatchList::parse(r#"{"ids": []}"#).is_err());
        assert!(WatchList::parse("not json").is_err());
    }

    #[test]
    fn missing_or_malformed_file_yields_empty_list() {
        let dir = tempfile::tempdir().unwrap();
        let missing = WatchList::load_or_empty(&dir.path().join("absent.json"));
        assert!(missing.is_empty());

        let bad_path = dir.path().join("bad.json");
        let mut f = std::fs::File::create(&bad_path).unwrap();
        f.write_all(b"[1234-").unwrap();
        assert!(WatchList::load_or_empty(&bad_path).is_empty());
    }
}
