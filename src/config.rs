use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::data::summary::DEFAULT_TOP_N;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "JOURNAL_LENS_CONFIG";
/// Config file picked up from the working directory when present.
pub const DEFAULT_CONFIG_FILE: &str = "journal-lens.json";

// ---------------------------------------------------------------------------
// Viewer configuration
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Spreadsheet loaded at startup.
    pub data_path: PathBuf,
    /// Optional JSON array of flagged identifiers.
    pub watch_list_path: PathBuf,
    /// Categories shown per summary panel.
    pub summary_top_n: usize,
    /// Rows per table page.
    pub page_size: usize,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("data/journals.xlsx"),
            watch_list_path: PathBuf::from("data/warning_list.json"),
            summary_top_n: DEFAULT_TOP_N,
            page_size: 25,
        }
    }
}

impl ViewerConfig {
    /// Resolve config from file (env var, then working directory) and CLI args.
    ///
    /// Positional args: `[spreadsheet] [watch-list]`.
    pub fn resolve(args: &[String]) -> Self {
        let file = std::env::var_os(CONFIG_ENV)
            .map(PathBuf::from)
            .or_else(|| {
                let local = PathBuf::from(DEFAULT_CONFIG_FILE);
                local.exists().then_some(local)
            });

        let mut config = match file {
            Some(path) => Self::from_file(&path).unwrap_or_else(|e| {
                log::warn!("Ignoring config {}: {e:#}", path.display());
                Self::default()
            }),
            None => Self::default(),
        };
        config.apply_args(args);
        config
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        serde_json::from_str(&text).context("parsing config JSON")
    }

    pub fn apply_args(&mut self, args: &[String]) {
        if let Some(data) = args.first() {
            self.data_path = PathBuf::from(data);
        }
        if let Some(watch) = args.get(1) {
            self.watch_list_path = PathBuf::from(watch);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_keeps_defaults() {
        let cfg: ViewerConfig = serde_json::from_str(r#"{"page_size": 50}"#).unwrap();
        assert_eq!(cfg.page_size, 50);
        assert_eq!(cfg.summary_top_n, 12);
        assert_eq!(cfg.data_path, PathBuf::from("data/journals.xlsx"));
    }

    #[test]
    fn args_override_paths() {
        let mut cfg = ViewerConfig::default();
        cfg.apply_args(&["sheet.csv".to_string()]);
        assert_eq!(cfg.data_path, PathBuf::from("sheet.csv"));
        assert_eq!(cfg.watch_list_path, PathBuf::from("data/warning_list.json"));

        cfg.apply_args(&["a.xlsx".to_string(), "w.json".to_string()]);
        assert_eq!(cfg.watch_list_path, PathBuf::from("w.json"));
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cfg.json");
        std::fs::write(&path, "{ page_size: ").unwrap();
        assert!(ViewerConfig::from_file(&path).is_err());
    }
}
