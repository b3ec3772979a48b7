use std::path::PathBuf;

/// A failure that aborts a load. The previous session, if any, stays on screen.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The spreadsheet could not be read or decoded.
    #[error("failed to load {}: {detail}", path.display())]
    Spreadsheet { path: PathBuf, detail: String },

    /// The first worksheet decoded to zero data rows.
    #[error("{} contains no data rows", path.display())]
    NoRows { path: PathBuf },
}

impl LoadError {
    pub fn spreadsheet(path: impl Into<PathBuf>, err: &anyhow::Error) -> Self {
        LoadError::Spreadsheet {
            path: path.into(),
            detail: format!("{err:#}"),
        }
    }

    /// Remediation hints shown under the error in the diagnostic panel.
    pub fn guidance(&self) -> &'static [&'static str] {
        match self {
            LoadError::Spreadsheet { .. } => &[
                "Check that the file exists and is readable.",
                "Supported formats: .xlsx, .xls, .ods, .csv, .json, .parquet.",
                "If the workbook is open in another program, close it and reload.",
                "Use File → Open spreadsheet… to pick a different file.",
            ],
            LoadError::NoRows { .. } => &[
                "Only the first worksheet is read; move the data there.",
                "The first row must hold the column headers, data starts on row 2.",
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_includes_path_and_cause() {
        let err = anyhow::anyhow!("zip error").context("opening workbook");
        let e = LoadError::spreadsheet("data/journals.xlsx", &err);
        let msg = e.to_string();
        assert!(msg.contains("data/journals.xlsx"));
        assert!(msg.contains("opening workbook: zip error"));
        assert!(!e.guidance().is_empty());
    }
}
