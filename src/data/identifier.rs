use super::model::CellValue;

// ---------------------------------------------------------------------------
// ISSN / eISSN normalisation
// ---------------------------------------------------------------------------

/// Canonicalise an ISSN-like string into `NNNN-NNNX` form.
///
/// Blank input and the placeholder `nan` become the empty string. Anything
/// that is not exactly eight characters (seven digits plus a digit or `X`)
/// is returned uppercased with whitespace removed but otherwise untouched,
/// so it can still take part in watch-list lookups.
pub fn normalize_identifier(raw: &str) -> String {
    let compact: String = raw
        .trim()
        .to_uppercase()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();

    if compact.is_empty() || compact == "NAN" {
        return String::new();
    }

    if is_bare_issn(&compact) {
        return format!("{}-{}", &compact[..4], &compact[4..]);
    }
    compact
}

/// Normalise an optional cell; missing and blank cells yield `""`.
pub fn normalize_cell(value: Option<&CellValue>) -> String {
    match value {
        None | Some(CellValue::Empty) => String::new(),
        Some(v) => normalize_identifier(&v.to_string()),
    }
}

fn is_bare_issn(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() == 8
        && bytes[..7].iter().all(u8::is_ascii_digit)
        && (bytes[7].is_ascii_digit() || bytes[7] == b'X')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_bare_issn() {
        assert_eq!(normalize_identifier("12345678"), "1234-5678");
        assert_eq!(normalize_identifier(" 1234567x "), "1234-567X");
        assert_eq!(normalize_identifier("1234 5678"), "1234-5678");
    }

    #[test]
    fn keeps_hyphenated_issn() {
        assert_eq!(normalize_identifier("1234-567X"), "1234-567X");
        assert_eq!(normalize_identifier("1234-567x"), "1234-567X");
    }

    #[test]
    fn blank_and_nan_become_empty() {
        assert_eq!(normalize_identifier(""), "");
        assert_eq!(normalize_identifier("   "), "");
        assert_eq!(normalize_identifier("NaN"), "");
        assert_eq!(normalize_identifier("nan"), "");
        assert_eq!(normalize_cell(None), "");
        assert_eq!(normalize_cell(Some(&CellValue::Empty)), "");
    }

    #[test]
    fn other_shapes_pass_through_uppercased() {
        assert_eq!(normalize_identifier("abc 123"), "ABC123");
        assert_eq!(normalize_identifier("1234-56789"), "1234-56789");
        assert_eq!(normalize_identifier("1234567"), "1234567");
    }

    #[test]
    fn numeric_cells_are_normalised() {
        assert_eq!(normalize_cell(Some(&CellValue::Float(12345678.0))), "1234-5678");
        assert_eq!(normalize_cell(Some(&CellValue::Integer(87654321))), "8765-4321");
    }

    #[test]
    fn normalisation_is_idempotent() {
        let samples = [
            "12345678", "1234-567X", "", "NaN", " n a n ", "abc def", "1234 567x", "0000-0000",
            "  9876543x", "ISSN 1234-5678",
        ];
        for s in samples {
            let once = normalize_identifier(s);
            assert_eq!(normalize_identifier(&once), once, "input {s:?}");
        }
    }
}
