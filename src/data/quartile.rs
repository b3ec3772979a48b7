use super::model::CellValue;

// ---------------------------------------------------------------------------
// Rank scoring: partition tiers and JCR quartiles on a common 1..=4 scale
// ---------------------------------------------------------------------------

/// Minimum score gap that counts as a mismatch.
pub const MISMATCH_GAP: u8 = 2;

/// Score a partition label such as `1区`, `Top`, `2 (Medicine)`.
///
/// `top` anywhere (case-insensitive) is tier 1; otherwise the first digit
/// in `1..=4` decides. `None` means the label cannot be scored.
pub fn partition_score(label: &str) -> Option<u8> {
    if label.to_lowercase().contains("top") {
        return Some(1);
    }
    label
        .chars()
        .find(|c| ('1'..='4').contains(c))
        .and_then(|c| c.to_digit(10))
        .map(|d| d as u8)
}

/// Score a quartile label by the first of `Q1`..`Q4` it contains.
pub fn quartile_score(label: &str) -> Option<u8> {
    let upper = label.to_uppercase();
    (1..=4u8).find(|q| upper.contains(&format!("Q{q}")))
}

/// True only when both labels score and differ by at least [`MISMATCH_GAP`].
/// An unscoreable side is never a mismatch.
pub fn is_mismatch(partition: &str, quartile: &str) -> bool {
    match (partition_score(partition), quartile_score(quartile)) {
        (Some(p), Some(q)) => p.abs_diff(q) >= MISMATCH_GAP,
        _ => false,
    }
}

/// [`is_mismatch`] over optional cells; missing cells cannot mismatch.
pub fn cells_mismatch(partition: Option<&CellValue>, quartile: Option<&CellValue>) -> bool {
    match (partition, quartile) {
        (Some(p), Some(q)) => is_mismatch(&p.to_string(), &q.to_string()),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partition_labels() {
        assert_eq!(partition_score("1区"), Some(1));
        assert_eq!(partition_score("TOP期刊"), Some(1));
        assert_eq!(partition_score("Top 3"), Some(1));
        assert_eq!(partition_score("大类 3 区"), Some(3));
        assert_eq!(partition_score("5区 then 2"), Some(2));
        assert_eq!(partition_score("none"), None);
        assert_eq!(partition_score(""), None);
    }

    #[test]
    fn quartile_labels() {
        assert_eq!(quartile_score("Q1"), Some(1));
        assert_eq!(quartile_score("jcr q3"), Some(3));
        assert_eq!(quartile_score("Q4/Q2"), Some(2));
        assert_eq!(quartile_score("N/A"), None);
    }

    #[test]
    fn mismatch_requires_gap_of_two() {
        assert!(is_mismatch("1区", "Q4"));
        assert!(!is_mismatch("2区", "Q3"));
        assert!(!is_mismatch("top", "Q1"));
        assert!(is_mismatch("4区", "Q2"));
    }

    #[test]
    fn unscoreable_side_never_mismatches() {
        assert!(!is_mismatch("", "Q4"));
        assert!(!is_mismatch("1区", ""));
        assert!(!is_mismatch("unknown", "Q1"));
        assert!(!cells_mismatch(None, Some(&CellValue::String("Q4".into()))));
        assert!(!cells_mismatch(Some(&CellValue::Integer(1)), None));
    }

    #[test]
    fn numeric_partition_cell_scores() {
        assert!(cells_mismatch(
            Some(&CellValue::Float(1.0)),
            Some(&CellValue::String("Q4".into()))
        ));
    }
}
