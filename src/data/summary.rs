use std::collections::HashMap;
use std::fmt;

use super::model::EnrichedRow;

// ---------------------------------------------------------------------------
// Category counts for the summary panel
// ---------------------------------------------------------------------------

/// Label used for rows whose grouping value is blank.
pub const EMPTY_CATEGORY: &str = "(empty)";

/// Default number of categories shown per panel.
pub const DEFAULT_TOP_N: usize = 12;

/// Derived fields the summary panel can group by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GroupField {
    Region,
    Publisher,
    Subject,
    Risk,
}

impl GroupField {
    pub const ALL: [GroupField; 4] = [
        GroupField::Region,
        GroupField::Publisher,
        GroupField::Subject,
        GroupField::Risk,
    ];

    fn value(self, row: &EnrichedRow) -> String {
        match self {
            GroupField::Region => row.region.clone(),
            GroupField::Publisher => row.publisher.clone(),
            GroupField::Subject => row.subject.clone(),
            GroupField::Risk => row.risk.to_string(),
        }
    }
}

impl fmt::Display for GroupField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GroupField::Region => "Region",
            GroupField::Publisher => "Publisher",
            GroupField::Subject => "Subject",
            GroupField::Risk => "Risk",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryCount {
    pub category: String,
    pub count: usize,
}

/// Count rows per category, most frequent first.
///
/// Every row lands in exactly one bucket; blank values go to
/// [`EMPTY_CATEGORY`]. Equal counts keep first-seen order.
pub fn group_count(rows: &[EnrichedRow], field: GroupField) -> Vec<CategoryCount> {
    let mut counts: Vec<CategoryCount> = Vec::new();
    let mut slot: HashMap<String, usize> = HashMap::new();

    for row in rows {
        let value = field.value(row);
        let category = if value.trim().is_empty() {
            EMPTY_CATEGORY.to_string()
        } else {
            value
        };
        match slot.get(&category) {
            Some(&i) => counts[i].count += 1,
            None => {
                slot.insert(category.clone(), counts.len());
                counts.push(CategoryCount { category, count: 1 });
            }
        }
    }

    // Stable sort keeps insertion order among ties.
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}

/// The categories to display plus how many were cut off.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopCategories {
    pub shown: Vec<CategoryCount>,
    pub hidden: usize,
}

pub fn top_n(mut counts: Vec<CategoryCount>, n: usize) -> TopCategories {
    let hidden = counts.len().saturating_sub(n);
    counts.truncate(n);
    TopCategories {
        shown: counts,
        hidden,
    }
}
