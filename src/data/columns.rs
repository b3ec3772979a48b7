use std::fmt;

use super::model::Row;

// ---------------------------------------------------------------------------
// Logical fields and their accepted header spellings
// ---------------------------------------------------------------------------

/// A column the enrichment pipeline needs, whatever the source calls it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogicalField {
    Identifier,
    AltIdentifier,
    Region,
    Publisher,
    Subject,
    PartitionRank,
    QuartileRank,
}

impl LogicalField {
    pub const ALL: [LogicalField; 7] = [
        LogicalField::Identifier,
        LogicalField::AltIdentifier,
        LogicalField::Region,
        LogicalField::Publisher,
        LogicalField::Subject,
        LogicalField::PartitionRank,
        LogicalField::QuartileRank,
    ];

    /// Header spellings in priority order.
    pub fn aliases(self) -> &'static [&'static str] {
        match self {
            LogicalField::Identifier => &["ISSN", "issn", "Issn", "ISSN号"],
            LogicalField::AltIdentifier => {
                &["EISSN", "eISSN", "eissn", "E-ISSN", "e-ISSN", "电子ISSN"]
            }
            LogicalField::Region => &[
                "Region", "region", "Country", "country", "国家/地区", "国家", "地区",
            ],
            LogicalField::Publisher => &["Publisher", "publisher", "出版社", "出版商"],
            LogicalField::Subject => {
                &["Subject", "subject", "Category", "category", "学科", "学科分类"]
            }
            LogicalField::PartitionRank => &[
                "Partition",
                "partition",
                "CAS Partition",
                "中科院分区",
                "大类分区",
                "分区",
            ],
            LogicalField::QuartileRank => {
                &["Quartile", "quartile", "JCR Quartile", "JCR分区", "JCR"]
            }
        }
    }
}

impl fmt::Display for LogicalField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LogicalField::Identifier => "identifier",
            LogicalField::AltIdentifier => "alt-identifier",
            LogicalField::Region => "region",
            LogicalField::Publisher => "publisher",
            LogicalField::Subject => "subject",
            LogicalField::PartitionRank => "partition-rank",
            LogicalField::QuartileRank => "quartile-rank",
        };
        f.write_str(name)
    }
}

/// First alias that is a key of `sample`, or `None`.
pub fn resolve<'a>(sample: &Row, aliases: &[&'a str]) -> Option<&'a str> {
    aliases.iter().copied().find(|alias| sample.contains_key(*alias))
}

// ---------------------------------------------------------------------------
// ResolvedColumns – one resolution per load
// ---------------------------------------------------------------------------

/// Header chosen for each logical field, resolved against a single sample row.
///
/// Later rows that spell a header differently from the sample are not
/// re-resolved; their derived field is simply blank.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedColumns {
    pub identifier: Option<String>,
    pub alt_identifier: Option<String>,
    pub region: Option<String>,
    pub publisher: Option<String>,
    pub subject: Option<String>,
    pub partition_rank: Option<String>,
    pub quartile_rank: Option<String>,
}

impl ResolvedColumns {
    pub fn from_sample(sample: &Row) -> Self {
        let pick = |field: LogicalField| resolve(sample, field.aliases()).map(str::to_string);
        let resolved = ResolvedColumns {
            identifier: pick(LogicalField::Identifier),
            alt_identifier: pick(LogicalField::AltIdentifier),
            region: pick(LogicalField::Region),
            publisher: pick(LogicalField::Publisher),
            subject: pick(LogicalField::Subject),
            partition_rank: pick(LogicalField::PartitionRank),
            quartile_rank: pick(LogicalField::QuartileRank),
        };
        for field in resolved.missing() {
            log::warn!("No column found for {field}; derived values will be blank");
        }
        resolved
    }

    pub fn get(&self, field: LogicalField) -> Option<&str> {
        let slot = match field {
            LogicalField::Identifier => &self.identifier,
            LogicalField::AltIdentifier => &self.alt_identifier,
            LogicalField::Region => &self.region,
            LogicalField::Publisher => &self.publisher,
            LogicalField::Subject => &self.subject,
            LogicalField::PartitionRank => &self.partition_rank,
            LogicalField::QuartileRank => &self.quartile_rank,
        };
        slot.as_deref()
    }

    /// Logical fields with no matching header.
    pub fn missing(&self) -> Vec<LogicalField> {
        LogicalField::ALL
            .into_iter()
            .filter(|f| self.get(*f).is_none())
            .collect()
    }
}
