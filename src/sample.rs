//! Deterministic sample journal table and watch list.
//!
//! Shared by the `generate_sample` binary and the viewer's
//! "File → Load sample data" action.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

pub const SAMPLE_DATA_FILE: &str = "journals.csv";
pub const SAMPLE_WATCH_LIST_FILE: &str = "warning_list.json";
pub const SAMPLE_ROWS: u64 = 200;

/// Header row: English and Chinese spellings from the alias table.
pub const SAMPLE_HEADERS: [&str; 8] = [
    "Journal", "ISSN", "eISSN", "出版社", "国家/地区", "学科", "分区", "JCR分区",
];

const PUBLISHERS: [&str; 6] = ["Elsevier", "Springer", "Wiley", "MDPI", "Hindawi", "Frontiers"];
const REGIONS: [&str; 5] = ["CHINA", "USA", "ENGLAND", "NETHERLANDS", "SWITZERLAND"];
const SUBJECTS: [&str; 5] = ["医学", "工程技术", "化学", "生物学", "环境科学与生态学"];
const QUARTILES: [&str; 5] = ["Q1", "Q2", "Q3", "Q4", "N/A"];

/// Minimal deterministic PRNG (xorshift64*)
struct SimpleRng(u64);

impl SimpleRng {
    fn next_u64(&mut self) -> u64 {
        self.0 ^= self.0 >> 12;
        self.0 ^= self.0 << 25;
        self.0 ^= self.0 >> 27;
        self.0.wrapping_mul(0x2545_F491_4F6C_DD1D)
    }

    fn pick<'a>(&mut self, items: &[&'a str]) -> &'a str {
        items[(self.next_u64() % items.len() as u64) as usize]
    }
}

/// ISSN with a valid mod-11 check character.
fn issn(seed: u64) -> String {
    let digits: Vec<u32> = format!("{:07}", seed % 10_000_000)
        .chars()
        .filter_map(|c| c.to_digit(10))
        .collect();
    let sum: u32 = digits.iter().zip((2..=8).rev()).map(|(d, w)| d * w).sum();
    let check = match (11 - sum % 11) % 11 {
        10 => 'X',
        n => char::from_digit(n, 10).unwrap_or('0'),
    };
    let body: String = digits.iter().filter_map(|d| char::from_digit(*d, 10)).collect();
    format!("{}-{}{check}", &body[..4], &body[4..])
}

/// Paths and counts of a written sample.
#[derive(Debug, Clone)]
pub struct SampleFiles {
    pub data_path: PathBuf,
    pub watch_list_path: PathBuf,
    pub journals: u64,
    pub watch_entries: usize,
}

impl SampleFiles {
    /// Command line that opens this sample in the viewer.
    pub fn viewer_command(&self) -> String {
        format!(
            "journal-lens {} {}",
            self.data_path.display(),
            self.watch_list_path.display()
        )
    }
}

/// Write `journals.csv` and `warning_list.json` into `out_dir`.
///
/// Columns are resolved from the first record only, so record 0 fills every
/// column; later records leave eISSN and partition blank now and then.
pub fn write_sample(out_dir: &Path) -> Result<SampleFiles> {
    std::fs::create_dir_all(out_dir).context("creating output directory")?;

    let data_path = out_dir.join(SAMPLE_DATA_FILE);
    let watch_list_path = out_dir.join(SAMPLE_WATCH_LIST_FILE);

    let mut rng = SimpleRng(0x9E37_79B9_7F4A_7C15);
    let mut writer = csv::Writer::from_path(&data_path)
        .with_context(|| format!("creating {}", data_path.display()))?;
    writer.write_record(SAMPLE_HEADERS)?;

    let mut watch = Vec::new();
    for i in 0..SAMPLE_ROWS {
        let first = i == 0;
        let print_issn = issn(rng.next_u64());
        let e_issn = if !first && i % 3 == 0 {
            String::new()
        } else {
            issn(rng.next_u64())
        };
        // Mix hyphenated and bare spellings, as real exports do.
        let shown_issn = if i % 4 == 0 {
            print_issn.replace('-', "")
        } else {
            print_issn.clone()
        };
        let (partition, quartile) = if first {
            ("1区 Top".to_string(), "Q4")
        } else {
            let partition = match rng.next_u64() % 6 {
                0 => "1区 Top".to_string(),
                5 => String::new(),
                n => format!("{n}区"),
            };
            (partition, rng.pick(&QUARTILES))
        };

        if i % 17 == 0 {
            watch.push(print_issn.clone());
        }
        if i % 29 == 1 && !e_issn.is_empty() {
            watch.push(e_issn.replace('-', ""));
        }

        writer.write_record([
            format!("Journal of Sample Studies {i}"),
            shown_issn,
            e_issn,
            rng.pick(&PUBLISHERS).to_string(),
            rng.pick(&REGIONS).to_string(),
            rng.pick(&SUBJECTS).to_string(),
            partition,
            quartile.to_string(),
        ])?;
    }
    writer.flush().context("flushing sample table")?;

    let watch_json = serde_json::to_string_pretty(&watch)?;
    std::fs::write(&watch_list_path, watch_json)
        .with_context(|| format!("writing {}", watch_list_path.display()))?;

    Ok(SampleFiles {
        data_path,
        watch_list_path,
        journals: SAMPLE_ROWS,
        watch_entries: watch.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_record_fills_every_column() {
        let dir = tempfile::tempdir().unwrap();
        let files = write_sample(dir.path()).unwrap();

        let mut reader = csv::Reader::from_path(&files.data_path).unwrap();
        let headers: Vec<String> = reader.headers().unwrap().iter().map(str::to_string).collect();
        assert_eq!(headers, SAMPLE_HEADERS);

        let records: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(records.len() as u64, files.journals);
        assert!(records[0].iter().all(|cell| !cell.trim().is_empty()));
        // Later rows still exercise blank eISSN and partition cells.
        assert!(records.iter().any(|r| r[2].is_empty()));
        assert!(records.iter().any(|r| r[6].is_empty()));
    }

    #[test]
    fn viewer_command_names_both_files() {
        let dir = tempfile::tempdir().unwrap();
        let files = write_sample(dir.path()).unwrap();
        let cmd = files.viewer_command();
        assert!(cmd.starts_with("journal-lens "));
        assert!(cmd.contains(SAMPLE_DATA_FILE));
        assert!(cmd.ends_with(SAMPLE_WATCH_LIST_FILE));
    }

    #[test]
    fn watch_list_is_a_json_array() {
        let dir = tempfile::tempdir().unwrap();
        let files = write_sample(dir.path()).unwrap();
        let text = std::fs::read_to_string(&files.watch_list_path).unwrap();
        let ids: Vec<String> = serde_json::from_str(&text).unwrap();
        assert_eq!(ids.len(), files.watch_entries);
        assert!(ids.len() > 10);
    }
}
