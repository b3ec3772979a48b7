//! Write a small sample journal table and watch list into `data/`.
//!
//! ```text
//! cargo run --bin generate_sample [out_dir]
//! cargo run -- data/journals.csv data/warning_list.json
//! ```
//!
//! The viewer defaults to `data/journals.xlsx`, so pass the generated CSV
//! explicitly (second line above).

#[path = "../sample.rs"]
mod sample;

use std::path::PathBuf;

use anyhow::Result;

fn main() -> Result<()> {
    let out_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("data"));

    let files = sample::write_sample(&out_dir)?;

    println!(
        "Wrote {} journals and {} watch-list entries to {}",
        files.journals,
        files.watch_entries,
        out_dir.display()
    );
    println!("View them with:\n  {}", files.viewer_command());
    Ok(())
}
