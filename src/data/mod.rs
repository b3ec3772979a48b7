/// Data layer: decoding, enrichment, aggregation and the table view model.
///
/// Architecture:
/// ```text
///  .xlsx / .csv / .json / .parquet          warning_list.json
///        │                                         │
///        ▼                                         ▼
///   ┌──────────┐                            ┌───────────┐
///   │  loader   │  parse file → RawSheet     │ watchlist │
///   └──────────┘                            └───────────┘
///        │                                         │
///        ▼                                         │
///   ┌──────────┐  columns · identifier · quartile  │
///   │  enrich   │◄─────────────────────────────────┘
///   └──────────┘
///        │  EnrichedDataset
///        ├──────────────┐
///        ▼              ▼
///   ┌─────────┐    ┌──────────────┐
///   │ summary  │    │ view / filter │  search, presets, sort, paging
///   └─────────┘    └──────────────┘
/// ```

pub mod columns;
pub mod enrich;
pub mod filter;
pub mod identifier;
pub mod loader;
pub mod model;
pub mod quartile;
pub mod summary;
pub mod view;
pub mod watchlist;
