//! CSV export of scraped records.

use crate::record::ProductRecord;
use anyhow::{Context, Result};
use std::path::Path;

/// Fixed CSV column order.
pub const CSV_HEADER: [&str; 6] = ["Name", "Price", "CPU", "RAM", "Description", "URL"];

/// Default output filename for a query, spaces replaced with underscores.
pub fn default_filename(query: &str) -> String {
    format!("alza_results_{}.csv", query.replace(' ', "_"))
}

/// Write all records to `path` as UTF-8, comma-delimited CSV with a header
/// row. Whole-file overwrite; no partial-write recovery.
pub fn write_csv(path: &Path, records: &[ProductRecord]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("failed to create {}", path.display()))?;

    // The serde renames on ProductRecord produce the fixed header row.
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush().context("failed to flush CSV")?;
    Ok(())
}
