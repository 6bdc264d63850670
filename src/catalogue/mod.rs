//! Catalogue pipeline: CSV → classified columns → filterable HTML document.

pub mod classify;
pub mod reader;
pub mod render;

use std::path::{Path, PathBuf};

/// Converter failures. All are fatal to the run; no output is written.
#[derive(Debug, thiserror::Error)]
pub enum CatalogueError {
    #[error("input file not found: {0}")]
    Missing(PathBuf),
    #[error("CSV file is empty or invalid")]
    Empty,
    #[error("failed to read CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// What a conversion produced, for user-facing reporting.
#[derive(Debug, Clone)]
pub struct CatalogueSummary {
    /// Number of data rows rendered.
    pub rows: usize,
    /// Column headers, in input order.
    pub headers: Vec<String>,
    /// Number of CPU filter options, when a CPU column was classified.
    pub cpu_options: Option<usize>,
    /// Number of RAM filter options, when a RAM column was classified.
    pub ram_options: Option<usize>,
}

/// Convert a CSV export into a self-contained, client-side-filterable HTML
/// catalogue. Nothing is written unless the whole input was read and
/// rendered.
pub fn convert(
    input: &Path,
    output: &Path,
    title: &str,
) -> Result<CatalogueSummary, CatalogueError> {
    let table = reader::read_table(input)?;
    let classification = classify::classify_columns(&table.headers);

    let cpu_options = classification
        .cpu
        .map(|col| classify::filter_domain(&table.rows, col))
        .unwrap_or_default();
    let ram_options = classification
        .ram
        .map(|col| classify::filter_domain(&table.rows, col))
        .unwrap_or_default();

    let document = render::render_document(&render::CatalogueDocument {
        title,
        headers: &table.headers,
        rows: &table.rows,
        classification: &classification,
        cpu_options: &cpu_options,
        ram_options: &ram_options,
    });

    std::fs::write(output, document)?;
    tracing::info!(
        rows = table.rows.len(),
        output = %output.display(),
        "catalogue written"
    );

    Ok(CatalogueSummary {
        rows: table.rows.len(),
        headers: table.headers,
        cpu_options: classification.cpu.map(|_| cpu_options.len()),
        ram_options: classification.ram.map(|_| ram_options.len()),
    })
}
