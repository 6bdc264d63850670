//! CSV reading for the catalogue pipeline.

use super::CatalogueError;
use std::path::Path;

/// A parsed CSV file: header row plus data rows, all in input order.
/// Short rows are padded to the header width so row/header indexing always
/// lines up.
#[derive(Debug, Clone)]
pub struct CsvTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Read a CSV file, first row as headers. Missing file, unreadable content,
/// or zero data rows are all fatal.
pub fn read_table(path: &Path) -> Result<CsvTable, CatalogueError> {
    if !path.exists() {
        return Err(CatalogueError::Missing(path.to_path_buf()));
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;

    let headers: Vec<String> = reader.headers()?.iter().map(String::from).collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let mut row: Vec<String> = record.iter().map(String::from).collect();
        row.resize(headers.len(), String::new());
        rows.push(row);
    }

    if headers.is_empty() || rows.is_empty() {
        return Err(CatalogueError::Empty);
    }

    Ok(CsvTable { headers, rows })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(contents: &str) -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        let mut f = std::fs::File::create(dir.path().join("in.csv")).unwrap();
        f.write_all(contents.as_bytes()).unwrap();
        dir
    }

    #[test]
    fn test_reads_headers_and_rows() {
        let dir = write_temp("Name,Price\nLaptop,100\nMouse,20\n");
        let table = read_table(&dir.path().join("in.csv")).unwrap();
        assert_eq!(table.headers, vec!["Name", "Price"]);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[1], vec!["Mouse", "20"]);
    }

    #[test]
    fn test_missing_file() {
        let err = read_table(Path::new("/nonexistent/in.csv")).unwrap_err();
        assert!(matches!(err, CatalogueError::Missing(_)));
    }

    #[test]
    fn test_header_only_is_empty() {
        let dir = write_temp("Name,Price\n");
        let err = read_table(&dir.path().join("in.csv")).unwrap_err();
        assert!(matches!(err, CatalogueError::Empty));
    }

    #[test]
    fn test_short_rows_are_padded() {
        let dir = write_temp("A,B,C\n1,2\n");
        let table = read_table(&dir.path().join("in.csv")).unwrap();
        assert_eq!(table.rows[0], vec!["1", "2", ""]);
    }
}
