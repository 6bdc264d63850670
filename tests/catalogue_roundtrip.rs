//! End-to-end converter properties: CSV in, self-contained HTML catalogue
//! out, exercised through the public `catalogue::convert` entry point.

use alza_tools::catalogue::{self, CatalogueError};
use std::io::Write;
use std::path::PathBuf;
use tempfile::TempDir;

fn write_csv(dir: &TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("products.csv");
    let mut f = std::fs::File::create(&path).unwrap();
    f.write_all(contents.as_bytes()).unwrap();
    path
}

#[test]
fn round_trip_single_row() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_csv(
        &dir,
        "Name,Price,CPU,RAM,URL\n\
         Laptop X,10000 Kč,Intel Core i5,8 GB,https://example.com/x\n",
    );
    let output = dir.path().join("catalogue.html");

    let summary = catalogue::convert(&input, &output, "Alza Product Export List").unwrap();
    assert_eq!(summary.rows, 1);
    assert_eq!(summary.headers, vec!["Name", "Price", "CPU", "RAM", "URL"]);
    assert_eq!(summary.cpu_options, Some(1));
    assert_eq!(summary.ram_options, Some(1));

    let html = std::fs::read_to_string(&output).unwrap();
    assert!(html.contains("data-cpu=\"Intel Core i5\""));
    assert!(html.contains("data-ram=\"8 GB\""));
    assert!(html.contains(
        "<a href=\"https://example.com/x\" target=\"_blank\">https://example.com/x</a>"
    ));
    assert!(html.contains("<span id=\"visibleCount\">1</span> of 1 item(s)"));
    // Self-contained: no external assets.
    assert!(!html.contains("<link rel="));
    assert!(!html.contains("<script src="));
}

#[test]
fn table_row_count_equals_input_row_count() {
    let dir = tempfile::tempdir().unwrap();
    let mut csv = String::from("Name,Price\n");
    for i in 0..23 {
        csv.push_str(&format!("Item {i},{i}00 Kč\n"));
    }
    let input = write_csv(&dir, &csv);
    let output = dir.path().join("out.html");

    let summary = catalogue::convert(&input, &output, "Catalogue").unwrap();
    assert_eq!(summary.rows, 23);

    let html = std::fs::read_to_string(&output).unwrap();
    assert_eq!(html.matches("<tr data-cpu=").count(), 23);
    assert!(html.contains("of 23 item(s)"));
}

#[test]
fn filter_options_are_sorted_distinct_non_empty() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_csv(
        &dir,
        "Name,CPU\n\
         a,Ryzen 5\n\
         b,Intel Core i5\n\
         c,\n\
         d,Ryzen 5\n\
         e,Apple M2\n",
    );
    let output = dir.path().join("out.html");

    let summary = catalogue::convert(&input, &output, "Catalogue").unwrap();
    assert_eq!(summary.cpu_options, Some(3));
    assert_eq!(summary.ram_options, None);

    let html = std::fs::read_to_string(&output).unwrap();
    let apple = html.find("<option value=\"Apple M2\">").unwrap();
    let intel = html.find("<option value=\"Intel Core i5\">").unwrap();
    let ryzen = html.find("<option value=\"Ryzen 5\">").unwrap();
    assert!(apple < intel && intel < ryzen);
    assert_eq!(html.matches("<option value=\"Ryzen 5\">").count(), 1);
    assert!(!html.contains("id=\"ramFilter\""));
}

#[test]
fn empty_csv_aborts_without_writing_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_csv(&dir, "Name,Price\n");
    let output = dir.path().join("out.html");

    let err = catalogue::convert(&input, &output, "Catalogue").unwrap_err();
    assert!(matches!(err, CatalogueError::Empty));
    assert!(!output.exists());
}

#[test]
fn missing_input_reports_missing() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("out.html");

    let err =
        catalogue::convert(&dir.path().join("nope.csv"), &output, "Catalogue").unwrap_err();
    assert!(matches!(err, CatalogueError::Missing(_)));
    assert!(!output.exists());
}

#[test]
fn classification_is_idempotent_across_runs() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_csv(
        &dir,
        "Name,Processor,Memory\nLaptop,Intel Core i7,16 GB\n",
    );

    let out_a = dir.path().join("a.html");
    let out_b = dir.path().join("b.html");
    catalogue::convert(&input, &out_a, "Catalogue").unwrap();
    catalogue::convert(&input, &out_b, "Catalogue").unwrap();

    assert_eq!(
        std::fs::read_to_string(&out_a).unwrap(),
        std::fs::read_to_string(&out_b).unwrap()
    );
}

#[test]
fn scraped_export_converts_cleanly() {
    // The scraper's CSV header feeds straight into the converter.
    let dir = tempfile::tempdir().unwrap();
    let input = write_csv(
        &dir,
        "Name,Price,CPU,RAM,Description,URL\n\
         Laptop X,24 990 Kč,Intel Core i5,16 GB,\"Intel Core i5, RAM 16 GB\",https://www.alza.cz/x\n",
    );
    let output = dir.path().join("out.html");

    let summary = catalogue::convert(&input, &output, "Alza Product Export List").unwrap();
    assert_eq!(summary.rows, 1);
    assert_eq!(summary.cpu_options, Some(1));
    assert_eq!(summary.ram_options, Some(1));

    let html = std::fs::read_to_string(&output).unwrap();
    assert!(html.contains("Intel Core i5, RAM 16 GB"));
    assert!(html.contains("id=\"cpuFilter\""));
    assert!(html.contains("id=\"ramFilter\""));
}
