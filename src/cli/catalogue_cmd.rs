//! `alza catalogue [INPUT]` — convert a CSV export into a filterable HTML
//! catalogue.

use super::prompt;
use crate::catalogue;
use anyhow::{bail, Result};
use std::path::{Path, PathBuf};

/// Default output filename.
const DEFAULT_OUTPUT: &str = "catalogue.html";
/// Default document title.
const DEFAULT_TITLE: &str = "Alza Product Export List";

/// Run the catalogue command. Any conversion failure surfaces as an error
/// and the process exits non-zero; no output file is written on failure.
pub async fn run(
    input: Option<PathBuf>,
    output: Option<String>,
    title: Option<String>,
) -> Result<()> {
    println!("{}", "=".repeat(60));
    println!("CSV to HTML Catalogue Converter");
    println!("{}", "=".repeat(60));
    println!();

    let input = match input {
        Some(path) => path,
        None => PathBuf::from(prompt::line("Enter the CSV file name (e.g., products.csv): ")?),
    };
    if !input.exists() {
        bail!(
            "file '{}' not found — make sure it exists in the current directory",
            input.display()
        );
    }

    let output = match output {
        Some(name) => name,
        None => prompt::line_or(
            "Enter output HTML file name (press Enter for 'catalogue.html'): ",
            DEFAULT_OUTPUT,
        )?,
    };
    let output = ensure_html_suffix(&output);

    let title = match title {
        Some(t) => t,
        None => prompt::line_or(
            "Enter catalogue title (press Enter for 'Alza Product Export List'): ",
            DEFAULT_TITLE,
        )?,
    };

    println!("\n{}", "-".repeat(60));
    println!("Converting...");
    println!("{}\n", "-".repeat(60));

    let summary = catalogue::convert(&input, Path::new(&output), &title)?;

    println!("Catalogue created successfully: {output}");
    println!("Total items: {}", summary.rows);
    println!("Fields: {}", summary.headers.join(", "));
    if let Some(n) = summary.cpu_options {
        println!("CPU filter added: {n} unique values");
    }
    if let Some(n) = summary.ram_options {
        println!("RAM filter added: {n} unique values");
    }

    println!("\n{}", "=".repeat(60));
    println!("Success! Open '{output}' in your browser to view!");
    println!("{}", "=".repeat(60));

    Ok(())
}

/// Append `.html` when the name has no such suffix.
fn ensure_html_suffix(name: &str) -> String {
    if name.ends_with(".html") {
        name.to_string()
    } else {
        format!("{name}.html")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_html_suffix() {
        assert_eq!(ensure_html_suffix("out"), "out.html");
        assert_eq!(ensure_html_suffix("out.html"), "out.html");
        assert_eq!(ensure_html_suffix("out.htm"), "out.htm.html");
    }
}
