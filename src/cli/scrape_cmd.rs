//! `alza scrape [QUERY]` — search alza.cz and extract product listings.

use super::prompt;
use crate::browser::chromium::ChromiumDriver;
use crate::browser::Driver;
use crate::record::ProductRecord;
use crate::scrape::export;
use crate::scrape::harvest::{HarvestConfig, HarvestEvent};
use anyhow::Result;
use std::path::Path;

/// Run the scrape command.
///
/// Internal failures (navigation, missing search input, no listings) are
/// reported to the user and yield an empty result set; the process still
/// exits 0 on that path.
pub async fn run(
    query: Option<String>,
    output: Option<String>,
    assume_yes: bool,
    headed: bool,
) -> Result<()> {
    println!("{}", "=".repeat(80));
    println!("ALZA.CZ WEB SCRAPER");
    println!("{}", "=".repeat(80));

    let query = match query {
        Some(q) => q.trim().to_string(),
        None => prompt::line("\nEnter what you want to search on alza.cz: ")?,
    };
    if query.is_empty() {
        println!("Search query cannot be empty!");
        return Ok(());
    }

    let records = scrape(&query, headed).await;

    println!("\n{}", "-".repeat(80));
    println!(
        "Scraping completed! Total products scraped: {}",
        records.len()
    );

    if records.is_empty() {
        return Ok(());
    }

    let save = assume_yes
        || output.is_some()
        || prompt::confirm("\nDo you want to save results to a CSV file? (y/n): ")?;
    if save {
        let filename = output.unwrap_or_else(|| export::default_filename(&query));
        export::write_csv(Path::new(&filename), &records)?;
        println!("Results saved to {filename}");
    }

    Ok(())
}

/// Drive the browser for one query. The driver is shut down on every exit
/// path; any pipeline error collapses to an empty result set here.
async fn scrape(query: &str, headed: bool) -> Vec<ProductRecord> {
    println!("\nOpening alza.cz...");

    let driver = match ChromiumDriver::launch(headed).await {
        Ok(driver) => driver,
        Err(e) => {
            println!("An error occurred: {e:#}");
            return Vec::new();
        }
    };

    println!("Searching for: {query}");
    let outcome =
        crate::scrape::run_search(&driver, query, &HarvestConfig::default(), print_event).await;

    if let Err(e) = driver.shutdown().await {
        tracing::warn!("failed to shut down browser: {e:#}");
    }
    println!("Browser closed.");

    match outcome {
        Ok(outcome) => {
            tracing::info!(
                pages = outcome.pages,
                records = outcome.records.len(),
                "scrape finished"
            );
            outcome.records
        }
        Err(e) => {
            println!("An error occurred: {e:#}");
            Vec::new()
        }
    }
}

/// Report harvest progress on stdout while the run is still going.
fn print_event(event: HarvestEvent<'_>) {
    match event {
        HarvestEvent::PageStarted { page } => println!("\nScraping page {page}..."),
        HarvestEvent::ListingsFound { page, count } => {
            println!("Found {count} products on page {page}");
            println!("{}", "-".repeat(80));
        }
        HarvestEvent::Record(record) => {
            println!("\n{}", record.name);
            println!("Price: {}", record.price);
            println!("CPU: {}", record.cpu);
            println!("RAM: {}", record.ram);
            println!("URL: {}", record.url);
        }
        HarvestEvent::ItemFailed(error) => println!("Error extracting product: {error:#}"),
        HarvestEvent::LoadingNextPage => {
            println!("\n'More' button found. Loading next page...");
        }
    }
}
