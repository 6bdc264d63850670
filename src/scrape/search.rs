//! Search navigation: locate the search input, submit the query, wait for
//! results to render.

use super::{SEARCH_INPUT_SELECTOR, SEARCH_TIMEOUT_MS};
use crate::browser::PageHandle;
use anyhow::{Context, Result};
use std::time::Duration;

/// Submit a search query and wait a fixed settle delay for results.
///
/// A missing search input is fatal to the run; there is no retry on
/// submission failure.
pub async fn submit_query(page: &dyn PageHandle, query: &str, settle: Duration) -> Result<()> {
    page.wait_for(SEARCH_INPUT_SELECTOR, SEARCH_TIMEOUT_MS)
        .await
        .context("search input not found")?;

    let input = page.find(SEARCH_INPUT_SELECTOR).await?;
    input.click().await?;
    input.type_text(query).await?;
    input.press_key("Enter").await.context("failed to submit search")?;

    tokio::time::sleep(settle).await;
    Ok(())
}
