//! Result-page harvesting and the pagination loop.
//!
//! Pagination is a two-state machine: harvest the current page, then look
//! for the "load more" control. Present → scroll, click, settle, harvest
//! again; absent → done. Absence of the control is the *only* termination
//! signal, exactly as the site behaves today. Known limitation: a transient
//! failure that hides the control ends the run early with whatever was
//! accumulated so far.
//!
//! The listing container grows in place after each "load more" click, so
//! each round harvests only the elements past the already-harvested count.

use super::{
    LISTING_DESCRIPTION_SELECTOR, LISTING_NAME_SELECTOR, LISTING_PRICE_SELECTOR,
    LISTING_SELECTOR, MORE_BUTTON_SELECTOR,
};
use crate::browser::{ElementHandle, PageHandle};
use crate::record::{ProductRecord, NO_DESCRIPTION, PRICE_UNAVAILABLE};
use crate::scrape::parse::{derive_cpu, derive_ram};
use anyhow::{Context, Result};
use std::time::Duration;

/// Timeouts and settle delays for the harvesting loop. Tests inject zero
/// delays; the defaults mirror live site behavior.
#[derive(Debug, Clone)]
pub struct HarvestConfig {
    /// Bounded wait for at least one listing element (fatal on expiry).
    pub listing_timeout_ms: u64,
    /// Fixed delay after submitting the search or loading more results.
    pub result_settle: Duration,
    /// Fixed delay after scrolling the "load more" control into view.
    pub scroll_settle: Duration,
}

impl Default for HarvestConfig {
    fn default() -> Self {
        Self {
            listing_timeout_ms: 10_000,
            result_settle: Duration::from_secs(3),
            scroll_settle: Duration::from_secs(1),
        }
    }
}

/// Pagination state.
enum PageState {
    Harvesting,
    Done,
}

/// A progress event emitted while harvesting, so the CLI can report live
/// status on stdout instead of staying silent for the whole run.
#[derive(Debug)]
pub enum HarvestEvent<'a> {
    /// A result page is about to be harvested.
    PageStarted { page: u32 },
    /// New listings were found on the current page.
    ListingsFound { page: u32, count: usize },
    /// One listing was extracted successfully.
    Record(&'a ProductRecord),
    /// One listing failed to extract and was skipped.
    ItemFailed(&'a anyhow::Error),
    /// The "load more" control was found; the next page is loading.
    LoadingNextPage,
}

/// Harvest every result page, appending records to `records` and reporting
/// progress through `on_event`. Returns the number of pages harvested.
pub async fn run(
    page: &dyn PageHandle,
    config: &HarvestConfig,
    records: &mut Vec<ProductRecord>,
    mut on_event: impl FnMut(HarvestEvent<'_>),
) -> Result<u32> {
    let mut state = PageState::Harvesting;
    let mut pages = 0u32;
    let mut harvested = 0usize;

    while let PageState::Harvesting = state {
        pages += 1;
        on_event(HarvestEvent::PageStarted { page: pages });

        page.wait_for(LISTING_SELECTOR, config.listing_timeout_ms)
            .await
            .context("no product listings appeared")?;
        let listings = page.find_all(LISTING_SELECTOR).await?;

        let new = listings.get(harvested.min(listings.len())..).unwrap_or(&[]);
        on_event(HarvestEvent::ListingsFound {
            page: pages,
            count: new.len(),
        });

        for listing in new {
            match harvest_listing(listing.as_ref()).await {
                Ok(record) => {
                    on_event(HarvestEvent::Record(&record));
                    records.push(record);
                }
                // Fatal to the item only: skip it and keep going.
                Err(e) => {
                    tracing::warn!("error extracting product: {e:#}");
                    on_event(HarvestEvent::ItemFailed(&e));
                }
            }
        }
        harvested = harvested.max(listings.len());

        state = match page.find(MORE_BUTTON_SELECTOR).await {
            Ok(more) => {
                on_event(HarvestEvent::LoadingNextPage);
                more.scroll_into_view().await?;
                tokio::time::sleep(config.scroll_settle).await;
                more.click().await?;
                tokio::time::sleep(config.result_settle).await;
                PageState::Harvesting
            }
            Err(_) => PageState::Done,
        };
    }

    Ok(pages)
}

/// Extract one listing into a [`ProductRecord`].
///
/// The name/link control is required; price and description fall back to
/// sentinels when their controls are absent.
pub async fn harvest_listing(listing: &dyn ElementHandle) -> Result<ProductRecord> {
    let name_link = listing
        .find(LISTING_NAME_SELECTOR)
        .await
        .context("listing has no name link")?;
    let name = name_link.text().await?.trim().to_string();
    let url = name_link
        .attribute("href")
        .await?
        .unwrap_or_default();

    let price = match listing.find(LISTING_PRICE_SELECTOR).await {
        Ok(el) => el.text().await?.trim().to_string(),
        Err(_) => PRICE_UNAVAILABLE.to_string(),
    };

    let description = match listing.find(LISTING_DESCRIPTION_SELECTOR).await {
        Ok(el) => el.text().await?.trim().to_string(),
        Err(_) => NO_DESCRIPTION.to_string(),
    };

    let cpu = derive_cpu(&description);
    let ram = derive_ram(&description);

    Ok(ProductRecord {
        name,
        price,
        cpu,
        ram,
        description,
        url,
    })
}
