//! Extraction pipeline: browser session → search → paginated harvesting.

pub mod export;
pub mod harvest;
pub mod parse;
pub mod search;
pub mod session;

use crate::browser::Driver;
use crate::record::ProductRecord;
use anyhow::Result;
use harvest::HarvestConfig;
use session::ScrapeSession;

/// Target site.
pub const SITE_URL: &str = "https://www.alza.cz";

/// Cookie-consent accept control.
pub const COOKIE_ACCEPT_SELECTOR: &str = "a.js-cookies-info-accept";
/// Search input on the homepage.
pub const SEARCH_INPUT_SELECTOR: &str = "input[data-testid='searchInput']";
/// One product listing on a results page.
pub const LISTING_SELECTOR: &str = "div.browsingitem";
/// Name/link control within a listing.
pub const LISTING_NAME_SELECTOR: &str = "a.name";
/// Price control within a listing.
pub const LISTING_PRICE_SELECTOR: &str = "span.price-box__primary-price__value";
/// Free-text description block within a listing.
pub const LISTING_DESCRIPTION_SELECTOR: &str = "div.Description";
/// "Load more" pagination control.
pub const MORE_BUTTON_SELECTOR: &str = "a.js-button-more.button-more";

/// Initial navigation timeout.
pub const NAV_TIMEOUT_MS: u64 = 30_000;
/// Bounded wait for the cookie-consent control (best-effort).
pub const COOKIE_TIMEOUT_MS: u64 = 5_000;
/// Bounded wait for the search input (fatal on expiry).
pub const SEARCH_TIMEOUT_MS: u64 = 10_000;

/// Scraped pages summary returned by [`run_search`].
#[derive(Debug, Clone)]
pub struct ScrapeOutcome {
    /// All records, in listing order across pages.
    pub records: Vec<ProductRecord>,
    /// How many result pages were harvested.
    pub pages: u32,
}

/// Run the whole extraction pipeline against an open driver: navigate to the
/// site, dismiss the cookie overlay, submit the query, and harvest every
/// paginated result page. The record accumulator is owned here and passed
/// into each page-harvesting step; `on_event` receives live progress so the
/// caller can report it while the run is still going.
///
/// The page is closed on every exit path; closing the browser itself is the
/// caller's responsibility (it owns the [`Driver`]).
pub async fn run_search(
    driver: &dyn Driver,
    query: &str,
    config: &HarvestConfig,
    on_event: impl FnMut(harvest::HarvestEvent<'_>),
) -> Result<ScrapeOutcome> {
    let session = ScrapeSession::open(driver).await?;

    let mut records = Vec::new();
    let result = drive(&session, query, config, &mut records, on_event).await;
    if let Err(e) = session.close().await {
        tracing::debug!("failed to close page: {e:#}");
    }

    let pages = result?;
    Ok(ScrapeOutcome { records, pages })
}

async fn drive(
    session: &ScrapeSession,
    query: &str,
    config: &HarvestConfig,
    records: &mut Vec<ProductRecord>,
    on_event: impl FnMut(harvest::HarvestEvent<'_>),
) -> Result<u32> {
    search::submit_query(session.page(), query, config.result_settle).await?;
    harvest::run(session.page(), config, records, on_event).await
}
