//! Browser session management for a scrape run.
//!
//! A session owns one page bound to the target site. Opening navigates to
//! the homepage and dismisses the cookie-consent overlay best-effort;
//! `close()` consumes the session and releases the page.

use super::{COOKIE_ACCEPT_SELECTOR, COOKIE_TIMEOUT_MS, NAV_TIMEOUT_MS, SITE_URL};
use crate::browser::{Driver, PageHandle};
use anyhow::{Context, Result};
use std::time::Duration;

/// Settle delay after accepting the cookie overlay.
const COOKIE_SETTLE: Duration = Duration::from_secs(1);

/// An open browser session on the target site.
pub struct ScrapeSession {
    page: Box<dyn PageHandle>,
}

impl ScrapeSession {
    /// Open a page, navigate to the site, and try to dismiss the
    /// cookie-consent overlay. Navigation failure is fatal to the run;
    /// a missing cookie control is not.
    pub async fn open(driver: &dyn Driver) -> Result<Self> {
        let mut page = driver.open().await?;

        tracing::info!("opening {SITE_URL}");
        if let Err(e) = page.navigate(SITE_URL, NAV_TIMEOUT_MS).await {
            // The page must not leak when navigation fails.
            let _ = page.close().await;
            return Err(e).context("failed to open alza.cz");
        }

        let session = Self { page };
        session.dismiss_cookie_overlay().await;
        Ok(session)
    }

    /// Best-effort cookie dismissal: absence of the control within the
    /// bounded wait is not an error.
    async fn dismiss_cookie_overlay(&self) {
        let accepted = async {
            self.page
                .wait_for(COOKIE_ACCEPT_SELECTOR, COOKIE_TIMEOUT_MS)
                .await?;
            self.page.find(COOKIE_ACCEPT_SELECTOR).await?.click().await
        }
        .await;

        match accepted {
            Ok(()) => {
                tracing::info!("cookie consent accepted");
                tokio::time::sleep(COOKIE_SETTLE).await;
            }
            Err(e) => tracing::debug!("no cookie overlay found or already accepted: {e:#}"),
        }
    }

    /// The session's page.
    pub fn page(&self) -> &dyn PageHandle {
        self.page.as_ref()
    }

    /// Close the session and release the page.
    pub async fn close(self) -> Result<()> {
        self.page.close().await
    }
}
