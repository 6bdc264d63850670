//! Chromium-based driver using chromiumoxide.

use super::{Driver, ElementHandle, PageHandle};
use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use chromiumoxide::browser::{Browser, BrowserConfig};
use chromiumoxide::element::Element;
use chromiumoxide::page::Page;
use futures::StreamExt;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;

/// Poll interval for `wait_for`.
const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Find the Chromium binary path.
pub fn find_chromium() -> Option<PathBuf> {
    // 1. ALZA_CHROMIUM_PATH env
    if let Ok(p) = std::env::var("ALZA_CHROMIUM_PATH") {
        let path = PathBuf::from(&p);
        if path.exists() {
            return Some(path);
        }
    }

    // 2. ~/.alza-tools/chromium/
    if let Some(home) = dirs::home_dir() {
        let candidates = if cfg!(target_os = "macos") {
            vec![
                home.join(".alza-tools/chromium/chrome-mac-arm64/Google Chrome for Testing.app/Contents/MacOS/Google Chrome for Testing"),
                home.join(".alza-tools/chromium/chrome-mac-x64/Google Chrome for Testing.app/Contents/MacOS/Google Chrome for Testing"),
                home.join(".alza-tools/chromium/chrome"),
            ]
        } else {
            vec![
                home.join(".alza-tools/chromium/chrome-linux64/chrome"),
                home.join(".alza-tools/chromium/chrome"),
            ]
        };
        for c in candidates {
            if c.exists() {
                return Some(c);
            }
        }
    }

    // 3. System PATH
    if let Ok(path) = which::which("google-chrome") {
        return Some(path);
    }
    if let Ok(path) = which::which("chromium") {
        return Some(path);
    }
    if let Ok(path) = which::which("chromium-browser") {
        return Some(path);
    }

    // 4. Common macOS locations
    if cfg!(target_os = "macos") {
        let common =
            PathBuf::from("/Applications/Google Chrome.app/Contents/MacOS/Google Chrome");
        if common.exists() {
            return Some(common);
        }
    }

    None
}

/// Chromium-based driver. Owns the browser process exclusively; `shutdown`
/// must run on every exit path of the scrape pipeline.
pub struct ChromiumDriver {
    browser: Mutex<Browser>,
}

impl ChromiumDriver {
    /// Launch a Chromium instance. Headless unless `headed` is set; headless
    /// has no window to maximize, so a fixed large window size stands in.
    pub async fn launch(headed: bool) -> Result<Self> {
        let chrome_path = find_chromium()
            .context("Chromium not found. Install Chrome or set ALZA_CHROMIUM_PATH.")?;

        let mut builder = BrowserConfig::builder()
            .chrome_executable(chrome_path)
            .arg("--disable-gpu")
            .arg("--no-sandbox")
            .arg("--disable-dev-shm-usage")
            .arg("--disable-extensions")
            .arg("--disable-background-networking");
        builder = if headed {
            builder.with_head().arg("--start-maximized")
        } else {
            builder.arg("--headless=new").arg("--window-size=1920,1080")
        };

        let config = builder
            .build()
            .map_err(|e| anyhow::anyhow!("failed to build browser config: {e}"))?;

        let (browser, mut handler) = Browser::launch(config)
            .await
            .context("failed to launch Chromium")?;

        // Spawn the handler task
        tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                let _ = event;
            }
        });

        Ok(Self {
            browser: Mutex::new(browser),
        })
    }
}

#[async_trait]
impl Driver for ChromiumDriver {
    async fn open(&self) -> Result<Box<dyn PageHandle>> {
        let page = self
            .browser
            .lock()
            .await
            .new_page("about:blank")
            .await
            .context("failed to create new page")?;

        Ok(Box::new(ChromiumPage { page }))
    }

    async fn shutdown(&self) -> Result<()> {
        let mut browser = self.browser.lock().await;
        browser.close().await.context("failed to close browser")?;
        let _ = browser.wait().await;
        Ok(())
    }
}

/// A single Chromium page.
pub struct ChromiumPage {
    page: Page,
}

#[async_trait]
impl PageHandle for ChromiumPage {
    async fn navigate(&mut self, url: &str, timeout_ms: u64) -> Result<()> {
        let result = tokio::time::timeout(
            Duration::from_millis(timeout_ms),
            self.page.goto(url),
        )
        .await;

        match result {
            Ok(Ok(_)) => {
                // Wait for the page to finish loading
                let _ = self.page.wait_for_navigation().await;
                Ok(())
            }
            Ok(Err(e)) => bail!("navigation failed: {e}"),
            Err(_) => bail!("navigation timed out after {timeout_ms}ms"),
        }
    }

    async fn wait_for(&self, selector: &str, timeout_ms: u64) -> Result<()> {
        let deadline = Instant::now() + Duration::from_millis(timeout_ms);
        loop {
            if self.page.find_element(selector).await.is_ok() {
                return Ok(());
            }
            if Instant::now() >= deadline {
                bail!("timed out after {timeout_ms}ms waiting for `{selector}`");
            }
            tokio::time::sleep(POLL_INTERVAL).await;
        }
    }

    async fn find(&self, selector: &str) -> Result<Box<dyn ElementHandle>> {
        let element = self
            .page
            .find_element(selector)
            .await
            .with_context(|| format!("element not found: `{selector}`"))?;
        Ok(Box::new(ChromiumElement { inner: element }))
    }

    async fn find_all(&self, selector: &str) -> Result<Vec<Box<dyn ElementHandle>>> {
        let elements = self
            .page
            .find_elements(selector)
            .await
            .with_context(|| format!("elements not found: `{selector}`"))?;
        Ok(elements
            .into_iter()
            .map(|inner| Box::new(ChromiumElement { inner }) as Box<dyn ElementHandle>)
            .collect())
    }

    async fn close(self: Box<Self>) -> Result<()> {
        let _ = self.page.close().await;
        Ok(())
    }
}

/// An element within a Chromium page.
pub struct ChromiumElement {
    inner: Element,
}

#[async_trait]
impl ElementHandle for ChromiumElement {
    async fn find(&self, selector: &str) -> Result<Box<dyn ElementHandle>> {
        let element = self
            .inner
            .find_element(selector)
            .await
            .with_context(|| format!("element not found: `{selector}`"))?;
        Ok(Box::new(ChromiumElement { inner: element }))
    }

    async fn text(&self) -> Result<String> {
        let text = self
            .inner
            .inner_text()
            .await
            .context("failed to read element text")?;
        Ok(text.unwrap_or_default())
    }

    async fn attribute(&self, name: &str) -> Result<Option<String>> {
        self.inner
            .attribute(name)
            .await
            .with_context(|| format!("failed to read attribute `{name}`"))
    }

    async fn click(&self) -> Result<()> {
        self.inner.click().await.context("click failed")?;
        Ok(())
    }

    async fn type_text(&self, text: &str) -> Result<()> {
        self.inner
            .type_str(text)
            .await
            .context("failed to type text")?;
        Ok(())
    }

    async fn press_key(&self, key: &str) -> Result<()> {
        self.inner
            .press_key(key)
            .await
            .with_context(|| format!("failed to press key `{key}`"))?;
        Ok(())
    }

    async fn scroll_into_view(&self) -> Result<()> {
        self.inner
            .scroll_into_view()
            .await
            .context("scroll into view failed")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    #[ignore] // Requires Chromium to be installed
    async fn test_chromium_find_and_read() {
        let driver = ChromiumDriver::launch(false)
            .await
            .expect("failed to launch driver");
        let mut page = driver.open().await.expect("failed to open page");

        page.navigate(
            "data:text/html,<h1>Hello</h1><a class=\"name\" href=\"/x\">Laptop</a>",
            10_000,
        )
        .await
        .expect("navigation failed");

        page.wait_for("h1", 5_000).await.expect("wait_for failed");

        let link = page.find("a.name").await.expect("find failed");
        assert_eq!(link.text().await.expect("text failed").trim(), "Laptop");
        assert!(link
            .attribute("href")
            .await
            .expect("attribute failed")
            .is_some());

        page.close().await.expect("close failed");
        driver.shutdown().await.expect("shutdown failed");
    }
}
