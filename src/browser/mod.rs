//! Browser driver abstraction.
//!
//! Defines the `Driver`, `PageHandle` and `ElementHandle` traits that
//! abstract over the browser engine (currently Chromium via chromiumoxide).
//! The harvesting loop is written entirely against these traits so it can be
//! tested with a fake driver and no real browser.

pub mod chromium;

use anyhow::Result;
use async_trait::async_trait;

/// A browser engine that can open pages.
#[async_trait]
pub trait Driver: Send + Sync {
    /// Open a new page (tab).
    async fn open(&self) -> Result<Box<dyn PageHandle>>;
    /// Shut down the browser engine, releasing the process.
    async fn shutdown(&self) -> Result<()>;
}

/// A single browser page.
#[async_trait]
pub trait PageHandle: Send + Sync {
    /// Navigate to a URL with a timeout.
    async fn navigate(&mut self, url: &str, timeout_ms: u64) -> Result<()>;
    /// Block until an element matching `selector` exists, polling at a fixed
    /// interval. Errors when the timeout elapses first.
    async fn wait_for(&self, selector: &str, timeout_ms: u64) -> Result<()>;
    /// Find the first element matching `selector`. Errors when absent.
    async fn find(&self, selector: &str) -> Result<Box<dyn ElementHandle>>;
    /// Find all elements matching `selector`, in document order.
    async fn find_all(&self, selector: &str) -> Result<Vec<Box<dyn ElementHandle>>>;
    /// Close this page.
    async fn close(self: Box<Self>) -> Result<()>;
}

/// An element within a page.
#[async_trait]
pub trait ElementHandle: Send + Sync {
    /// Find the first descendant matching `selector`. Errors when absent.
    async fn find(&self, selector: &str) -> Result<Box<dyn ElementHandle>>;
    /// Visible text content, trimmed by the caller.
    async fn text(&self) -> Result<String>;
    /// Attribute value, `None` when the attribute is not set.
    async fn attribute(&self, name: &str) -> Result<Option<String>>;
    /// Click the element.
    async fn click(&self) -> Result<()>;
    /// Type text into the element (it should be focused or focusable).
    async fn type_text(&self, text: &str) -> Result<()>;
    /// Press a named key (e.g. "Enter") with the element focused.
    async fn press_key(&self, key: &str) -> Result<()>;
    /// Scroll the element into the viewport.
    async fn scroll_into_view(&self) -> Result<()>;
}
