//! The product record produced by the extraction pipeline.

use serde::{Deserialize, Serialize};

/// Placeholder for CPU/RAM fields that could not be derived.
pub const NOT_AVAILABLE: &str = "N/A";

/// Placeholder when the price element is absent from a listing.
pub const PRICE_UNAVAILABLE: &str = "Price not available";

/// Placeholder when the description element is absent from a listing.
pub const NO_DESCRIPTION: &str = "No description available";

/// One scraped product listing. Immutable once constructed; its lifetime
/// ends at CSV serialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductRecord {
    /// Product name from the listing's name link.
    #[serde(rename = "Name")]
    pub name: String,
    /// Price text, or [`PRICE_UNAVAILABLE`].
    #[serde(rename = "Price")]
    pub price: String,
    /// CPU derived from the description, or [`NOT_AVAILABLE`].
    #[serde(rename = "CPU")]
    pub cpu: String,
    /// RAM derived from the description, or [`NOT_AVAILABLE`].
    #[serde(rename = "RAM")]
    pub ram: String,
    /// Free-text description block, or [`NO_DESCRIPTION`].
    #[serde(rename = "Description")]
    pub description: String,
    /// Detail-page URL from the name link's href.
    #[serde(rename = "URL")]
    pub url: String,
}
