//! CPU/RAM derivation from listing description text.
//!
//! Pure functions, separate from all I/O, so the matching rules can be
//! tested exhaustively.

use crate::record::{NOT_AVAILABLE, NO_DESCRIPTION};
use regex::Regex;
use std::sync::LazyLock;

/// First comma-delimited segment containing a known CPU vendor/model token.
static CPU_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[^,]*(?:Intel|AMD|Apple M\d+|Ryzen|Core i\d|Celeron|Pentium)[^,]*")
        .expect("CPU pattern is valid")
});

/// `RAM <digits> GB`-shaped token, case-insensitive.
static RAM_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)RAM\s+(\d+\s*GB)").expect("RAM pattern is valid"));

/// Derive the CPU field from a description, or `"N/A"` when no vendor/model
/// token occurs.
pub fn derive_cpu(description: &str) -> String {
    if description == NO_DESCRIPTION {
        return NOT_AVAILABLE.to_string();
    }
    CPU_PATTERN
        .find(description)
        .map(|m| m.as_str().trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

/// Derive the RAM field from a description, or `"N/A"` when no
/// `RAM <n> GB` token occurs.
pub fn derive_ram(description: &str) -> String {
    if description == NO_DESCRIPTION {
        return NOT_AVAILABLE.to_string();
    }
    RAM_PATTERN
        .captures(description)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cpu_and_ram_from_typical_description() {
        let desc = "Intel Core i5, RAM 16 GB, 512GB SSD";
        assert_eq!(derive_cpu(desc), "Intel Core i5");
        assert_eq!(derive_ram(desc), "16 GB");
    }

    #[test]
    fn test_no_recognizable_tokens() {
        let desc = "15.6\" display, 512GB SSD, Windows 11";
        assert_eq!(derive_cpu(desc), "N/A");
        assert_eq!(derive_ram(desc), "N/A");
    }

    #[test]
    fn test_cpu_vendor_variants() {
        assert_eq!(derive_cpu("AMD Ryzen 7 7840HS, 16GB"), "AMD Ryzen 7 7840HS");
        assert_eq!(derive_cpu("Apple M2 8-core, macOS"), "Apple M2 8-core");
        assert_eq!(derive_cpu("Intel Celeron N4500"), "Intel Celeron N4500");
        assert_eq!(derive_cpu("Intel Pentium Gold 8505"), "Intel Pentium Gold 8505");
    }

    #[test]
    fn test_cpu_stops_at_commas() {
        // The match never crosses a comma in either direction.
        let desc = "15.6\" FHD, Intel Core i7 1355U, Iris Xe";
        assert_eq!(derive_cpu(desc), "Intel Core i7 1355U");
    }

    #[test]
    fn test_ram_case_insensitive_and_spacing() {
        assert_eq!(derive_ram("ram 8 GB, SSD"), "8 GB");
        assert_eq!(derive_ram("RAM 32GB DDR5"), "32GB");
    }

    #[test]
    fn test_ram_requires_ram_prefix() {
        // A bare "16 GB" without the RAM keyword does not match.
        assert_eq!(derive_ram("16 GB of memory"), "N/A");
    }

    #[test]
    fn test_sentinel_description_yields_na() {
        assert_eq!(derive_cpu(NO_DESCRIPTION), "N/A");
        assert_eq!(derive_ram(NO_DESCRIPTION), "N/A");
    }
}
