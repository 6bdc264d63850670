//! Column classification and filter-value aggregation.
//!
//! Pure functions over the header row and data rows; classification happens
//! once per run and is invariant for the whole document.

use std::collections::BTreeSet;

/// Indices of the classified CPU-like and RAM-like columns, when present.
/// At most one of each; no column carries both classifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnClassification {
    pub cpu: Option<usize>,
    pub ram: Option<usize>,
}

/// Classify headers by case-insensitive substring match. First match wins.
/// The RAM scan skips the CPU column so a header like "CPU memory" never
/// feeds both filters.
pub fn classify_columns(headers: &[String]) -> ColumnClassification {
    let cpu = headers.iter().position(|h| {
        let h = h.to_lowercase();
        h.contains("cpu") || h.contains("processor")
    });

    let ram = headers.iter().enumerate().position(|(i, h)| {
        if Some(i) == cpu {
            return false;
        }
        let h = h.to_lowercase();
        h.contains("ram") || h.contains("memory") || h.contains("paměť")
    });

    ColumnClassification { cpu, ram }
}

/// The sorted set of distinct non-empty values in one column — the options
/// offered by that column's filter dropdown.
pub fn filter_domain(rows: &[Vec<String>], column: usize) -> Vec<String> {
    rows.iter()
        .filter_map(|row| row.get(column))
        .filter(|v| !v.is_empty())
        .cloned()
        .collect::<BTreeSet<String>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_classifies_cpu_and_ram() {
        let c = classify_columns(&headers(&["Name", "Price", "CPU", "RAM", "URL"]));
        assert_eq!(c.cpu, Some(2));
        assert_eq!(c.ram, Some(3));
    }

    #[test]
    fn test_substring_and_case_insensitive() {
        let c = classify_columns(&headers(&["Product processor", "Total Memory"]));
        assert_eq!(c.cpu, Some(0));
        assert_eq!(c.ram, Some(1));
    }

    #[test]
    fn test_czech_memory_header() {
        let c = classify_columns(&headers(&["Název", "Operační paměť"]));
        assert_eq!(c.cpu, None);
        assert_eq!(c.ram, Some(1));
    }

    #[test]
    fn test_first_match_wins() {
        let c = classify_columns(&headers(&["CPU model", "CPU speed", "RAM", "RAM type"]));
        assert_eq!(c.cpu, Some(0));
        assert_eq!(c.ram, Some(2));
    }

    #[test]
    fn test_no_column_matches_both() {
        // "CPU memory" matches both heuristics; CPU claims it and the RAM
        // scan moves on.
        let c = classify_columns(&headers(&["CPU memory", "RAM"]));
        assert_eq!(c.cpu, Some(0));
        assert_eq!(c.ram, Some(1));

        let only = classify_columns(&headers(&["CPU memory"]));
        assert_eq!(only.cpu, Some(0));
        assert_eq!(only.ram, None);
    }

    #[test]
    fn test_classification_is_deterministic() {
        let h = headers(&["Name", "Processor", "Paměť"]);
        let first = classify_columns(&h);
        for _ in 0..10 {
            assert_eq!(classify_columns(&h), first);
        }
    }

    #[test]
    fn test_filter_domain_sorted_distinct_non_empty() {
        let rows = vec![
            vec!["b".to_string()],
            vec!["a".to_string()],
            vec![String::new()],
            vec!["b".to_string()],
            vec!["c".to_string()],
        ];
        assert_eq!(filter_domain(&rows, 0), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_filter_domain_out_of_range_column() {
        let rows = vec![vec!["x".to_string()]];
        assert!(filter_domain(&rows, 5).is_empty());
    }
}
