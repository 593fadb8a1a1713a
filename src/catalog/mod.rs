//! Static device-plan catalog and the free-text matcher behind the device
//! field's suggestions.

use serde::{Deserialize, Serialize};

/// Plans offered by the order desk, in display order.
pub const DEFAULT_DEVICES: [&str; 17] = [
    "Sim Unlimited call + 1GB",
    "Sim Unlimited call + 5GB",
    "Sim Unlimited call + 25GB",
    "Sim Unlimited call + 50GB (DCM)",
    "Sim Unlimited call + 50GB (SB)",
    "Sim Unlimited call + 100GB",
    "Sim data 2GB 1 year plan",
    "Sim data 4GB 1 year plan",
    "Sim data 6GB 1 year plan",
    "Sim data 10GB 1 year plan",
    "Sim data 35GB",
    "Sim data 50GB",
    "Sim data 100GB",
    "Sim data Unlimited",
    "Pocket wifi 100GB",
    "Pocket wifi 250GB",
    "Pocket wifi Unlimited",
];

/// Ordered plan names. Never mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeviceCatalog {
    entries: Vec<String>,
}

impl Default for DeviceCatalog {
    fn default() -> Self {
        Self::new(DEFAULT_DEVICES)
    }
}

impl DeviceCatalog {
    /// Builds a catalog, dropping repeated names after their first occurrence.
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut unique: Vec<String> = Vec::new();
        for entry in entries {
            let entry = entry.into();
            if !unique.contains(&entry) {
                unique.push(entry);
            }
        }
        Self { entries: unique }
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn filter(&self, query: &str) -> Vec<String> {
        filter(query, &self.entries)
    }

    /// Exact, case-insensitive lookup returning the catalog spelling.
    pub fn find(&self, name: &str) -> Option<&str> {
        let needle = name.trim().to_lowercase();
        self.entries
            .iter()
            .find(|entry| entry.to_lowercase() == needle)
            .map(String::as_str)
    }
}

/// Returns the entries containing every whitespace-separated token of
/// `query`, compared case-insensitively, in catalog order.
///
/// A blank query has no tokens to reject anything and yields the whole
/// catalog.
pub fn filter(query: &str, catalog: &[String]) -> Vec<String> {
    let lowered = query.to_lowercase();
    let tokens: Vec<&str> = lowered.split_whitespace().collect();
    catalog
        .iter()
        .filter(|entry| {
            let candidate = entry.to_lowercase();
            tokens.iter().all(|token| candidate.contains(token))
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_subsequence(result: &[String], catalog: &[String]) -> bool {
        let mut remaining = catalog.iter();
        result
            .iter()
            .all(|item| remaining.by_ref().any(|entry| entry == item))
    }

    #[test]
    fn empty_query_returns_full_catalog() {
        let catalog = DeviceCatalog::default();
        assert_eq!(catalog.filter(""), catalog.entries());
        assert_eq!(catalog.filter("   "), catalog.entries());
    }

    #[test]
    fn all_tokens_must_match() {
        let catalog = DeviceCatalog::default();
        assert_eq!(
            catalog.filter("sim 5gb"),
            vec![
                "Sim Unlimited call + 5GB".to_string(),
                "Sim Unlimited call + 25GB".to_string(),
                "Sim data 35GB".to_string(),
            ]
        );
    }

    #[test]
    fn matching_ignores_case_and_token_order() {
        let catalog = DeviceCatalog::default();
        assert_eq!(
            catalog.filter("PLAN 10gb"),
            vec!["Sim data 10GB 1 year plan".to_string()]
        );
        assert_eq!(catalog.filter("(sb)"), vec!["Sim Unlimited call + 50GB (SB)".to_string()]);
    }

    #[test]
    fn unmatched_query_is_empty() {
        assert!(DeviceCatalog::default().filter("router").is_empty());
    }

    #[test]
    fn results_preserve_catalog_order() {
        let catalog = DeviceCatalog::default();
        for query in ["", "sim", "wifi", "100gb", "unlimited", "data gb", "x"] {
            let result = catalog.filter(query);
            assert!(is_subsequence(&result, catalog.entries()), "query {query:?}");
        }
    }

    #[test]
    fn find_is_exact_and_case_insensitive() {
        let catalog = DeviceCatalog::default();
        assert_eq!(catalog.find("pocket WIFI unlimited"), Some("Pocket wifi Unlimited"));
        assert_eq!(catalog.find("pocket wifi"), None);
    }

    #[test]
    fn duplicates_are_dropped() {
        let catalog = DeviceCatalog::new(["A", "B", "A"]);
        assert_eq!(catalog.entries(), ["A".to_string(), "B".to_string()]);
    }
}
