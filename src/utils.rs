//! Common utility functions shared across the codebase.

use std::collections::HashSet;

/// Deduplicate strings, keeping first-occurrence order.
pub fn uniq<I: IntoIterator<Item = String>>(items: I) -> Vec<String> {
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}
