//! Dot-separated numeric versions (`1.2.3`)
//!
//! - Components are compared left to right as unsigned integers of any size
//! - The shorter token is padded with zeros (`1.2` == `1.2.0`)
//! - A component that is not a number counts as zero

use std::cmp::Ordering;
use std::collections::HashMap;

use crate::version::strategy::VersionStrategy;

#[derive(Debug, Default)]
pub struct SemanticStrategy {
    compare_cache: HashMap<(String, String), Ordering>,
}

impl SemanticStrategy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of memoized comparisons
    pub fn cached_comparisons(&self) -> usize {
        self.compare_cache.len()
    }
}

/// Significant digits of each component; zero and non-numeric parts are empty
fn parse_components(version: &str) -> Vec<&str> {
    version
        .split('.')
        .map(|part| {
            let part = part.trim();
            if !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit()) {
                part.trim_start_matches('0')
            } else {
                ""
            }
        })
        .collect()
}

/// Numeric order of two digit strings without leading zeros
fn compare_digits(a: &str, b: &str) -> Ordering {
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

/// Compare two tokens without memoization
pub fn compare_components(a: &str, b: &str) -> Ordering {
    let parts_a = parse_components(a);
    let parts_b = parse_components(b);
    let len = parts_a.len().max(parts_b.len());

    (0..len)
        .map(|i| {
            let part_a = parts_a.get(i).copied().unwrap_or("");
            let part_b = parts_b.get(i).copied().unwrap_or("");
            compare_digits(part_a, part_b)
        })
        .find(|ordering| ordering.is_ne())
        .unwrap_or(Ordering::Equal)
}

impl VersionStrategy for SemanticStrategy {
    fn compare(&mut self, a: &str, b: &str) -> Ordering {
        if let Some(&cached) = self.compare_cache.get(&(a.to_string(), b.to_string())) {
            return cached;
        }

        let result = compare_components(a, b);
        self.compare_cache
            .insert((a.to_string(), b.to_string()), result);
        result
    }

    fn clear_cache(&mut self) {
        self.compare_cache.clear();
    }
}
