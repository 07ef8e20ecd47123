//! Feature registry and best-match resolution
//!
//! Entries are grouped by feature key in registration order. Resolving a key
//! for a version keeps the entries whose window contains the version and picks
//! the one with the highest lower bound; an entry without a lower bound loses
//! to any entry that declares one. Results, including "no match", are memoized
//! per `(key, version)` until the next mutation.

use std::cmp::Ordering;
use std::collections::HashMap;

use indexmap::IndexMap;
use tracing::{debug, warn};

use crate::feature::entry::FeatureEntry;
use crate::version::strategy::VersionStrategy;

pub struct FeatureRegistry<H> {
    strategy: Box<dyn VersionStrategy>,
    features: IndexMap<String, Vec<FeatureEntry<H>>>,
    resolved: HashMap<(String, String), Option<H>>,
}

impl<H: Clone> FeatureRegistry<H> {
    pub fn new(strategy: Box<dyn VersionStrategy>) -> Self {
        Self {
            strategy,
            features: IndexMap::new(),
            resolved: HashMap::new(),
        }
    }

    /// Register a single entry
    ///
    /// An entry with an empty key is reported and ignored.
    pub fn register(&mut self, entry: FeatureEntry<H>) {
        if self.insert(entry) {
            self.resolved.clear();
        }
    }

    /// Register a batch of entries, applying the same validation as [`Self::register`]
    pub fn register_many<I>(&mut self, entries: I)
    where
        I: IntoIterator<Item = FeatureEntry<H>>,
    {
        let accepted = entries
            .into_iter()
            .fold(0usize, |count, entry| count + usize::from(self.insert(entry)));
        debug!("Registered {} feature entries", accepted);
        self.resolved.clear();
    }

    fn insert(&mut self, entry: FeatureEntry<H>) -> bool {
        if entry.key.trim().is_empty() {
            warn!(
                "Invalid feature entry rejected: empty key (min: {:?}, max: {:?})",
                entry.min_version, entry.max_version
            );
            return false;
        }

        debug!(
            "Registering feature {} [{:?}, {:?})",
            entry.key, entry.min_version, entry.max_version
        );
        self.features
            .entry(entry.key.clone())
            .or_default()
            .push(entry);
        true
    }

    /// Best-matching implementation of `key` for `current_version`
    pub fn resolve(&mut self, key: &str, current_version: &str) -> Option<H> {
        if key.is_empty() {
            warn!("Empty feature key provided");
            return None;
        }
        if current_version.is_empty() {
            return None;
        }

        let cache_key = (key.to_string(), current_version.to_string());
        if let Some(cached) = self.resolved.get(&cache_key) {
            debug!("Resolution cache hit for {}@{}", key, current_version);
            return cached.clone();
        }

        let result = self.features.get(key).and_then(|features| {
            find_best_match(self.strategy.as_mut(), features, current_version)
                .map(|feature| feature.implementation.clone())
        });

        self.resolved.insert(cache_key, result.clone());
        result
    }

    /// Whether any implementation of `key` applies to `current_version`
    pub fn is_available(&mut self, key: &str, current_version: &str) -> bool {
        self.resolve(key, current_version).is_some()
    }

    /// Drop every entry and every memoized result
    pub fn reset(&mut self) {
        debug!("Resetting feature registry");
        self.features.clear();
        self.clear_cache();
    }

    /// Drop memoized results while keeping the registered entries
    pub fn clear_cache(&mut self) {
        self.resolved.clear();
        self.strategy.clear_cache();
    }

    /// Registered keys in first-registration order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.features.keys().map(String::as_str)
    }

    /// Entries registered under `key`, in registration order
    pub fn entries(&self, key: &str) -> &[FeatureEntry<H>] {
        self.features.get(key).map(Vec::as_slice).unwrap_or_default()
    }

    /// Number of memoized `(key, version)` resolutions
    pub fn cached_resolutions(&self) -> usize {
        self.resolved.len()
    }

    pub fn strategy_mut(&mut self) -> &mut dyn VersionStrategy {
        self.strategy.as_mut()
    }
}

/// Pick the applicable entry with the highest lower bound
///
/// Ties keep registration order.
fn find_best_match<'a, H>(
    strategy: &mut dyn VersionStrategy,
    features: &'a [FeatureEntry<H>],
    current_version: &str,
) -> Option<&'a FeatureEntry<H>> {
    let mut best: Option<&'a FeatureEntry<H>> = None;

    for feature in features {
        let meets_min = feature
            .lower_bound()
            .is_none_or(|min| strategy.gte(current_version, min));
        let meets_max = feature
            .upper_bound()
            .is_none_or(|max| strategy.lt(current_version, max));
        if !(meets_min && meets_max) {
            continue;
        }

        best = match best {
            Some(incumbent) if !outranks(strategy, feature, incumbent) => Some(incumbent),
            _ => Some(feature),
        };
    }

    best
}

fn outranks<H>(
    strategy: &mut dyn VersionStrategy,
    candidate: &FeatureEntry<H>,
    incumbent: &FeatureEntry<H>,
) -> bool {
    match (candidate.lower_bound(), incumbent.lower_bound()) {
        (Some(candidate), Some(incumbent)) => {
            strategy.compare(candidate, incumbent) == Ordering::Greater
        }
        (Some(_), None) => true,
        (None, _) => false,
    }
}
