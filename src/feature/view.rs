//! Resolution façade bound to a live current version
//!
//! [`FeatureView`] owns one registry (and through it one strategy) and reads
//! the current version from a [`VersionSource`] every time it resolves.
//! Registration and resolution each run under a single lock, so a resolution
//! never observes a half-applied batch.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::debug;

use crate::feature::entry::FeatureEntry;
use crate::feature::registry::FeatureRegistry;
use crate::feature::route::{RouteDecision, RouteVersion, route_decision};
use crate::version::source::VersionSource;
use crate::version::strategy::VersionStrategy;

pub struct FeatureView<H> {
    registry: Mutex<FeatureRegistry<H>>,
    source: Arc<dyn VersionSource>,
}

impl<H: Clone> FeatureView<H> {
    pub fn new(strategy: Box<dyn VersionStrategy>, source: Arc<dyn VersionSource>) -> Self {
        Self {
            registry: Mutex::new(FeatureRegistry::new(strategy)),
            source,
        }
    }

    /// Lock the registry; a poisoned lock is recovered so resolution stays total
    fn lock_registry(&self) -> MutexGuard<'_, FeatureRegistry<H>> {
        self.registry.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// The version resolution currently runs against
    pub fn current_version(&self) -> Option<String> {
        self.source.current_version().filter(|v| !v.is_empty())
    }

    pub fn register(&self, entry: FeatureEntry<H>) {
        self.lock_registry().register(entry);
    }

    pub fn register_many<I>(&self, entries: I)
    where
        I: IntoIterator<Item = FeatureEntry<H>>,
    {
        self.lock_registry().register_many(entries);
    }

    /// Implementation of `key` for the current version
    ///
    /// Returns None when no current version has been produced yet.
    pub fn resolve(&self, key: &str) -> Option<H> {
        let Some(version) = self.current_version() else {
            debug!("No current version available, skipping resolution of {}", key);
            return None;
        };
        self.lock_registry().resolve(key, &version)
    }

    pub fn is_available(&self, key: &str) -> bool {
        self.resolve(key).is_some()
    }

    pub fn reset(&self) {
        self.lock_registry().reset();
    }

    /// Registered keys in first-registration order
    pub fn keys(&self) -> Vec<String> {
        self.lock_registry().keys().map(str::to_string).collect()
    }

    /// Whether the route declared for `current_route` fits the current version
    pub fn route_decision(&self, routes: &[RouteVersion], current_route: &str) -> RouteDecision {
        let version = self.current_version();
        let mut registry = self.lock_registry();
        route_decision(
            registry.strategy_mut(),
            routes,
            current_route,
            version.as_deref(),
        )
    }
}
